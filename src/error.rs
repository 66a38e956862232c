
//! Error types for row mapping.

use thiserror::Error;

/// Unified error type for row-to-record mapping.
///
/// Every failure originates in the row handle supplied by the caller; the
/// mapper performs no recovery and no retries, so `map_row` surfaces the
/// first failure verbatim and produces no record for that row.
#[derive(Error, Debug)]
pub enum MapError {
    /// The row handle could not report column metadata (count or name),
    /// e.g. because the underlying cursor is already closed.
    #[error("column metadata unavailable: {message}")]
    Metadata { message: String },

    /// Reading a column's value failed at the driver level.
    #[error("failed to read column {ordinal}: {message}")]
    ColumnRead { ordinal: usize, message: String },
}

impl MapError {
    /// Create a [`Metadata`](MapError::Metadata) error.
    pub fn metadata(message: impl Into<String>) -> Self {
        MapError::Metadata {
            message: message.into(),
        }
    }

    /// Create a [`ColumnRead`](MapError::ColumnRead) error for the given
    /// 1-based ordinal.
    ///
    /// ```rust
    /// # use rowmap::MapError;
    /// let err = MapError::column_read(2, "cursor closed");
    /// assert!(err.to_string().contains("column 2"));
    /// ```
    pub fn column_read(ordinal: usize, message: impl Into<String>) -> Self {
        MapError::ColumnRead {
            ordinal,
            message: message.into(),
        }
    }
}
