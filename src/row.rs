
//! The row capability surface consumed by the mapper.
//!
//! This trait isolates everything the mapper needs from the external
//! query-execution component to a single seam, so the rest of the crate
//! never touches a driver directly. The collaborator owns the cursor: it
//! positions the row before calling the mapper and advances or closes it
//! afterwards. The mapper only reads.

use crate::error::MapError;
use crate::value::Value;

/// One positioned row of a tabular query result.
///
/// Ordinals are 1-based throughout, matching the row-iteration protocol the
/// external collaborator implements; ordinal 0 is out of range. Implementors
/// surface driver failures as [`MapError`] — the mapper propagates them
/// verbatim and never retries.
pub trait Row {
    /// Number of columns in the row. May be 0.
    fn column_count(&self) -> Result<usize, MapError>;

    /// Display name of the column at the given 1-based ordinal.
    fn column_name(&self, ordinal: usize) -> Result<&str, MapError>;

    /// Typed value of the column at the given 1-based ordinal.
    ///
    /// SQL null is represented as [`Value::Null`], never as an error.
    fn value(&self, ordinal: usize) -> Result<Value, MapError>;
}
