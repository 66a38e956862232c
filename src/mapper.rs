
//! The row-to-record mapper.

use crate::error::MapError;
use crate::record::Record;
use crate::row::Row;
use crate::value::{normalize_driver_value, Value};

/// The three overridable policy points of [`RowMapper`].
///
/// Each field is a plain function value; override one with struct-update
/// syntax and leave the rest at their defaults:
///
/// ```rust
/// use rowmap::{MapperPolicy, RowMapper};
///
/// let policy = MapperPolicy {
///     derive_key: Box::new(|name: &str| name.to_lowercase()),
///     ..MapperPolicy::default()
/// };
/// let mapper = RowMapper::with_policy(policy);
/// # let _ = mapper;
/// ```
///
/// All closures must be `Send + Sync`; a mapper is shared freely across
/// threads as long as each concurrent call gets its own row handle.
pub struct MapperPolicy {
    /// Construct the empty record for one row. Receives the column count as
    /// a capacity hint. Default: [`Record::with_capacity`].
    pub create_record: Box<dyn Fn(usize) -> Record + Send + Sync>,

    /// Derive the record key from the raw column display name.
    /// Default: identity. Key *equality* is still decided by the record
    /// (case-insensitive), not by this step.
    pub derive_key: Box<dyn Fn(&str) -> String + Send + Sync>,

    /// Extract the value of the column at a 1-based ordinal. Must yield
    /// [`Value::Null`] to represent SQL null. Default: the row's generic
    /// typed read followed by [`normalize_driver_value`], which rewrites
    /// recognized non-standard timestamp wrappers to plain timestamps.
    pub extract_value: Box<dyn Fn(&dyn Row, usize) -> Result<Value, MapError> + Send + Sync>,
}

impl Default for MapperPolicy {
    fn default() -> Self {
        MapperPolicy {
            create_record: Box::new(Record::with_capacity),
            derive_key: Box::new(str::to_owned),
            extract_value: Box::new(|row: &dyn Row, ordinal: usize| {
                row.value(ordinal).map(normalize_driver_value)
            }),
        }
    }
}

/// Maps one tabular row into one ordered, case-insensitive-keyed [`Record`].
///
/// Construction fixes the configuration; [`map_row`](RowMapper::map_row) is
/// then a pure read of the row handle — it never advances or closes the
/// cursor, allocates a fresh record per call, and keeps no state across
/// calls.
///
/// ```rust
/// use rowmap::RowMapper;
///
/// // Null-valued columns are dropped from the record:
/// let mapper = RowMapper::new().ignore_null(true);
/// # let _ = mapper;
/// ```
pub struct RowMapper {
    ignore_null: bool,
    policy: MapperPolicy,
}

impl RowMapper {
    /// A mapper with default policy that keeps null-valued columns.
    pub fn new() -> Self {
        RowMapper::with_policy(MapperPolicy::default())
    }

    /// A mapper with a custom [`MapperPolicy`], keeping null-valued columns.
    pub fn with_policy(policy: MapperPolicy) -> Self {
        RowMapper {
            ignore_null: false,
            policy,
        }
    }

    /// Set whether columns whose extracted value is null are omitted from
    /// the record.
    pub fn ignore_null(mut self, ignore_null: bool) -> Self {
        self.ignore_null = ignore_null;
        self
    }

    /// Map one positioned row into a [`Record`].
    ///
    /// `_row_num` is the 1-based row index of the surrounding traversal. It
    /// is accepted for symmetry with the multi-row mapping protocol and
    /// plays no part in key or value derivation.
    ///
    /// Columns are visited in ascending ordinal order, so the record
    /// iterates in column order. When two columns derive case-insensitively
    /// equal keys, the later ordinal's value wins. Any metadata or
    /// value-read failure from the row handle is propagated as-is and no
    /// record is returned.
    pub fn map_row(&self, row: &dyn Row, _row_num: usize) -> Result<Record, MapError> {
        let column_count = row.column_count()?;
        let mut record = (self.policy.create_record)(column_count);

        for ordinal in 1..=column_count {
            let name = row.column_name(ordinal)?;
            let value = (self.policy.extract_value)(row, ordinal)?;
            if !self.ignore_null || !value.is_null() {
                let key = (self.policy.derive_key)(name);
                record.insert(key, value);
            }
        }

        Ok(record)
    }
}

impl Default for RowMapper {
    fn default() -> Self {
        RowMapper::new()
    }
}
