#![doc = r#"
Row-to-record mapping for tabular query results.

`rowmap` turns one row of a query result into an ordered, case-insensitive
key-value [`Record`], ready for generic downstream processing (attribute
lookup, merging, serialization). It is the mapping policy only: issuing the
statement, stepping the cursor, and driver connection management belong to
the surrounding query-execution component, which reaches this crate through
the [`Row`] trait once per row.

# Quick start

```rust
use rowmap::{MapError, Record, Row, RowMapper, Value};

// The external collaborator implements `Row` over its driver's result row.
struct SqliteRow {
    columns: Vec<(String, Value)>,
}

impl Row for SqliteRow {
    fn column_count(&self) -> Result<usize, MapError> {
        Ok(self.columns.len())
    }
    fn column_name(&self, ordinal: usize) -> Result<&str, MapError> {
        self.columns
            .get(ordinal - 1)
            .map(|(name, _)| name.as_str())
            .ok_or_else(|| MapError::metadata(format!("no column {ordinal}")))
    }
    fn value(&self, ordinal: usize) -> Result<Value, MapError> {
        self.columns
            .get(ordinal - 1)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| MapError::column_read(ordinal, "out of range"))
    }
}

let row = SqliteRow {
    columns: vec![
        ("id".to_owned(), Value::Int(1)),
        ("Name".to_owned(), Value::from("Ann")),
        ("deleted_at".to_owned(), Value::Null),
    ],
};

let mapper = RowMapper::new();
let record: Record = mapper.map_row(&row, 1)?;

assert_eq!(record.len(), 3);
assert_eq!(record.get("NAME"), Some(&Value::Text("Ann".to_owned())));

// Drop null-valued columns instead:
let record = RowMapper::new().ignore_null(true).map_row(&row, 1)?;
assert_eq!(record.len(), 2);
assert!(!record.contains_key("deleted_at"));
# Ok::<(), MapError>(())
```

# Record semantics

- Keys compare case-insensitively; iteration follows column ordinal order,
  not alphabetic order.
- On a case-insensitive key collision the later column's value wins, and
  the entry keeps its original position and key text.
- A fresh record is allocated per row and owned by the caller.

# Customization

Three policy points cover everything a variant mapper needs, with no
subclassing: record construction, key derivation, and value extraction.
See [`MapperPolicy`]. The default extraction performs a generic typed read
and normalizes the non-standard timestamp wrappers some drivers return for
timestamp-typed columns ([`normalize_driver_value`]).

# Value types

| Variant | Rust type |
|---------|-----------|
| `Null` | — |
| `Bool` | `bool` |
| `Int` | `i64` |
| `Float` | `f64` |
| `Text` | `String` |
| `Bytes` | [`bytes::Bytes`] |
| `Date` | `chrono::NaiveDate` |
| `Time` | `chrono::NaiveTime` |
| `DateTime` | `chrono::NaiveDateTime` |
| `DateTimeTz` | `chrono::DateTime<chrono::FixedOffset>` |
| `Other` | [`OpaqueValue`] (driver-specific object) |

# Error handling

Every failure originates in the row handle and is propagated verbatim as a
[`MapError`]; `map_row` never retries and never returns a partial record.
"#]

pub mod error;
pub mod mapper;
pub mod record;
pub mod row;
pub mod value;

pub use error::MapError;
pub use mapper::{MapperPolicy, RowMapper};
pub use record::Record;
pub use row::Row;
pub use value::{normalize_driver_value, type_name, DriverObject, OpaqueValue, Value};
