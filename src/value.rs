
//! The dynamically typed column value and the driver-quirk normalization.
//!
//! A [`Value`] is what a [`Row`](crate::Row) hands back for one column:
//! null, a primitive, a `chrono` temporal, raw bytes, or an opaque
//! driver-specific object. [`normalize_driver_value`] rewrites the one
//! recognized class of opaque objects — non-standard timestamp wrappers
//! returned by some drivers for timestamp-typed columns — into the plain
//! [`Value::DateTime`] a well-behaved driver would have produced.

use std::fmt;
use std::sync::Arc;

/// A dynamically typed value read from one column of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL null.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(bytes::Bytes),
    Date(chrono::NaiveDate),
    Time(chrono::NaiveTime),
    DateTime(chrono::NaiveDateTime),
    DateTimeTz(chrono::DateTime<chrono::FixedOffset>),
    /// A driver-specific object the generic read could not decompose.
    Other(OpaqueValue),
}

impl Value {
    /// Whether this value is SQL null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Returns a human-readable name for a [`Value`] variant.
///
/// Handy in caller diagnostics when a downstream conversion rejects a value.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "Null",
        Value::Bool(_) => "Bool",
        Value::Int(_) => "Int",
        Value::Float(_) => "Float",
        Value::Text(_) => "Text",
        Value::Bytes(_) => "Bytes",
        Value::Date(_) => "Date",
        Value::Time(_) => "Time",
        Value::DateTime(_) => "DateTime",
        Value::DateTimeTz(_) => "DateTimeTz",
        Value::Other(_) => "Other",
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

macro_rules! impl_from_prim {
    ($t:ty, $variant:ident) => {
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::$variant(v.into())
            }
        }
    };
}

impl_from_prim!(bool, Bool);
impl_from_prim!(i64, Int);
impl_from_prim!(i32, Int);
impl_from_prim!(i16, Int);
impl_from_prim!(i8, Int);
impl_from_prim!(f64, Float);
impl_from_prim!(f32, Float);
impl_from_prim!(String, Text);
impl_from_prim!(bytes::Bytes, Bytes);
impl_from_prim!(chrono::NaiveDate, Date);
impl_from_prim!(chrono::NaiveTime, Time);
impl_from_prim!(chrono::NaiveDateTime, DateTime);
impl_from_prim!(chrono::DateTime<chrono::FixedOffset>, DateTimeTz);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

// ---------------------------------------------------------------------------
// Opaque driver objects
// ---------------------------------------------------------------------------

/// A driver-specific object carried through the mapping unchanged.
///
/// Drivers whose typed read yields something outside the standard [`Value`]
/// variants wrap it in an `OpaqueValue`. The handle is shared and cheap to
/// clone; equality is handle identity, not structural.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn DriverObject>);

/// Implemented by driver-specific objects placed in [`Value::Other`].
///
/// The single hook, [`as_local_datetime`](DriverObject::as_local_datetime),
/// lets a driver declare that its object is really a non-standard timestamp
/// wrapper. The default extraction policy calls it via
/// [`normalize_driver_value`]; objects that return `None` pass through
/// untouched.
pub trait DriverObject: fmt::Debug + Send + Sync + 'static {
    /// The timestamp this object wraps, if it is a timestamp wrapper.
    fn as_local_datetime(&self) -> Option<chrono::NaiveDateTime> {
        None
    }
}

impl OpaqueValue {
    pub fn new(object: impl DriverObject) -> Self {
        OpaqueValue(Arc::new(object))
    }

    /// The timestamp the wrapped object exposes, if any.
    pub fn as_local_datetime(&self) -> Option<chrono::NaiveDateTime> {
        self.0.as_local_datetime()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<OpaqueValue> for Value {
    fn from(v: OpaqueValue) -> Self {
        Value::Other(v)
    }
}

// ---------------------------------------------------------------------------
// Driver-quirk normalization
// ---------------------------------------------------------------------------

/// Normalize a value read by a generic typed read.
///
/// Some drivers return a non-standard wrapper object for timestamp-typed
/// columns instead of a plain timestamp. When the wrapped object reports a
/// timestamp via [`DriverObject::as_local_datetime`], it is rewritten to
/// [`Value::DateTime`]; every other value passes through unchanged. This is
/// the default [`extract_value`](crate::MapperPolicy::extract_value) policy's
/// compatibility fallback, kept as a free function so it stays testable
/// without any driver.
///
/// ```rust
/// use rowmap::{normalize_driver_value, Value};
///
/// let v = Value::from(42_i64);
/// assert_eq!(normalize_driver_value(v), Value::Int(42));
/// ```
pub fn normalize_driver_value(value: Value) -> Value {
    match value {
        Value::Other(o) => match o.as_local_datetime() {
            Some(ts) => Value::DateTime(ts),
            None => Value::Other(o),
        },
        v => v,
    }
}
