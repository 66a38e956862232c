
//! The per-row output container.
//!
//! A [`Record`] behaves as an order-preserving map with case-insensitive
//! key equality: iteration follows first-insertion order (column ordinal
//! order when produced by the mapper), lookups ignore key casing, and a
//! case-insensitive duplicate insert overwrites the existing value in place
//! (last-write-wins) without moving the entry or changing its key text.

use std::collections::HashMap;
use std::fmt;

use crate::value::Value;

/// An ordered mapping from column key to extracted value.
///
/// Allocated fresh for each mapped row and handed off to the caller; the
/// mapper never mutates or reuses it afterwards.
///
/// ```rust
/// use rowmap::{Record, Value};
///
/// let mut record = Record::with_capacity(2);
/// record.insert("Name".to_owned(), Value::from("Ann"));
/// record.insert("AGE".to_owned(), Value::from(40_i64));
///
/// assert_eq!(record.get("name"), Some(&Value::Text("Ann".to_owned())));
/// assert_eq!(record.get("Age"), Some(&Value::Int(40)));
/// let keys: Vec<&str> = record.keys().collect();
/// assert_eq!(keys, ["Name", "AGE"]);
/// ```
#[derive(Default, Clone)]
pub struct Record {
    /// Entries in first-insertion order.
    entries: Vec<(String, Value)>,
    /// Case-folded key -> slot in `entries`.
    index: HashMap<String, usize>,
}

fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Create an empty record sized for `capacity` entries.
    ///
    /// The mapper uses the row's column count as the hint.
    pub fn with_capacity(capacity: usize) -> Self {
        Record {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a key-value pair.
    ///
    /// If a case-insensitively equal key is already present, the stored
    /// value is replaced and returned; the entry keeps its position and its
    /// originally inserted key text.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        let folded = fold_key(&key);
        match self.index.get(&folded) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(folded, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a value by key, ignoring case.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index
            .get(&fold_key(key))
            .map(|&slot| &self.entries[slot].1)
    }

    /// Whether a case-insensitively equal key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&fold_key(key))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in first-insertion order, with their original casing.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate values in first-insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Records compare entrywise in insertion order, with case-insensitive key
/// equality and exact value equality.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|((ka, va), (kb, vb))| fold_key(ka) == fold_key(kb) && va == vb)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
