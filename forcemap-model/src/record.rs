//! Remote result rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the identity property on remote results and write payloads.
pub const ID_FIELD: &str = "Id";

/// A raw field-name → value map, as sent to the store on create/update.
pub type Attributes = serde_json::Map<String, Value>;

/// One row as returned by the remote store: a flat map of field name to
/// value, with the identity under [`ID_FIELD`].
///
/// The serde representation is transparent, so a raw JSON row from the
/// store deserializes directly into a `Record`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Attributes,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// A record carrying only an identity.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut record = Self::new();
        record.insert(ID_FIELD, Value::String(id.into()));
        record
    }

    /// Sets a field value, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Reads a field value by remote name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// True when the record carries the named field, even if its value is
    /// `null`.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The identity value, when present and a string.
    pub fn id(&self) -> Option<&str> {
        self.fields.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Number of fields on the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates the record's fields.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.fields.iter()
    }
}

impl From<Attributes> for Record {
    fn from(fields: Attributes) -> Self {
        Self { fields }
    }
}

impl From<Record> for Attributes {
    fn from(record: Record) -> Self {
        record.fields
    }
}
