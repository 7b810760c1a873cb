//! Record type: an ordered field-name → value mapping.
//!
//! Records are deliberately not a fixed struct. Strategies with homogeneous
//! output (tables, custom configs) produce identical key sets per batch,
//! while the generic fallback produces per-record key variability; an
//! ordered mapping preserves both without contorting the type system.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single field value.
///
/// Values stay close to the source markup: text stays text even when it
/// looks numeric or price-like, so field types are consistent across the
/// records of a batch. Multi-valued fields (image lists) use `List`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain text content.
    Text(String),

    /// A numeric measurement produced by the engine itself (never coerced
    /// from page text).
    Number(f64),

    /// Multi-valued field, e.g. every image URL in an article.
    List(Vec<String>),
}

impl FieldValue {
    /// The text content, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The list items, if this is a `List` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One extracted record: ordered field/value pairs with unique names.
///
/// Insertion order is the order fields were resolved in, which serializers
/// and CSV writers can rely on. Collisions resolve first-match-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
    partial: bool,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Returns `false` (and keeps the existing value) when
    /// the name is already present: first match wins.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> bool {
        let name = name.into();
        if self.fields.iter().any(|(existing, _)| *existing == name) {
            return false;
        }
        self.fields.push((name, value.into()));
        true
    }

    /// Insert a field only when the value is present. Absent fields are
    /// omitted entirely, never stored as empty strings.
    pub fn push_opt(&mut self, name: &str, value: Option<impl Into<FieldValue>>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Mutable iteration, used by the normalizer.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut FieldValue)> {
        self.fields.iter_mut().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Mark this record as truncated (e.g. a table row shorter than its
    /// header). Partial records are still emitted.
    pub fn mark_partial(&mut self) {
        self.partial = true;
    }

    /// Whether this record was truncated during extraction.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.partial
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
