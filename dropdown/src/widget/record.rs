//! SourceRecord trait for host records backing dropdown items.

use serde_json::{Map, Value};

/// A host record the dropdown reads two fields from.
///
/// Field names come from the config, so access is by name. Implementations
/// return `None` for fields that are absent or cannot be read as the
/// requested type; the mapper turns that into a fallback plus a diagnostic.
///
/// # Example
///
/// ```
/// use dropdown::SourceRecord;
///
/// #[derive(Clone)]
/// struct Priority {
///     id: i64,
///     name: String,
/// }
///
/// impl SourceRecord for Priority {
///     fn text(&self, field: &str) -> Option<String> {
///         match field {
///             "name" => Some(self.name.clone()),
///             "id" => Some(self.id.to_string()),
///             _ => None,
///         }
///     }
///
///     fn number(&self, field: &str) -> Option<i64> {
///         match field {
///             "id" => Some(self.id),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait SourceRecord {
    /// Read a field as display text.
    fn text(&self, field: &str) -> Option<String>;

    /// Read a field as an integer value.
    fn number(&self, field: &str) -> Option<i64>;

    /// Whether the record has no fields at all. An empty bound model maps to
    /// the sentinel selection.
    fn is_empty(&self) -> bool {
        false
    }
}

/// Render a JSON scalar as label text.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a JSON scalar as an integer. Floats with a fraction do not qualify.
fn value_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SourceRecord for Map<String, Value> {
    fn text(&self, field: &str) -> Option<String> {
        self.get(field).and_then(value_text)
    }

    fn number(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(value_number)
    }

    fn is_empty(&self) -> bool {
        Map::is_empty(self)
    }
}

/// Only objects have fields; every other JSON value reads as empty.
impl SourceRecord for Value {
    fn text(&self, field: &str) -> Option<String> {
        self.as_object().and_then(|map| map.text(field))
    }

    fn number(&self, field: &str) -> Option<i64> {
        self.as_object().and_then(|map| map.number(field))
    }

    fn is_empty(&self) -> bool {
        self.as_object().is_none_or(|map| map.is_empty())
    }
}
