//! Value enum for dynamic cell values

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use super::ActionCell;
use super::LinkCell;

/// A dynamic value that can sit in a table cell.
///
/// The variant alone decides how a cell renders, filters, and exports;
/// column metadata never does.
///
/// # Example
///
/// ```
/// use datagrid::model::Value;
///
/// let name = Value::from("Contoso");
/// let count = Value::from(42i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Link descriptor.
    Link(LinkCell),
    /// Action descriptor (button, optional linked checkbox).
    Action(ActionCell),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Remaining plain structured value.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::DateTime(_) => "datetime",
            Value::Link(_) => "link",
            Value::Action(_) => "action",
            Value::Array(_) => "array",
            Value::Json(_) => "json",
        }
    }

    /// JSON view of this value, the inverse of the `From<serde_json::Value>`
    /// classification.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Float(n) => serde_json::Value::from(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
            Value::Link(link) => tagged_object(link, "link"),
            Value::Action(action) => tagged_object(action, "action"),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Json(v) => v.clone(),
        }
    }
}

fn tagged_object<T: Serialize>(value: &T, kind: &str) -> serde_json::Value {
    let mut json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(map) = &mut json {
        map.insert("kind".into(), serde_json::Value::String(kind.into()));
    }
    json
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<LinkCell> for Value {
    fn from(v: LinkCell) -> Self {
        Value::Link(v)
    }
}

impl From<ActionCell> for Value {
    fn from(v: ActionCell) -> Self {
        Value::Action(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// Classify a JSON value by shape.
///
/// Maps tagged `"kind": "link"` or `"kind": "action"` become descriptors
/// (falling back to [`Value::Json`] when the required fields are missing),
/// any other map stays [`Value::Json`], scalars and arrays become their
/// native variants.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => classify_object(map),
        }
    }
}

fn classify_object(map: serde_json::Map<String, serde_json::Value>) -> Value {
    let kind = map.get("kind").and_then(|k| k.as_str());
    let object = serde_json::Value::Object(map.clone());

    match kind {
        Some("link") => serde_json::from_value::<LinkCell>(object.clone())
            .map(Value::Link)
            .unwrap_or(Value::Json(object)),
        Some("action") => serde_json::from_value::<ActionCell>(object.clone())
            .map(Value::Action)
            .unwrap_or(Value::Json(object)),
        _ => Value::Json(object),
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Value::from(raw))
    }
}
