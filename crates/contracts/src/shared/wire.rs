//! Wire-level building blocks used by every resource.
//!
//! The backend is a Django REST service: decimals arrive as strings, foreign
//! keys arrive either as bare ids or as nested objects, and list endpoints wrap
//! their rows in `{ "results": [...] }`. The types below accept those shapes
//! explicitly and reject anything else.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend primary key.
pub type EntityId = i64;

// ============================================================================
// Scalars
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Int(v) => v.to_string(),
            RawScalar::Float(v) => v.to_string(),
            RawScalar::Text(s) => s,
        }
    }
}

/// Numeric value kept verbatim as the backend sent it.
///
/// Accepts a JSON number or a numeric string; serialises back as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawScalar::deserialize(deserializer).map(|raw| Decimal(raw.into_text()))
    }
}

/// `deserialize_with` helper for optional fields that may be a string or a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawScalar>::deserialize(deserializer).map(|raw| raw.map(RawScalar::into_text))
}

/// Reference to another entity as the backend chooses to render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefField {
    Id(EntityId),
    Nested {
        id: EntityId,
        #[serde(default)]
        name: Option<String>,
    },
    Text(String),
}

impl RefField {
    pub fn id(&self) -> Option<EntityId> {
        match self {
            RefField::Id(id) => Some(*id),
            RefField::Nested { id, .. } => Some(*id),
            RefField::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            RefField::Id(id) => id.to_string(),
            RefField::Nested { name: Some(name), .. } => name.clone(),
            RefField::Nested { id, name: None } => id.to_string(),
            RefField::Text(s) => s.clone(),
        }
    }
}

// ============================================================================
// Lists
// ============================================================================

/// Envelope returned by every `/…/list/` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: Option<usize>,
}

/// Query parameters for list endpoints; absent fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl ListQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    pub fn sized(page_size: usize) -> Self {
        Self {
            page: None,
            page_size: Some(page_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.page_size.is_none()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Structured error body of a failed request.
///
/// DRF answers either `{"detail": "..."}` or a map of field errors
/// `{"name": ["This field is required."]}`.
pub struct ErrorBody;

impl ErrorBody {
    /// Extract the most useful human message from a raw error body.
    pub fn message_from(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        Self::message_from_value(&value)
    }

    fn message_from_value(value: &serde_json::Value) -> Option<String> {
        use serde_json::Value;

        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => items.iter().find_map(Self::message_from_value),
            Value::Object(map) => {
                for key in ["detail", "message", "error", "non_field_errors"] {
                    if let Some(msg) = map.get(key).and_then(Self::message_from_value) {
                        return Some(msg);
                    }
                }
                map.iter().find_map(|(field, v)| {
                    Self::message_from_value(v).map(|msg| format!("{}: {}", field, msg))
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_accepts_numbers_and_strings() {
        let from_str: Decimal = serde_json::from_value(json!("12000.50")).unwrap();
        let from_int: Decimal = serde_json::from_value(json!(3)).unwrap();
        let from_float: Decimal = serde_json::from_value(json!(2.5)).unwrap();

        assert_eq!(from_str.as_str(), "12000.50");
        assert_eq!(from_int.as_str(), "3");
        assert_eq!(from_float.as_str(), "2.5");
        assert_eq!(from_str.to_f64(), Some(12000.5));
    }

    #[test]
    fn test_decimal_rejects_other_shapes() {
        assert!(serde_json::from_value::<Decimal>(json!({"amount": 1})).is_err());
        assert!(serde_json::from_value::<Decimal>(json!(true)).is_err());
    }

    #[test]
    fn test_ref_field_shapes() {
        let id: RefField = serde_json::from_value(json!(7)).unwrap();
        let nested: RefField = serde_json::from_value(json!({"id": 4, "name": "kg"})).unwrap();
        let text: RefField = serde_json::from_value(json!("litr")).unwrap();

        assert_eq!(id.id(), Some(7));
        assert_eq!(nested.id(), Some(4));
        assert_eq!(nested.label(), "kg");
        assert_eq!(text.id(), None);
        assert_eq!(text.label(), "litr");
    }

    #[test]
    fn test_list_response_without_total_pages() {
        let resp: ListResponse<serde_json::Value> =
            serde_json::from_value(json!({"results": [1, 2]})).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.total_pages, None);
    }

    #[test]
    fn test_list_response_requires_results() {
        let resp = serde_json::from_value::<ListResponse<serde_json::Value>>(json!({"items": []}));
        assert!(resp.is_err());
    }

    #[test]
    fn test_error_body_detail() {
        assert_eq!(
            ErrorBody::message_from(r#"{"detail": "Not found."}"#).as_deref(),
            Some("Not found.")
        );
    }

    #[test]
    fn test_error_body_field_errors() {
        assert_eq!(
            ErrorBody::message_from(r#"{"name": ["This field is required."]}"#).as_deref(),
            Some("name: This field is required.")
        );
    }

    #[test]
    fn test_error_body_not_json() {
        assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ErrorBody::message_from(r#"{"detail": ""}"#), None);
    }
}
