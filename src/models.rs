//! Frontend Models
//!
//! Documents stored in the remote `pantry` collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document written when the user adds an ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIngredient {
    pub name: String,
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl NewIngredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ingredient document as delivered in a snapshot.
///
/// Only `name` is decoded. `createdAt` drives the query order on the store side
/// and may be missing, null or fractional, none of which should drop a snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

/// Full ordered result set of the subscribed query
pub type Snapshot = Vec<Ingredient>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_ingredient_wire_shape() {
        let doc = NewIngredient {
            name: "Garlic".to_string(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Garlic", "createdAt": 1_700_000_000_123i64 }));
    }

    #[test]
    fn test_snapshot_doc_without_timestamp() {
        let doc: Ingredient = serde_json::from_str(r#"{"name":"Onion"}"#).unwrap();
        assert_eq!(doc.name, "Onion");

        let doc: Ingredient = serde_json::from_str(r#"{"name":"Leek","createdAt":null}"#).unwrap();
        assert_eq!(doc.name, "Leek");
    }

    #[test]
    fn test_snapshot_with_fractional_timestamp() {
        let raw = r#"[{"name":"Garlic","createdAt":1700000000123.456},{"name":"Onion","createdAt":1700000000000}]"#;
        let snapshot: Snapshot = serde_json::from_str(raw).unwrap();
        let names: Vec<_> = snapshot.iter().map(|doc| doc.name.as_str()).collect();
        assert_eq!(names, vec!["Garlic", "Onion"]);
    }

    #[test]
    fn test_snapshot_doc_without_name_is_rejected() {
        let parsed = serde_json::from_str::<Ingredient>(r#"{"createdAt":1}"#);
        assert!(parsed.is_err());
    }
}
