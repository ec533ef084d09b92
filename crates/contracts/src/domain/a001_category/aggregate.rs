use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Defaults
// ============================================================================

/// Sequence of a record that has no display position yet
pub const UNSET_SEQ: i64 = -1;

/// Id of a record the server has not confirmed yet
pub const UNSET_ID: i64 = -1;

/// Color of a freshly created record
pub const DEFAULT_COLOR: &str = "#000000";

// ============================================================================
// Aggregate Root
// ============================================================================

/// Feedback category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub seq: i64,
    pub id: i64,

    #[serde(rename = "category_title")]
    pub title: String,

    #[serde(rename = "category_color")]
    pub color: String,
}

impl Default for CategoryRecord {
    fn default() -> Self {
        Self {
            seq: UNSET_SEQ,
            id: UNSET_ID,
            title: String::new(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl CategoryRecord {
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            ..Self::default()
        }
    }

    /// Whether the server has assigned an id to this record
    pub fn is_persisted(&self) -> bool {
        self.id != UNSET_ID
    }

    /// Id in the string form used by the modify/delete endpoints
    pub fn id_string(&self) -> String {
        self.id.as_string()
    }

    /// Serialized form sent to the add/modify endpoints.
    ///
    /// Keys: `seq`, `id`, `category_title`, `category_color`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("seq".to_string(), Value::from(self.seq));
        map.insert("id".to_string(), Value::from(self.id));
        map.insert("category_title".to_string(), Value::from(self.title.clone()));
        map.insert("category_color".to_string(), Value::from(self.color.clone()));
        map
    }

    /// Build a record from one entry of the category list response.
    ///
    /// Absent or wrong-typed fields fall back to defaults: `category_id` to
    /// [`UNSET_ID`], title and color to an empty string. `seq` is never sent
    /// by the server and stays unset.
    pub fn from_server_entry(entry: &Value) -> Self {
        Self {
            seq: UNSET_SEQ,
            id: entry
                .get("category_id")
                .and_then(lenient_id)
                .unwrap_or(UNSET_ID),
            title: entry
                .get("category_title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            color: entry
                .get("category_color")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// Numeric id, or its decimal string form
pub(crate) fn lenient_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => <i64 as AggregateId>::from_string(s).ok(),
        _ => None,
    }
}

impl AggregateRoot for CategoryRecord {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_record_is_unpersisted() {
        let record = CategoryRecord::default();
        assert_eq!(record.seq, -1);
        assert_eq!(record.id, -1);
        assert_eq!(record.title, "");
        assert_eq!(record.color, "#000000");
        assert!(!record.is_persisted());
    }

    #[test]
    fn test_to_map_keys() {
        let record = CategoryRecord {
            seq: 3,
            id: 12,
            title: "Bug".to_string(),
            color: "#FF0000".to_string(),
        };
        let map = record.to_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["seq"], json!(3));
        assert_eq!(map["id"], json!(12));
        assert_eq!(map["category_title"], json!("Bug"));
        assert_eq!(map["category_color"], json!("#FF0000"));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let record = CategoryRecord::new("UX", "#00FF00");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(Value::Object(record.to_map()), value);
    }

    #[test]
    fn test_from_server_entry() {
        let entry = json!({
            "category_id": 1,
            "category_title": "Bug",
            "category_color": "#FF0000"
        });
        let record = CategoryRecord::from_server_entry(&entry);
        assert_eq!(
            record,
            CategoryRecord {
                seq: -1,
                id: 1,
                title: "Bug".to_string(),
                color: "#FF0000".to_string(),
            }
        );
        assert!(record.is_persisted());
    }

    #[test]
    fn test_from_server_entry_degrades_to_defaults() {
        let missing = CategoryRecord::from_server_entry(&json!({}));
        assert_eq!(missing.id, UNSET_ID);
        assert_eq!(missing.title, "");
        // blank, not DEFAULT_COLOR: the server omits the color of uncolored categories
        assert_eq!(missing.color, "");

        let wrong_types = CategoryRecord::from_server_entry(&json!({
            "category_id": [1],
            "category_title": 5,
            "category_color": null
        }));
        assert_eq!(wrong_types.id, UNSET_ID);
        assert_eq!(wrong_types.title, "");
        assert_eq!(wrong_types.color, "");

        let not_an_object = CategoryRecord::from_server_entry(&json!("oops"));
        assert_eq!(not_an_object.id, UNSET_ID);
    }

    #[test]
    fn test_from_server_entry_accepts_string_id() {
        let record = CategoryRecord::from_server_entry(&json!({ "category_id": "7" }));
        assert_eq!(record.id, 7);
        assert_eq!(record.id_string(), "7");
    }

    #[test]
    fn test_aggregate_names() {
        assert_eq!(CategoryRecord::full_name(), "a001_category");
    }
}
