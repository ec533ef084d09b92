//! Response envelope of the feedback API
//!
//! Every endpoint answers with `{ "msg": ..., "data": ... }`. `data` is
//! endpoint specific and kept as raw JSON so that one malformed entry never
//! fails the whole response.

use crate::domain::a001_category::aggregate::lenient_id;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default, deserialize_with = "lenient_message")]
    pub msg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiEnvelope {
    pub fn with_message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            data: None,
        }
    }

    pub fn with_data(data: Value) -> Self {
        Self {
            msg: String::new(),
            data: Some(data),
        }
    }

    /// Server message, empty when absent
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Entries of a list response; `None` when `data` is missing or not an array
    pub fn entries(&self) -> Option<&[Value]> {
        self.data.as_ref()?.as_array().map(Vec::as_slice)
    }

    /// Id assigned by the server to a newly created record
    pub fn assigned_id(&self) -> Option<i64> {
        self.data.as_ref()?.get("category_id").and_then(lenient_id)
    }
}

/// `msg` that is null or not a string reads as empty
fn lenient_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_list_response() {
        let env: ApiEnvelope = serde_json::from_value(json!({
            "msg": "ok",
            "data": [{ "category_id": 1 }, { "category_id": 2 }]
        }))
        .unwrap();
        assert_eq!(env.message(), "ok");
        assert_eq!(env.entries().map(<[Value]>::len), Some(2));
        assert_eq!(env.assigned_id(), None);
    }

    #[test]
    fn test_decode_without_fields() {
        let env: ApiEnvelope = serde_json::from_value(json!({ "msg": null })).unwrap();
        assert_eq!(env.message(), "");
        assert!(env.entries().is_none());
    }

    #[test]
    fn test_wrong_typed_message_reads_as_empty() {
        let env: ApiEnvelope = serde_json::from_value(json!({
            "msg": 200,
            "data": { "category_id": 5 }
        }))
        .unwrap();
        assert_eq!(env.message(), "");
        assert_eq!(env.assigned_id(), Some(5));
    }

    #[test]
    fn test_assigned_id() {
        let env = ApiEnvelope::with_data(json!({ "category_id": 41 }));
        assert_eq!(env.assigned_id(), Some(41));
        assert!(env.entries().is_none());

        let env = ApiEnvelope::with_data(json!({ "category_id": "x" }));
        assert_eq!(env.assigned_id(), None);
    }
}
