use anyhow::{Result, anyhow};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errcode reported when a request payload could not be encoded locally.
pub const ENCODING_FAILED: i64 = -10001;

/// Normalized response from the remote API.
///
/// Always a JSON object. An `errcode` of 0 means success, and the
/// endpoint-specific payload sits under endpoint-defined keys (`tags`,
/// `data`, `user_info_list`, ...); callers must know, per operation, which
/// key carries the payload. On failure the object carries the remote
/// `errcode` and usually an `errmsg`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    fields: Map<String, Value>,
}

impl ApiResult {
    /// Result reported when the request payload could not be encoded.
    /// No network call was made.
    pub(crate) fn encoding_failed() -> Self {
        let mut fields = Map::new();
        fields.insert("errcode".to_string(), Value::from(ENCODING_FAILED));
        fields.insert(
            "errmsg".to_string(),
            Value::from("request payload could not be encoded"),
        );
        Self { fields }
    }

    /// Remote status code; 0 means success. An absent code counts as
    /// success, since only an explicit non-zero code signals a remote error.
    pub fn errcode(&self) -> i64 {
        self.fields
            .get("errcode")
            .and_then(Value::as_i64)
            .unwrap_or(0)
    }

    pub fn errmsg(&self) -> Option<&str> {
        self.fields.get("errmsg").and_then(Value::as_str)
    }

    pub fn is_success(&self) -> bool {
        self.errcode() == 0
    }

    /// Raw payload field exactly as the remote service returned it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Deserializes the payload under `key` into a typed record.
    pub fn decode<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| anyhow!("response has no '{}' field", key))?;
        serde_json::from_value(value.clone())
            .map_err(|e| anyhow!("failed to decode '{}' field: {}", key, e))
    }

    /// Deserializes the whole response object into a typed record. Used for
    /// paginated listings whose fields live at the top level.
    pub fn decode_all<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.fields.clone()))
            .map_err(|e| anyhow!("failed to decode response: {}", e))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

/// Maps a raw response body to an [`ApiResult`].
///
/// If the endpoint's success key is present but the remote service returned
/// no `errcode`, an `errcode` of 0 is synthesized. Everything else passes
/// through verbatim, remote error fields included. Pass-through endpoints
/// supply no success key and are never touched.
pub(crate) fn normalize(value: Value, success_key: Option<&str>) -> Result<ApiResult> {
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => return Err(anyhow!("response body is not a JSON object: {}", other)),
    };

    if let Some(key) = success_key {
        if fields.contains_key(key) && !fields.contains_key("errcode") {
            fields.insert("errcode".to_string(), Value::from(0));
        }
    }

    Ok(ApiResult { fields })
}
