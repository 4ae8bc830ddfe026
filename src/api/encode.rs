use serde::Serialize;

/// Serializes a request payload into the JSON body sent on the wire.
///
/// Returns `None` when the payload cannot be serialized; the dispatcher maps
/// that sentinel to errcode -10001 without touching the network.
pub fn encode_send_payload<T: Serialize>(payload: &T) -> Option<String> {
    serde_json::to_string(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encodes_json_object() {
        let body = encode_send_payload(&json!({"tag": {"name": "vip"}})).unwrap();
        assert_eq!(body, r#"{"tag":{"name":"vip"}}"#);
    }

    #[test]
    fn test_unserializable_payload_yields_none() {
        struct Unserializable;

        impl Serialize for Unserializable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("refused"))
            }
        }

        assert!(encode_send_payload(&Unserializable).is_none());
    }
}
