use serde::Serialize;
use serde::ser::Error as _;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Flat JSON body sent to the Porkbun API.
///
/// Every body starts out holding the credential pair, operation specific
/// fields are added next to them at the top level.
pub(crate) struct Payload {
    payload: JsonMap<String, JsonValue>,
}

impl Payload {
    /// Creates a new payload, with the given authorization details.
    pub(crate) fn new(apikey: &str, secretapikey: &str) -> Self {
        let mut payload = JsonMap::new();
        payload.insert("secretapikey".to_string(), secretapikey.into());
        payload.insert("apikey".to_string(), apikey.into());
        Self { payload }
    }

    /// Merges the fields of `value` into the payload as sibling keys.
    ///
    /// # Errors
    /// - if `value` fails to serialize, or doesn't serialize to a JSON object
    pub(crate) fn merge<T: Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(value)? {
            JsonValue::Object(fields) => {
                self.payload.extend(fields);
                Ok(self)
            }
            other => Err(serde_json::Error::custom(format!(
                "expected the payload fields to be a JSON object, got {other}"
            ))),
        }
    }
}

impl From<Payload> for JsonValue {
    fn from(value: Payload) -> Self {
        JsonValue::Object(value.payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::record::NewDnsRecord;

    #[test]
    fn carries_credentials() {
        let payload = Payload::new("pk1_abc", "sk1_def");

        assert_eq!(
            JsonValue::from(payload),
            json!({ "apikey": "pk1_abc", "secretapikey": "sk1_def" })
        );
    }

    #[test]
    fn merges_record_fields_flat() {
        let record = NewDnsRecord {
            name: "www".to_string(),
            type_: "A".to_string(),
            content: "1.1.1.1".to_string(),
            ttl: "600".to_string(),
            prio: "0".to_string(),
        };

        let payload = Payload::new("pk1_abc", "sk1_def").merge(&record).unwrap();

        assert_eq!(
            JsonValue::from(payload),
            json!({
                "apikey": "pk1_abc",
                "secretapikey": "sk1_def",
                "name": "www",
                "type": "A",
                "content": "1.1.1.1",
                "ttl": "600",
                "prio": "0",
            })
        );
    }

    #[test]
    fn rejects_non_object_fields() {
        let err = Payload::new("pk1_abc", "sk1_def")
            .merge(&["not", "an", "object"])
            .err()
            .unwrap();

        assert!(err.to_string().contains("JSON object"));
    }
}
