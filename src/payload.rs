//! Payload variants and their byte-level serialization.
//!
//! A [`Payload`] is what goes into `encrypt` and what comes back out of
//! `decrypt`: UTF-8 text, raw bytes, or a structured JSON value. On the way
//! in, each variant has a defined byte serialization. On the way out, the
//! decrypted bytes are reinterpreted best-effort: JSON first, then UTF-8
//! text, then raw bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Data accepted by `encrypt` and produced by `decrypt`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// UTF-8 text, serialized as its raw bytes.
    Text(String),
    /// Raw bytes, passed through unchanged.
    Bytes(Vec<u8>),
    /// A structured value, serialized as compact JSON text.
    Value(Value),
}

impl Payload {
    /// Build a payload from any serializable value.
    ///
    /// # Errors
    /// - Returns [`Error::UnsupportedInput`] if the value cannot be
    ///   represented as JSON (e.g. a map with non-string keys)
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::UnsupportedInput(e.to_string()))?;
        Ok(Payload::Value(value))
    }

    /// Serialize the payload to the bytes that get sealed.
    ///
    /// # Errors
    /// - Returns [`Error::UnsupportedInput`] for `Value::Null`, the
    ///   null-like sentinel with no defined serialization
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Payload::Text(text) => Ok(text.as_bytes().to_vec()),
            Payload::Bytes(bytes) => Ok(bytes.clone()),
            Payload::Value(Value::Null) => Err(Error::UnsupportedInput(
                "null has no defined serialization".to_string(),
            )),
            Payload::Value(value) => serde_json::to_vec(value)
                .map_err(|e| Error::UnsupportedInput(e.to_string())),
        }
    }

    /// Reinterpret decrypted bytes as a payload, best-effort.
    ///
    /// Tries structured deserialization first, then UTF-8 text, then falls
    /// back to raw bytes. The original type is not recorded in the blob, so
    /// text that happens to be valid JSON (e.g. `"42"`) comes back as a
    /// [`Payload::Value`].
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        if let Ok(value) = serde_json::from_slice::<Value>(&bytes) {
            return Payload::Value(value);
        }
        match String::from_utf8(bytes) {
            Ok(text) => Payload::Text(text),
            Err(err) => Payload::Bytes(err.into_bytes()),
        }
    }

    /// The text content, if this is a text payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The raw byte content, if this is a bytes payload.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The structured value, if this is a structured payload.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Payload::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Deserialize a structured payload into a concrete type.
    ///
    /// Text payloads deserialize into `String`-compatible types; byte
    /// payloads are not deserializable.
    pub fn deserialize<T: DeserializeOwned>(self) -> std::result::Result<T, serde_json::Error> {
        match self {
            Payload::Value(value) => serde_json::from_value(value),
            Payload::Text(text) => serde_json::from_value(Value::String(text)),
            Payload::Bytes(_) => serde_json::from_value(Value::Null),
        }
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_to_bytes() {
        let payload = Payload::from("Hello World");
        assert_eq!(payload.to_bytes().unwrap(), b"Hello World");
    }

    #[test]
    fn test_bytes_passthrough() {
        let raw = vec![0xFF, 0xFE, 0x00, 0x01];
        let payload = Payload::from(raw.clone());
        assert_eq!(payload.to_bytes().unwrap(), raw);
    }

    #[test]
    fn test_value_to_compact_json() {
        let payload = Payload::Value(json!({"message": "Hello", "count": 42}));
        let bytes = payload.to_bytes().unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&bytes).unwrap(),
            json!({"message": "Hello", "count": 42})
        );
    }

    #[test]
    fn test_null_rejected() {
        let result = Payload::Value(Value::Null).to_bytes();
        assert!(matches!(result, Err(Error::UnsupportedInput(_))));
    }

    #[test]
    fn test_from_bytes_prefers_json() {
        let payload = Payload::from_bytes(br#"{"a":1}"#.to_vec());
        assert_eq!(payload, Payload::Value(json!({"a": 1})));
    }

    #[test]
    fn test_from_bytes_plain_text() {
        let payload = Payload::from_bytes(b"Hello World".to_vec());
        assert_eq!(payload, Payload::Text("Hello World".to_string()));
    }

    #[test]
    fn test_from_bytes_non_utf8() {
        let raw = vec![0xC0, 0xFF, 0x00];
        let payload = Payload::from_bytes(raw.clone());
        assert_eq!(payload, Payload::Bytes(raw));
    }

    #[test]
    fn test_from_bytes_numeric_text_is_value() {
        // Best-effort reconstruction: "42" is valid JSON
        let payload = Payload::from_bytes(b"42".to_vec());
        assert_eq!(payload, Payload::Value(json!(42)));
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(Serialize)]
        struct Message {
            text: String,
        }

        let payload = Payload::from_serialize(&Message {
            text: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(payload.as_value(), Some(&json!({"text": "hi"})));
    }

    #[test]
    fn test_deserialize_value() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Message {
            text: String,
        }

        let payload = Payload::Value(json!({"text": "hi"}));
        let message: Message = payload.deserialize().unwrap();
        assert_eq!(
            message,
            Message {
                text: "hi".to_string()
            }
        );
    }
}
