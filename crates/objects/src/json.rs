//! Typed JSON encode/decode helpers built on `serde_json`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CodecError;

/// Encode a value as compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    let json = serde_json::to_string(value)?;
    log::trace!("encoded {} bytes of JSON", json.len());
    Ok(json)
}

/// Decode JSON into a typed value.
///
/// The result is a real `T`, so it carries `T`'s methods as well as its data.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CodecError> {
    serde_json::from_str(json).map_err(|err| {
        log::debug!("failed to decode {} bytes of JSON: {err}", json.len());
        CodecError::from(err)
    })
}

/// Decode a JSON object onto a copy of `prototype`.
///
/// Every top-level key of the decoded object replaces the prototype's field of
/// the same name. Fields the JSON leaves out keep the prototype's values.
///
/// ```
/// use objects::{Rectangle, from_json_with};
///
/// let base = Rectangle::new(1.0, 2.0);
/// let r = from_json_with(&base, r#"{"height":5}"#).unwrap();
/// assert_eq!(r, Rectangle::new(1.0, 5.0));
/// ```
pub fn from_json_with<T>(prototype: &T, json: &str) -> Result<T, CodecError>
where
    T: Serialize + DeserializeOwned,
{
    let mut fields = match serde_json::to_value(prototype)? {
        Value::Object(map) => map,
        other => {
            return Err(CodecError::NotAnObject(format!(
                "{} prototype",
                json_type(&other)
            )));
        }
    };

    let overrides = match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => map,
        other => return Err(CodecError::NotAnObject(json_type(&other).to_string())),
    };

    log::trace!("assigning {} fields onto prototype", overrides.len());
    for (key, value) in overrides {
        fields.insert(key, value);
    }

    Ok(serde_json::from_value(Value::Object(fields))?)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
