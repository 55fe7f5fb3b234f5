use crate::error::Error;
use crate::types::JsonStatusResponse;
use logicboxes_common::{JsonBool, Validator, WireForm, WireQuery, encode};
use serde_json::Value;
use std::sync::LazyLock;

/// Process-wide rule registry, populated once. Custom rules are registered
/// here by name and referenced from descriptor tables via `Rule::Custom`.
static VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let mut validator = Validator::new();
    validator.register("password", crate::customer::password_composition);
    validator.register("password-strict", crate::customer::password_strict);
    validator
});

/// Validates `form` against the process-wide registry and encodes it into
/// wire query parameters. This is what every criteria/form endpoint sends.
pub fn wire_query<T: WireForm>(form: &T) -> Result<WireQuery, Error> {
    Ok(encode(form, &VALIDATOR)?)
}

pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if !status.is_success() {
        let envelope: JsonStatusResponse = serde_json::from_slice(&bytes)
            .map_err(|e| Error::Common(format!("status envelope parse error: {}", e)))?;
        return Err(Error::Api(envelope.message.to_lowercase()));
    }

    serde_json::from_slice(&bytes).map_err(|e| Error::Common(format!("JSON parse error: {}", e)))
}

/// Some endpoints answer with a bare scalar (an order id as a number, a
/// customer id as a string). Normalize to text.
pub(crate) fn scalar_to_string(value: Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::Common(format!("unexpected scalar response: {}", other))),
    }
}

/// Mutation endpoints acknowledge with `true` — sometimes quoted, sometimes
/// not.
pub(crate) fn scalar_to_bool(value: Value) -> Result<bool, Error> {
    match value {
        Value::Bool(b) => Ok(b),
        Value::String(s) => Ok(JsonBool::from_wire(&s)?.as_bool()),
        other => Err(Error::Common(format!("unexpected scalar response: {}", other))),
    }
}
