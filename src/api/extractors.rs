//! Request body extraction.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::application::validation::RawInput;
use crate::error::AppError;

/// A JSON object body kept as raw field values.
///
/// Field shapes are checked by the validation layer rather than by serde, so
/// a wrong type becomes a field error instead of a rejected body. An empty
/// body is read as an empty object. Anything that is not a JSON object is a
/// 400.
#[derive(Debug)]
pub struct RawJson(pub RawInput);

impl<S: Send + Sync> FromRequest<S> for RawJson {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_body(&bytes).map(RawJson)
    }
}

fn parse_body(bytes: &[u8]) -> Result<RawInput, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawInput::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::bad_request("The request body must be a JSON object.")),
        Err(e) => Err(AppError::bad_request(format!("Malformed JSON body: {e}"))),
    }
}
