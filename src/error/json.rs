use http::StatusCode;
use serde::Serialize;
use std::fmt;

use super::{Error, ResponseError};

/// The error returned by `error_json` when the payload cannot be encoded.
///
/// This type intentionally does not implement `HttpError`: a payload that fails to
/// encode always ends up as a generic `500 Internal Server Error`, so a partially
/// encoded document can never be sent to the client. The original value and the
/// encoder error are kept for errorware.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode the error payload as JSON: {error} (value: {value:?})")]
pub struct EncodeError {
    value: Box<dyn fmt::Debug + Send + Sync>,
    #[source]
    error: serde_json::Error,
}

impl EncodeError {
    /// Returns the value which failed to encode.
    pub fn value(&self) -> &(dyn fmt::Debug + Send + Sync) {
        &*self.value
    }

    /// Returns the error reported by the JSON encoder.
    pub fn json_error(&self) -> &serde_json::Error {
        &self.error
    }
}

/// Creates an error with the status code `status` whose body is `value` encoded as JSON.
///
/// The response carries `Content-Type: application/json`. If `value` cannot be encoded,
/// the returned error is an opaque `EncodeError` instead, and the client receives a
/// generic `500 Internal Server Error`.
pub fn error_json<T>(status: StatusCode, value: T) -> Error
where
    T: Serialize + fmt::Debug + Send + Sync + 'static,
{
    match serde_json::to_string(&value) {
        Ok(text) => ResponseError::new(status, text)
            .with_content_type(mime::APPLICATION_JSON)
            .into(),
        Err(error) => EncodeError {
            value: Box::new(value),
            error,
        }
        .into(),
    }
}
