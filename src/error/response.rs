use http::header::{self, HeaderValue};
use http::StatusCode;
use mime::Mime;
use std::borrow::Cow;
use std::fmt;

use super::{Error, HttpError};
use crate::output::ResponseWriter;

/// An instance of `HttpError` which holds an HTTP status code and the literal response body.
#[derive(Debug, Clone)]
pub struct ResponseError {
    status: StatusCode,
    text: Cow<'static, str>,
    content_type: Option<Mime>,
}

impl ResponseError {
    /// Creates a `ResponseError` from the provided components.
    pub fn new(status: StatusCode, text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            text: text.into(),
            content_type: None,
        }
    }

    const fn from_static(status: StatusCode, text: &'static str) -> Self {
        Self {
            status,
            text: Cow::Borrowed(text),
            content_type: None,
        }
    }

    /// Sets the value of `Content-Type` sent along with the body.
    pub fn with_content_type(self, content_type: Mime) -> Self {
        Self {
            content_type: Some(content_type),
            ..self
        }
    }

    #[allow(missing_docs)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[allow(missing_docs)]
    pub fn text(&self) -> &str {
        &*self.text
    }

    #[allow(missing_docs)]
    pub fn content_type(&self) -> Option<&Mime> {
        self.content_type.as_ref()
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.text)
    }
}

impl std::error::Error for ResponseError {}

impl HttpError for ResponseError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn render(&self, w: &mut dyn ResponseWriter) {
        if let Some(ref content_type) = self.content_type {
            match HeaderValue::from_str(content_type.as_ref()) {
                Ok(value) => {
                    w.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                Err(..) => log::warn!("invalid Content-Type in error response: {}", content_type),
            }
        }
        w.write_header(self.status);
        let _ = w.write(self.text.as_bytes());
    }
}

impl HttpError for &'static ResponseError {
    fn status_code(&self) -> StatusCode {
        (**self).status_code()
    }

    fn render(&self, w: &mut dyn ResponseWriter) {
        (**self).render(w)
    }
}

/// Creates an error with the status code `status` and its canonical reason as text.
pub fn error(status: StatusCode) -> Error {
    ResponseError::new(status, status.canonical_reason().unwrap_or("")).into()
}

/// Creates an error with the status code `status` and the text `text`.
pub fn error_text(status: StatusCode, text: impl Into<Cow<'static, str>>) -> Error {
    ResponseError::new(status, text).into()
}

macro_rules! define_errors {
    ($(
        $(#[$m:meta])*
        $name:ident => ($STATUS:ident, $text:expr),
    )*) => {$(
        $(#[$m])*
        pub static $name: ResponseError = ResponseError::from_static(StatusCode::$STATUS, $text);
    )*};
}

define_errors! {
    /// A shared `400 Bad Request` error.
    BAD_REQUEST => (BAD_REQUEST, "Bad Request"),

    /// A shared `401 Unauthorized` error.
    UNAUTHORIZED => (UNAUTHORIZED, "Unauthorized"),

    /// A shared `405 Method Not Allowed` error.
    METHOD_NOT_ALLOWED => (METHOD_NOT_ALLOWED, "Method Not Allowed"),

    /// A shared `404 Not Found` error.
    NOT_FOUND => (NOT_FOUND, "Not Found"),

    /// A shared `429 Too Many Requests` error.
    TOO_MANY_REQUESTS => (TOO_MANY_REQUESTS, "Too Many Requests"),

    /// A shared `500 Internal Server Error` error.
    INTERNAL_SERVER_ERROR => (INTERNAL_SERVER_ERROR, "Internal Server Error"),

    /// A shared `503 Service Unavailable` error.
    SERVICE_UNAVAILABLE => (SERVICE_UNAVAILABLE, "Service Unavailable"),
}
