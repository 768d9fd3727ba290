//! Hooks applied to the terminal error of every wrapped request.
//!
//! An errorware receives the request and the error produced so far (`None` on
//! success) and returns the error to continue with. It may pass the error through,
//! replace it, wrap it, suppress it by returning `None`, or introduce a new one.
//! Errorware registered on a [`Wrap`] runs in registration order, and each stage
//! observes exactly what the previous one returned.
//!
//! [`Wrap`]: ../wrap/struct.Wrap.html

use http::{Request, StatusCode};

use crate::error::{error_text, Error};
use crate::output::WriteError;

/// A boxed errorware, as stored by `Wrap`.
pub type Errorware<B> = Box<dyn Fn(&Request<B>, Option<Error>) -> Option<Error> + Send + Sync>;

/// Logs the terminal error of a request and passes it through unchanged.
///
/// Errors which resolve to a renderable error are logged at the `debug` level,
/// opaque ones at the `error` level.
pub fn log_errors<B>(request: &Request<B>, err: Option<Error>) -> Option<Error> {
    if let Some(ref err) = err {
        match err.as_http_error() {
            Some(rendered) => log::debug!(
                "{} {}: responding {}: {}",
                request.method(),
                request.uri(),
                rendered.status_code(),
                err
            ),
            None => log::error!(
                "{} {}: unhandled error: {}",
                request.method(),
                request.uri(),
                err
            ),
        }
    }
    err
}

/// Makes response writer misuse visible to the client.
///
/// If the error contains a `WriteError` and nothing renderable, it is replaced with a
/// `500 Internal Server Error` whose text describes the violation. Any other error is
/// passed through.
pub fn render_write_errors<B>(_: &Request<B>, err: Option<Error>) -> Option<Error> {
    let err = err?;
    if err.as_http_error().is_some() {
        return Some(err);
    }
    match err.find::<WriteError>().map(ToString::to_string) {
        Some(text) => Some(error_text(StatusCode::INTERNAL_SERVER_ERROR, text)),
        None => Some(err),
    }
}
