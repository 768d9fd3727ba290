//! The adapter which turns an error-returning handler into a complete response.

use http::{Request, Response};
use std::fmt;

use crate::error::{Error, HttpError, Result, INTERNAL_SERVER_ERROR};
use crate::errorware::Errorware;
use crate::handler::Handler;
use crate::output::{BufferedResponse, Recorder, ResponseWriter, WriteError};

/// Creates a `Wrap` from a handler function.
///
/// # Examples
///
/// ```
/// # use httperr::output::ResponseWriter;
/// # use http::{Request, StatusCode};
/// let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, _: &Request<()>| {
///     w.write(b"partial output")?;
///     Err(httperr::error::error_text(StatusCode::NOT_FOUND, "Not Found"))
/// });
///
/// let response = wrapped.call(&Request::new(()));
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// assert_eq!(&response.body()[..], b"Not Found");
/// ```
pub fn wrap<B, F>(handler: F) -> Wrap<F, B>
where
    F: Fn(&mut dyn ResponseWriter, &Request<B>) -> Result<()>,
{
    Wrap::new(handler)
}

/// A handler together with its errorware.
///
/// Every invocation buffers the handler's output and emits exactly one response:
/// the buffered output if the request succeeded, or the rendering of the terminal
/// error otherwise.
pub struct Wrap<H, B = ()> {
    handler: H,
    errorware: Vec<Errorware<B>>,
}

impl<H, B> fmt::Debug for Wrap<H, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrap")
            .field("errorware", &self.errorware.len())
            .finish()
    }
}

impl<H, B> Wrap<H, B>
where
    H: Handler<B>,
{
    /// Creates a `Wrap` without any errorware.
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            errorware: vec![],
        }
    }

    /// Appends an errorware to be applied after the ones already registered.
    pub fn errorware<F>(mut self, errorware: F) -> Self
    where
        F: Fn(&Request<B>, Option<Error>) -> Option<Error> + Send + Sync + 'static,
    {
        self.errorware.push(Box::new(errorware));
        self
    }

    /// Handles `request`, writing exactly one response into `w`.
    pub fn serve(&self, w: &mut dyn ResponseWriter, request: &Request<B>) {
        let mut buffer = BufferedResponse::new();
        let result = self.handler.call(&mut buffer, request);

        let mut err = merge(buffer.take_error(), result.err());
        for errorware in &self.errorware {
            err = errorware(request, err);
        }

        match err {
            None => {
                log::trace!("flushing the buffered response");
                buffer.flush(w);
            }
            Some(err) => render_error(&err, w),
        }
    }

    /// Handles `request` and returns the collected response.
    pub fn call(&self, request: &Request<B>) -> Response<Vec<u8>> {
        let mut recorder = Recorder::new();
        self.serve(&mut recorder, request);
        recorder.into_response()
    }
}

fn merge(write_error: Option<WriteError>, handler_error: Option<Error>) -> Option<Error> {
    match (write_error, handler_error) {
        (Some(write_error), Some(handler_error)) => {
            Some(Error::join(vec![Error::from(write_error), handler_error]))
        }
        (Some(write_error), None) => Some(write_error.into()),
        (None, handler_error) => handler_error,
    }
}

fn render_error(err: &Error, w: &mut dyn ResponseWriter) {
    match err.as_http_error() {
        Some(rendered) => {
            log::trace!("rendering the error response: {}", rendered);
            rendered.render(w);
        }
        None => {
            log::trace!("responding with the default error: {}", err);
            INTERNAL_SERVER_ERROR.render(w);
        }
    }
}
