//! Components for constructing and resolving HTTP errors.
//!
//! # Error Representation
//!
//! Handlers report failures by returning an [`Error`]. An `Error` is either
//!
//! * *renderable*, holding a value which implements [`HttpError`] and therefore knows how
//!   to write itself as an HTTP response,
//! * *opaque*, holding any other `std::error::Error`,
//! * a *context* wrapping exactly one cause, or
//! * a *group* of several causes joined together.
//!
//! When a request fails, the adapter searches this structure for the first renderable
//! error (see [`resolve`]). Opaque errors never reach the client: if nothing renderable
//! is found, the response is a generic `500 Internal Server Error`.
//!
//! [`Error`]: ./struct.Error.html
//! [`HttpError`]: ./trait.HttpError.html
//! [`resolve`]: ./fn.resolve.html
//!
//! # Built-in errors
//!
//! [`ResponseError`] covers the common cases (a status code with a text body) and is
//! created by [`error`], [`error_text`], [`errorf!`] and [`error_json`]. The most common
//! status codes are also available as shared `static` values such as [`NOT_FOUND`].
//!
//! [`ResponseError`]: ./struct.ResponseError.html
//! [`error`]: ./fn.error.html
//! [`error_text`]: ./fn.error_text.html
//! [`errorf!`]: ../macro.errorf.html
//! [`error_json`]: ./fn.error_json.html
//! [`NOT_FOUND`]: ./static.NOT_FOUND.html

mod json;
mod resolve;
mod response;

pub use self::json::{error_json, EncodeError};
pub use self::resolve::resolve;
pub use self::response::{
    error, error_text, ResponseError, BAD_REQUEST, INTERNAL_SERVER_ERROR, METHOD_NOT_ALLOWED,
    NOT_FOUND, SERVICE_UNAVAILABLE, TOO_MANY_REQUESTS, UNAUTHORIZED,
};

// ====

use http::StatusCode;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::output::{ResponseWriter, WriteError};

/// A type alias of `Result<T, E>` with `error::Error` as error type.
pub type Result<T> = std::result::Result<T, Error>;

/// A trait representing error values which render themselves as an HTTP response.
///
/// Any error type may implement this trait to take full control of the response
/// sent to the client when it is the terminal error of a request.
pub trait HttpError: StdError + AsStdError + Send + Sync + 'static {
    /// Returns an HTTP status code associated with this value.
    fn status_code(&self) -> StatusCode;

    /// Writes the response for this error into `w`.
    ///
    /// By default, it writes `status_code()` followed by the `Display` text.
    fn render(&self, w: &mut dyn ResponseWriter) {
        w.write_header(self.status_code());
        let _ = w.write(self.to_string().as_bytes());
    }
}

/// Views an implementor of `HttpError` as a plain `std::error::Error`.
#[doc(hidden)]
pub trait AsStdError {
    fn as_std_error(&self) -> &(dyn StdError + Send + Sync + 'static);
}

impl<E> AsStdError for E
where
    E: StdError + Send + Sync + 'static,
{
    fn as_std_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

// ==== Error ====

/// A type which holds all kinds of errors occurring in handlers.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
}

#[derive(Debug)]
enum Kind {
    Http(Box<dyn HttpError>),
    Opaque(Box<dyn StdError + Send + Sync>),
    Context {
        message: Cow<'static, str>,
        source: Box<Error>,
    },
    Multiple(Vec<Error>),
}

impl<E> From<E> for Error
where
    E: HttpError,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

macro_rules! impl_from_opaque {
    ($($t:ty,)*) => {$(
        impl From<$t> for Error {
            fn from(err: $t) -> Self {
                Self::opaque(err)
            }
        }
    )*};
}

impl_from_opaque! {
    io::Error,
    serde_json::Error,
    http::Error,
    WriteError,
    EncodeError,
}

impl Error {
    /// Creates a renderable `Error` from a value implementing `HttpError`.
    pub fn new(err: impl HttpError) -> Self {
        Self {
            kind: Kind::Http(Box::new(err)),
        }
    }

    /// Creates an opaque `Error`.
    ///
    /// An opaque error is not rendered by itself; only a renderable error reachable
    /// through its `source()` chain can determine the response.
    pub fn opaque<E>(err: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Self {
            kind: Kind::Opaque(err.into()),
        }
    }

    /// Wraps `self` with a message, keeping it as the single cause.
    pub fn context(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: Kind::Context {
                message: message.into(),
                source: Box::new(self),
            },
        }
    }

    /// Joins several errors into a group, keeping their order.
    pub fn join<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Error>,
    {
        Self {
            kind: Kind::Multiple(errors.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the first renderable error reachable from this value.
    ///
    /// This is a shortcut of [`resolve`](./fn.resolve.html).
    pub fn as_http_error(&self) -> Option<&dyn HttpError> {
        resolve(self)
    }

    /// Returns the errors grouped by `join`, or an empty slice for any other value.
    pub fn errors(&self) -> &[Error] {
        match self.kind {
            Kind::Multiple(ref errors) => &errors[..],
            _ => &[],
        }
    }

    /// Attempts to downcast the value held directly by this error.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        match self.kind {
            Kind::Http(ref e) => e.as_std_error().downcast_ref(),
            Kind::Opaque(ref e) => e.downcast_ref(),
            Kind::Context { .. } | Kind::Multiple(..) => None,
        }
    }

    /// Searches the whole error structure for a value of type `T`.
    ///
    /// The traversal order is the same as the one used by `resolve`.
    pub fn find<T: StdError + 'static>(&self) -> Option<&T> {
        match self.kind {
            Kind::Http(ref e) => find_in_chain(e.as_std_error()),
            Kind::Opaque(ref e) => find_in_chain(&**e),
            Kind::Context { ref source, .. } => source.find(),
            Kind::Multiple(ref errors) => errors.iter().find_map(|err| err.find::<T>()),
        }
    }
}

fn find_in_chain<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    let mut link = err;
    loop {
        if let Some(found) = link.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(err) = link.downcast_ref::<Error>() {
            return err.find();
        }
        link = link.source()?;
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Http(ref e) => fmt::Display::fmt(e, f),
            Kind::Opaque(ref e) => fmt::Display::fmt(e, f),
            Kind::Context {
                ref message,
                ref source,
            } => write!(f, "{}: {}", message, source),
            Kind::Multiple(ref errors) => {
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    fmt::Display::fmt(err, f)?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.kind {
            Kind::Http(ref e) => e.source(),
            Kind::Opaque(ref e) => e.source(),
            Kind::Context { ref source, .. } => Some(&**source),
            Kind::Multiple(..) => None,
        }
    }
}

/// An extension trait for attaching context to fallible results.
pub trait ResultExt<T> {
    /// Converts the error into an `Error` and wraps it with `message`.
    fn context(self, message: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|e| e.into().context(message))
    }
}
