//! Error-returning HTTP handlers with all-or-nothing responses.
//!
//! A handler wrapped by [`wrap`] writes its response into a buffer and returns a
//! [`Result`]. When it returns `Ok(())`, the buffered response is sent as is. When
//! it fails, the buffered output is thrown away and the error decides the response:
//!
//! * if the error, or any error it wraps or groups, implements [`HttpError`], that
//!   error renders the response;
//! * otherwise the client receives a bare `500 Internal Server Error`.
//!
//! Before this decision is made, the error passes through the errorware registered
//! on the [`Wrap`], in order, even when the handler succeeded.
//!
//! ```
//! # use httperr::errorware::log_errors;
//! # use httperr::output::ResponseWriter;
//! # use http::{Request, StatusCode};
//! let wrapped = httperr::wrap(|w: &mut dyn ResponseWriter, request: &Request<()>| {
//!     if request.uri().path() != "/" {
//!         return Err(httperr::Error::from(&httperr::error::NOT_FOUND));
//!     }
//!     w.write(b"index")?;
//!     Ok(())
//! })
//! .errorware(log_errors);
//!
//! let response = wrapped.call(&Request::new(()));
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(&response.body()[..], b"index");
//! ```
//!
//! [`wrap`]: ./wrap/fn.wrap.html
//! [`Wrap`]: ./wrap/struct.Wrap.html
//! [`Result`]: ./error/type.Result.html
//! [`HttpError`]: ./error/trait.HttpError.html

#![doc(html_root_url = "https://docs.rs/httperr/0.1.0")]
#![warn(
    missing_docs,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2018_compatibility,
    unused
)]

#[macro_use]
mod macros;

pub mod error;
pub mod errorware;
pub mod handler;
pub mod output;
pub mod wrap;

#[doc(inline)]
pub use crate::error::{Error, HttpError, Result};

#[doc(inline)]
pub use crate::handler::Handler;

#[doc(inline)]
pub use crate::output::ResponseWriter;

#[doc(inline)]
pub use crate::wrap::{wrap, Wrap};
