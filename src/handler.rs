//! `Handler` and supplemental components.

use http::Request;
use std::sync::Arc;

use crate::error::Result;
use crate::output::ResponseWriter;

/// A trait representing handler functions which report failures as errors.
///
/// A handler writes its successful response into `w`. When it returns an error,
/// everything written so far is discarded and the error determines the response.
pub trait Handler<B> {
    /// Applies an incoming request to this handler.
    fn call(&self, w: &mut dyn ResponseWriter, request: &Request<B>) -> Result<()>;
}

impl<F, B> Handler<B> for F
where
    F: Fn(&mut dyn ResponseWriter, &Request<B>) -> Result<()>,
{
    #[inline]
    fn call(&self, w: &mut dyn ResponseWriter, request: &Request<B>) -> Result<()> {
        (*self)(w, request)
    }
}

impl<H, B> Handler<B> for Arc<H>
where
    H: Handler<B>,
{
    #[inline]
    fn call(&self, w: &mut dyn ResponseWriter, request: &Request<B>) -> Result<()> {
        (**self).call(w, request)
    }
}
