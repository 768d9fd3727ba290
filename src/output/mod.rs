//! Components for writing HTTP responses.
//!
//! Handlers never see the real response. They write into a [`ResponseWriter`], which
//! during a wrapped invocation is a [`BufferedResponse`]: nothing reaches the client
//! until the handler has returned and the final error decision has been made.
//!
//! [`ResponseWriter`]: ./trait.ResponseWriter.html
//! [`BufferedResponse`]: ./struct.BufferedResponse.html

mod buffer;
mod recorder;

pub use self::buffer::{BufferedResponse, WriteError};
pub use self::recorder::Recorder;

// ====

use http::header::HeaderMap;
use http::StatusCode;
use std::io;

/// The minimal set of operations a handler needs to produce a response.
///
/// There is deliberately no way to flush, stream or take over the connection.
pub trait ResponseWriter {
    /// Returns the header map of the response to be sent.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Sets the status code of the response.
    fn write_header(&mut self, status: StatusCode);

    /// Appends `buf` to the response body.
    ///
    /// If no status code has been written yet, `200 OK` is used.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

impl<'a, W> ResponseWriter for &'a mut W
where
    W: ResponseWriter + ?Sized,
{
    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn write_header(&mut self, status: StatusCode) {
        (**self).write_header(status)
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}
