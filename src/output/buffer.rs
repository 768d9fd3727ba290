use http::header::HeaderMap;
use http::StatusCode;
use std::io;

use super::ResponseWriter;

/// A violation of the writer protocol committed by a handler.
///
/// These errors are opaque: unless an errorware replaces them, the client receives
/// a generic `500 Internal Server Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WriteError {
    /// `write_header` was called more than once.
    #[error("multiple calls to write_header")]
    MultipleWriteHeader,

    /// `write_header` was called after the body was written.
    #[error("write_header called after the body was written")]
    WriteHeaderAfterBody,

    /// The headers were accessed for modification after the body was written.
    #[error("headers modified after being sent")]
    HeadersAfterBody,
}

/// An in-memory `ResponseWriter` which holds everything a handler writes.
///
/// The recorded response is either copied into the real writer with `flush`, or
/// dropped when the request turns out to have failed.
#[derive(Debug, Default)]
pub struct BufferedResponse {
    headers: HeaderMap,
    // detached copy handed out once the body has started
    scratch: HeaderMap,
    body: Vec<u8>,
    status: Option<StatusCode>,
    body_started: bool,
    error: Option<WriteError>,
}

impl BufferedResponse {
    /// Creates an empty `BufferedResponse`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status code written so far, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    #[allow(missing_docs)]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[allow(missing_docs)]
    pub fn body(&self) -> &[u8] {
        &self.body[..]
    }

    /// Returns the first protocol violation, if any.
    pub fn error(&self) -> Option<WriteError> {
        self.error
    }

    /// Takes the first protocol violation out of this buffer.
    pub fn take_error(&mut self) -> Option<WriteError> {
        self.error.take()
    }

    fn set_error(&mut self, err: WriteError) {
        if self.error.is_none() {
            log::trace!("response writer misuse: {}", err);
            self.error = Some(err);
        }
    }

    /// Copies the buffered response into `dst`.
    ///
    /// Headers replace any values of the same name already present in `dst`. The
    /// status code is written only if the handler wrote one. Failures while writing
    /// the body are ignored: once the real response has started there is nothing left
    /// to recover.
    pub fn flush(self, dst: &mut dyn ResponseWriter) {
        {
            let headers = dst.headers_mut();
            for name in self.headers.keys() {
                headers.remove(name);
            }
            for (name, value) in self.headers.iter() {
                headers.append(name.clone(), value.clone());
            }
        }
        if let Some(status) = self.status {
            dst.write_header(status);
        }
        if !self.body.is_empty() {
            let _ = dst.write(&self.body[..]);
        }
    }
}

impl ResponseWriter for BufferedResponse {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        if self.body_started {
            self.set_error(WriteError::HeadersAfterBody);
            self.scratch = self.headers.clone();
            return &mut self.scratch;
        }
        &mut self.headers
    }

    fn write_header(&mut self, status: StatusCode) {
        if self.status.is_some() {
            self.set_error(WriteError::MultipleWriteHeader);
            return;
        }
        if self.body_started {
            self.set_error(WriteError::WriteHeaderAfterBody);
            return;
        }
        self.status = Some(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.write_header(StatusCode::OK);
        }
        self.body_started = true;
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
