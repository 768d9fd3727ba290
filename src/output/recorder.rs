use http::header::HeaderMap;
use http::{Response, StatusCode};
use std::io;

use super::ResponseWriter;

/// A `ResponseWriter` which behaves like a connection to the client.
///
/// The first `write_header` wins and later calls are ignored. Once the status line
/// has been written the headers are frozen: modifications made afterwards are lost.
/// The collected response is obtained with `into_response`.
#[derive(Debug, Default)]
pub struct Recorder {
    headers: HeaderMap,
    scratch: HeaderMap,
    status: Option<StatusCode>,
    body: Vec<u8>,
}

impl Recorder {
    /// Creates an empty `Recorder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status code of the response, `200 OK` if none was written.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Returns `true` if `write_header` has been called.
    pub fn wrote_header(&self) -> bool {
        self.status.is_some()
    }

    #[allow(missing_docs)]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[allow(missing_docs)]
    pub fn body(&self) -> &[u8] {
        &self.body[..]
    }

    /// Converts the recorded data into an `http::Response`.
    pub fn into_response(self) -> Response<Vec<u8>> {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseWriter for Recorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        if self.status.is_some() {
            self.scratch = self.headers.clone();
            return &mut self.scratch;
        }
        &mut self.headers
    }

    fn write_header(&mut self, status: StatusCode) {
        if let Some(current) = self.status {
            log::warn!(
                "superfluous write_header call: {} (the status is already {})",
                status,
                current
            );
            return;
        }
        self.status = Some(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.status.is_none() {
            self.write_header(StatusCode::OK);
        }
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
