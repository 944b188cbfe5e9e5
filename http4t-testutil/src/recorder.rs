use std::io;
use std::io::{Cursor, Read};

use http4t_core::codex::{Codex, CompressionAlgorithm};
use http4t_core::handler::Handler;
use http4t_core::headers::Headers;
use http4t_core::http_message::{Body, Request, Response, Status};
use tracing::{debug, warn};

use crate::error::TestutilError;
use crate::reporter::{report, Reporter};

/// A handler's response, drained into memory.
///
/// If reading the handler's body stream failed part way, the bytes read so
/// far are kept and the error is returned once they have been drained, so it
/// surfaces to whoever reads the body rather than to the recorder.
pub struct CapturedResponse {
    pub status: Status,
    pub headers: Headers,
    body: CapturedBody,
}

struct CapturedBody {
    bytes: Cursor<Vec<u8>>,
    error: Option<io::Error>,
}

impl Read for CapturedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.bytes.read(buf)?;
        if read == 0 && !buf.is_empty() {
            if let Some(error) = self.error.take() {
                return Err(error);
            }
        }
        Ok(read)
    }
}

impl CapturedResponse {
    fn capture(res: Response) -> CapturedResponse {
        let mut bytes = Vec::new();
        let error = match res.body {
            Body::BodyString(str) => {
                bytes.extend_from_slice(str.as_bytes());
                None
            }
            Body::BodyStream(mut reader) => reader.read_to_end(&mut bytes).err()
        };
        CapturedResponse {
            status: res.status,
            headers: res.headers,
            body: CapturedBody { bytes: Cursor::new(bytes), error },
        }
    }

    /// What a handler that never answers leaves behind.
    fn unanswered() -> CapturedResponse {
        CapturedResponse {
            status: Status::OK,
            headers: Headers::empty(),
            body: CapturedBody { bytes: Cursor::new(Vec::new()), error: None },
        }
    }

    pub fn body(&mut self) -> &mut dyn Read {
        &mut self.body
    }

    pub fn read_body(&mut self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.body.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

/// Runs `handler` against `req` in memory and captures what it responds with.
#[track_caller]
pub fn record<T, H>(t: &mut T, handler: &mut H, req: Request) -> CapturedResponse
    where T: Reporter + ?Sized, H: Handler {
    t.helper();
    let method = req.method.value();
    let uri = req.uri.to_string();
    let mut captured = None;
    handler.handle(req, |res| {
        captured = Some(CapturedResponse::capture(res));
    });
    match captured {
        Some(res) => {
            debug!(method, %uri, status = res.status.code(), bytes = res.body.bytes.get_ref().len(), "recorded response");
            res
        }
        None => {
            warn!(method, %uri, "handler never responded, recording an empty 200");
            CapturedResponse::unanswered()
        }
    }
}

/// The full response body, or an empty vector once a failure is reported.
#[track_caller]
pub fn body<T, H>(t: &mut T, handler: &mut H, req: Request) -> Vec<u8>
    where T: Reporter + ?Sized, H: Handler {
    t.helper();
    read_body(t, handler, req).unwrap_or_default()
}

/// Like [`body`], then undoes whatever `Content-Encoding` the handler applied.
#[track_caller]
pub fn decoded_body<T, H>(t: &mut T, handler: &mut H, req: Request) -> Vec<u8>
    where T: Reporter + ?Sized, H: Handler {
    t.helper();
    read_decoded_body(t, handler, req).unwrap_or_default()
}

/// `None` once a failure has been reported.
#[track_caller]
pub(crate) fn read_body<T, H>(t: &mut T, handler: &mut H, req: Request) -> Option<Vec<u8>>
    where T: Reporter + ?Sized, H: Handler {
    let mut res = record(t, handler, req);
    match res.read_body() {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            report(t, TestutilError::ReadResponse(e));
            None
        }
    }
}

/// `None` once a failure has been reported.
#[track_caller]
pub(crate) fn read_decoded_body<T, H>(t: &mut T, handler: &mut H, req: Request) -> Option<Vec<u8>>
    where T: Reporter + ?Sized, H: Handler {
    let mut res = record(t, handler, req);
    let raw = match res.read_body() {
        Ok(bytes) => bytes,
        Err(e) => {
            report(t, TestutilError::ReadResponse(e));
            return None;
        }
    };
    let encoding = res.headers.get("Content-Encoding").unwrap_or_default();
    let algorithm = match CompressionAlgorithm::from_content_encoding(&encoding) {
        Some(algorithm) => algorithm,
        None => {
            report(t, TestutilError::UnsupportedEncoding(encoding));
            return None;
        }
    };
    match Codex::decode(&raw, algorithm) {
        Ok(bytes) => Some(bytes),
        Err(source) => {
            report(t, TestutilError::Decode { encoding, source });
            None
        }
    }
}
