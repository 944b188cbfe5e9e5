use std::fmt;
use std::io;
use std::io::{Cursor, Read};

use http4t_core::handler::Handler;
use http4t_core::headers::Headers;
use http4t_core::http_message::{Body, Request, Response, Status};
use http4t_testutil::Reporter;
use serde::Serialize;

/// Keeps failures instead of unwinding, so a test can look at them.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: Vec<String>,
    pub helpers: usize,
}

impl Reporter for RecordingReporter {
    fn helper(&mut self) {
        self.helpers += 1;
    }

    fn fatalf(&mut self, args: fmt::Arguments<'_>) {
        self.messages.push(args.to_string());
    }
}

impl RecordingReporter {
    /// Panics, naming the case, unless failures were reported exactly when
    /// `want_fatal` says they should have been.
    pub fn check(&self, name: &str, want_fatal: bool) {
        match (want_fatal, self.messages.is_empty()) {
            (true, true) => panic!("{}: test should have failed but it passed.", name),
            (false, false) => panic!("{}: test should pass but got: {}", name, self.messages.join("; ")),
            _ => {}
        }
    }

    pub fn only_message(&self) -> &str {
        assert_eq!(self.messages.len(), 1, "expected exactly one failure, got {:?}", self.messages);
        &self.messages[0]
    }
}

/// Always answers with the same status, headers and body, and counts calls.
pub struct FixedHandler {
    pub status: Status,
    pub headers: Headers,
    pub body: Vec<u8>,
    pub calls: usize,
}

impl FixedHandler {
    pub fn body(body: &[u8]) -> FixedHandler {
        FixedHandler { status: Status::OK, headers: Headers::empty(), body: body.to_vec(), calls: 0 }
    }

    pub fn status(code: u16) -> FixedHandler {
        FixedHandler { status: Status::from(code), headers: Headers::empty(), body: vec!(), calls: 0 }
    }

    pub fn json<T: Serialize>(value: &T) -> FixedHandler {
        FixedHandler::body(&serde_json::to_vec(value).unwrap())
            .with_header(("Content-Type", "application/json"))
    }

    pub fn with_header(self, pair: (&str, &str)) -> FixedHandler {
        FixedHandler { headers: self.headers.add(pair), ..self }
    }
}

impl Handler for FixedHandler {
    fn handle<F>(&mut self, _req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        self.calls += 1;
        fun(Response::status(self.status, self.headers.clone(), Body::bytes(&self.body)))
    }
}

struct ResetReader;

impl Read for ResetReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
    }
}

/// Streams a few bytes and then fails.
pub struct BrokenBodyHandler;

impl Handler for BrokenBodyHandler {
    fn handle<F>(&mut self, _req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        let body = Cursor::new(b"partial".to_vec()).chain(ResetReader);
        fun(Response::ok(Headers::empty(), Body::BodyStream(Box::new(body))))
    }
}

/// Returns without ever calling its continuation.
pub struct SilentHandler;

impl Handler for SilentHandler {
    fn handle<F>(&mut self, _req: Request, _fun: F) -> () where F: FnOnce(Response) -> () + Sized {}
}

#[derive(Serialize, Debug)]
pub struct KeyValue {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: &str, value: &str) -> KeyValue {
        KeyValue { key: key.to_string(), value: value.to_string() }
    }
}
