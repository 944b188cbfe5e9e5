use http4t_core::handler::Handler;
use http4t_core::headers::Headers;
use http4t_core::http_message::{Request, Response};
use http4t_core::http_message::Body::BodyString;

pub struct OkHandler {
    greeting: String,
}

impl OkHandler {
    pub fn new(greeting: String) -> OkHandler {
        OkHandler { greeting }
    }
}

impl Handler for OkHandler {
    fn handle<F>(&mut self, _req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        fun(Response::ok(Headers::from(vec!(("Content-Type", "text/plain"))), BodyString(self.greeting.as_str())));
    }
}
