use http4t_core::handler::Handler;
use http4t_core::http_message::{Request, Response};

/// Echoes the request headers and body straight back.
pub struct PassThroughHandler {}

impl Handler for PassThroughHandler {
    fn handle<F>(&mut self, req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        fun(Response::ok(req.headers, req.body));
    }
}
