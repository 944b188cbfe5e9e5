use http4t_core::handler::Handler;
use http4t_core::headers::Headers;
use http4t_core::http_message::{Request, Response};
use http4t_core::http_message::Body::BodyString;
use http4t_core::http_message::Status::{Forbidden, NotFound};
use tracing::debug;

/// Hides why something could not be found: 403s and 404s from the wrapped
/// handler all come out as the same plain 404.
pub struct NotFoundHandler<H> where H: Handler {
    handler: H,
}

impl<H> NotFoundHandler<H> where H: Handler {
    pub fn new(handler: H) -> NotFoundHandler<H> {
        NotFoundHandler {
            handler
        }
    }
}

impl<H> Handler for NotFoundHandler<H> where H: Handler {
    fn handle<F>(&mut self, req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        let path = req.uri.path.to_string();
        self.handler.handle(req, |res| {
            if res.status == NotFound || res.status == Forbidden {
                debug!(%path, status = res.status.code(), "answering not found");
                fun(Response::not_found(Headers::empty(), BodyString("Not found.")))
            } else {
                fun(res)
            }
        })
    }
}
