use http4t_core::handler::Handler;
use http4t_core::headers::Headers;
use http4t_core::http_message::{Method, Request, Response};
use http4t_core::http_message::Body::BodyString;
use http4t_core::uri::Uri;

use crate::api::Api;
use crate::ok_handler::OkHandler;

pub struct Router {
    home: OkHandler,
    api: Api,
}

impl Router {
    pub fn new(home: OkHandler, api: Api) -> Router {
        Router { home, api }
    }
}

impl Handler for Router {
    fn handle<F>(&mut self, req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        match req {
            // do not allow delete on any path
            Request { method: Method::DELETE, .. } => {
                fun(Response::bad_request(Headers::empty(), BodyString("Naughty!")));
            }
            Request { uri: Uri { path: "/", .. }, .. } => self.home.handle(req, fun),
            Request { .. } if self.api.matches(req.uri.path) => self.api.handle(req, fun),
            _ => fun(Response::not_found(Headers::empty(), BodyString("Not found.")))
        }
    }
}
