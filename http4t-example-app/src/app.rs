use http4t_core::handler::Handler;
use http4t_core::http_message::{Request, Response};
use tracing::info;

use crate::api::Api;
use crate::environment::Environment;
use crate::not_found_handler::NotFoundHandler;
use crate::ok_handler::OkHandler;
use crate::router::Router;

pub struct App<H> where H: Handler {
    handler: H,
    pub env: Environment,
}

impl<H> App<H> where H: Handler {
    pub fn new(handler: H, env: Environment) -> App<H> {
        App {
            handler,
            env,
        }
    }
}

impl<H> Handler for App<H> where H: Handler {
    fn handle<F>(&mut self, req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        self.handler.handle(req, fun)
    }
}

impl App<NotFoundHandler<Router>> {
    pub fn in_memory(env: Environment) -> App<NotFoundHandler<Router>> {
        let greeting = env.get_or("GREETING", "Hello, world!");
        let org = env.get_or("ORG", "http4t");
        info!(%org, "building app in memory");
        let router = Router::new(OkHandler::new(greeting), Api::new(org));
        App::new(NotFoundHandler::new(router), env)
    }
}
