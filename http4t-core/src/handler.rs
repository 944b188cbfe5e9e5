use crate::http_message::{Request, Response};

/// Anything that can answer a request.
///
/// The response is handed to `fun` rather than returned, so a handler may
/// lend out data it owns (a body string, a file reader) for exactly as long
/// as the continuation runs.
pub trait Handler {
    fn handle<F>(&mut self, req: Request, fun: F) -> ()
        where F: FnOnce(Response) -> () + Sized;
}

/// Turns a plain function from request to response into a [`Handler`].
pub struct HandlerFn<T> where T: FnMut(Request) -> Response<'static> {
    handler: T,
}

impl<T> HandlerFn<T> where T: FnMut(Request) -> Response<'static> {
    pub fn new(handler: T) -> HandlerFn<T> {
        HandlerFn { handler }
    }
}

impl<T> Handler for HandlerFn<T> where T: FnMut(Request) -> Response<'static> {
    fn handle<F>(&mut self, req: Request, fun: F) -> ()
        where F: FnOnce(Response) -> () + Sized {
        let response = (self.handler)(req);
        fun(response)
    }
}
