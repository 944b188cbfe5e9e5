use std::io::Read;

use crate::headers::Headers;
use crate::http_message::Body::{BodyStream, BodyString};
use crate::http_message::Method::{CONNECT, DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT, TRACE};
use crate::http_message::Status::{BadRequest, Created, Forbidden, InternalServerError, MovedPermanently, NoContent, NotFound, Other, OK};
use crate::uri::Uri;

pub enum Body<'a> {
    BodyString(&'a str),
    BodyStream(Box<dyn Read + 'a>),
}

impl<'a> Body<'a> {
    pub fn empty() -> Body<'a> {
        BodyString("")
    }

    pub fn bytes(bytes: &'a [u8]) -> Body<'a> {
        BodyStream(Box::new(bytes))
    }
}

pub struct Request<'a> {
    pub headers: Headers,
    pub body: Body<'a>,
    pub uri: Uri<'a>,
    pub method: Method,
}

pub struct Response<'a> {
    pub headers: Headers,
    pub body: Body<'a>,
    pub status: Status,
}

impl<'a> Request<'a> {
    pub fn request(method: Method, uri: Uri<'a>, headers: Headers) -> Request<'a> {
        Request { method, headers, body: Body::empty(), uri }
    }

    pub fn get(uri: Uri<'a>, headers: Headers) -> Request<'a> {
        Request { method: GET, headers, body: Body::empty(), uri }
    }

    pub fn post(uri: Uri<'a>, headers: Headers, body: Body<'a>) -> Request<'a> {
        Request { method: POST, headers, body, uri }
    }

    pub fn with_uri(self, uri: Uri<'a>) -> Request<'a> {
        Request {
            uri,
            ..self
        }
    }
}

/// A `GET` with no uri, headers or body; enough for handlers that ignore
/// their request.
impl<'a> Default for Request<'a> {
    fn default() -> Self {
        Request::get(Uri::empty(), Headers::empty())
    }
}

impl<'a> Response<'a> {
    pub fn status(status: Status, headers: Headers, body: Body<'a>) -> Response<'a> {
        Response { headers, body, status }
    }

    pub fn ok(headers: Headers, body: Body<'a>) -> Response<'a> {
        Response { headers, body, status: OK }
    }

    pub fn bad_request(headers: Headers, body: Body<'a>) -> Response<'a> {
        Response { headers, body, status: BadRequest }
    }

    pub fn not_found(headers: Headers, body: Body<'a>) -> Response<'a> {
        Response { headers, body, status: NotFound }
    }

    pub fn internal_server_error(headers: Headers, body: Body<'a>) -> Response<'a> {
        Response { headers, body, status: InternalServerError }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Method {
    GET,
    CONNECT,
    HEAD,
    POST,
    OPTIONS,
    DELETE,
    PATCH,
    PUT,
    TRACE,
}

impl Method {
    pub fn value(&self) -> &'static str {
        match self {
            GET => "GET",
            POST => "POST",
            PATCH => "PATCH",
            OPTIONS => "OPTIONS",
            CONNECT => "CONNECT",
            HEAD => "HEAD",
            DELETE => "DELETE",
            PUT => "PUT",
            TRACE => "TRACE"
        }
    }
}

/// Well known statuses get a name, anything else is carried as `Other`.
/// Use [`Status::from`] rather than building `Other` by hand so that equal
/// codes compare equal.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    OK,
    Created,
    NoContent,
    MovedPermanently,
    BadRequest,
    Forbidden,
    NotFound,
    InternalServerError,
    Other(u16),
}

impl Status {
    pub fn code(&self) -> u16 {
        match self {
            OK => 200,
            Created => 201,
            NoContent => 204,
            MovedPermanently => 301,
            BadRequest => 400,
            Forbidden => 403,
            NotFound => 404,
            InternalServerError => 500,
            Other(code) => *code
        }
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        match code {
            200 => OK,
            201 => Created,
            204 => NoContent,
            301 => MovedPermanently,
            400 => BadRequest,
            403 => Forbidden,
            404 => NotFound,
            500 => InternalServerError,
            other => Other(other)
        }
    }
}

pub fn body_string(mut body: Body) -> std::io::Result<String> {
    match body {
        BodyString(str) => Ok(str.to_string()),
        BodyStream(ref mut reader) => {
            let mut string = String::new();
            reader.read_to_string(&mut string)?;
            Ok(string)
        }
    }
}
