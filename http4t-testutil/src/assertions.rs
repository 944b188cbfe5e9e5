use std::fmt::Debug;

use http4t_core::handler::Handler;
use http4t_core::http_message::Request;
use serde::Serialize;

use crate::error::TestutilError;
use crate::recorder::{read_body, read_decoded_body, record};
use crate::reporter::{report, Reporter};

#[track_caller]
pub fn match_response_status_code<T, H>(t: &mut T, handler: &mut H, req: Request, want: u16)
    where T: Reporter + ?Sized, H: Handler {
    t.helper();
    let got = record(t, handler, req).status.code();
    if got != want {
        report(t, TestutilError::mismatch(want, got));
    }
}

/// Byte for byte; an empty `want` only matches an empty body.
#[track_caller]
pub fn match_response_body<T, H>(t: &mut T, handler: &mut H, req: Request, want: &[u8])
    where T: Reporter + ?Sized, H: Handler {
    t.helper();
    let got = match read_body(t, handler, req) {
        Some(got) => got,
        None => return,
    };
    if got != want {
        report(t, TestutilError::mismatch(String::from_utf8_lossy(want), String::from_utf8_lossy(&got)));
    }
}

#[track_caller]
pub fn match_response_decoded_body<T, H>(t: &mut T, handler: &mut H, req: Request, want: &[u8])
    where T: Reporter + ?Sized, H: Handler {
    t.helper();
    let got = match read_decoded_body(t, handler, req) {
        Some(got) => got,
        None => return,
    };
    if got != want {
        report(t, TestutilError::mismatch(String::from_utf8_lossy(want), String::from_utf8_lossy(&got)));
    }
}

/// Compares the body against `want` serialized with `serde_json::to_vec`.
///
/// The comparison is on bytes, not on json values: field order and
/// whitespace matter, so the handler must serialize the same way.
#[track_caller]
pub fn match_response_json<T, H, V>(t: &mut T, handler: &mut H, req: Request, want: &V)
    where T: Reporter + ?Sized, H: Handler, V: Serialize + Debug + ?Sized {
    t.helper();
    let want_bytes = match serde_json::to_vec(want) {
        Ok(bytes) => bytes,
        Err(source) => {
            report(t, TestutilError::Marshal { value: format!("{:?}", want), source });
            return;
        }
    };
    match_response_body(t, handler, req, &want_bytes);
}
