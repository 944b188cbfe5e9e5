/*
    http4t is a toolkit for testing http handlers
    Copyright (C) 2021 Tom Shacham

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Test helpers for [`Handler`](http4t_core::handler::Handler)s.
//!
//! Every helper takes a [`Reporter`] and reports failure through
//! [`Reporter::fatalf`] instead of returning it. With [`PanicReporter`] a
//! failure panics, which fails the surrounding `#[test]`:
//!
//! ```
//! use http4t_core::handler::HandlerFn;
//! use http4t_core::headers::Headers;
//! use http4t_core::http_message::{Request, Response};
//! use http4t_core::http_message::Body::BodyString;
//! use http4t_testutil::{match_response_body, match_response_status_code, PanicReporter};
//!
//! let mut handler = HandlerFn::new(|_req| Response::ok(Headers::empty(), BodyString("good")));
//! match_response_status_code(&mut PanicReporter, &mut handler, Request::default(), 200);
//! match_response_body(&mut PanicReporter, &mut handler, Request::default(), b"good");
//! ```

pub mod reporter;
pub mod recorder;
pub mod assertions;
pub mod files;
pub mod error;

pub use assertions::{match_response_body, match_response_decoded_body, match_response_json, match_response_status_code};
pub use error::TestutilError;
pub use files::{read_file, temp_writer, TempWriter};
pub use recorder::{body, decoded_body, record, CapturedResponse};
pub use reporter::{PanicReporter, Reporter};
