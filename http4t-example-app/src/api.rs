use http4t_core::codex::{Codex, CompressionAlgorithm};
use http4t_core::handler::Handler;
use http4t_core::headers::Headers;
use http4t_core::http_message::{Body, Request, Response};
use http4t_core::http_message::Body::BodyString;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PROFILE_PATH: &str = "^/api/profile/([^/]+)$";

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Profile {
    pub name: String,
    pub org: String,
}

/// Serves `GET /api/profile/{name}` as json. The org comes from `?org=`,
/// falling back to the one configured for the app.
pub struct Api {
    profile_regex: Regex,
    default_org: String,
}

impl Api {
    pub fn new(default_org: String) -> Api {
        Api {
            profile_regex: Regex::new(PROFILE_PATH).expect("profile pattern compiles"),
            default_org,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.profile_regex.is_match(path)
    }

    fn profile(&self, req: &Request) -> Option<Profile> {
        let captures = self.profile_regex.captures(req.uri.path)?;
        let name = captures.get(1)?.as_str().to_string();
        let org = req.uri.query_param("org")
            .map(|org| org.to_string())
            .unwrap_or_else(|| self.default_org.clone());
        Some(Profile { name, org })
    }
}

// `gzip;q=0` is a refusal, and a missing q means 1.
fn accepts_gzip(headers: &Headers) -> bool {
    headers.get("Accept-Encoding")
        .map(|value| value.split(',').any(|coding| {
            let mut params = coding.split(';').map(str::trim);
            let name = params.next().unwrap_or("");
            let quality = params
                .find_map(|param| param.strip_prefix("q="))
                .map(|q| q.parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);
            name.eq_ignore_ascii_case("gzip") && quality > 0.0
        }))
        .unwrap_or(false)
}

impl Handler for Api {
    fn handle<F>(&mut self, req: Request, fun: F) -> () where F: FnOnce(Response) -> () + Sized {
        let profile = match self.profile(&req) {
            Some(profile) => profile,
            None => return fun(Response::not_found(Headers::empty(), BodyString("Not found."))),
        };
        let json = match serde_json::to_vec(&profile) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "could not serialize profile");
                return fun(Response::internal_server_error(Headers::empty(), BodyString("Could not serialize profile.")));
            }
        };
        let headers = Headers::from(vec!(("Content-Type", "application/json")));
        if !accepts_gzip(&req.headers) {
            debug!(name = %profile.name, "serving profile");
            return fun(Response::ok(headers, Body::bytes(&json)));
        }
        match Codex::encode(&json, CompressionAlgorithm::GZIP) {
            Ok(compressed) => {
                debug!(name = %profile.name, "serving gzipped profile");
                fun(Response::ok(headers.add(("Content-Encoding", "gzip")), Body::bytes(&compressed)))
            }
            Err(e) => {
                warn!(error = %e, "could not gzip profile, serving it plain");
                fun(Response::ok(headers, Body::bytes(&json)))
            }
        }
    }
}
