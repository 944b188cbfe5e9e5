use std::io;

use thiserror::Error;

/// Everything a helper can report. The `Display` output is the message the
/// reporter receives.
#[derive(Debug, Error)]
pub enum TestutilError {
    #[error("want: {want}, got: {got}")]
    Mismatch { want: String, got: String },

    #[error("fail to read response: {0}")]
    ReadResponse(#[source] io::Error),

    #[error("unsupported content encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("fail to decode {encoding} response: {source}")]
    Decode { encoding: String, source: io::Error },

    #[error("fail to marshal {value}: {source}")]
    Marshal { value: String, source: serde_json::Error },

    #[error("fail to read {path}: {source}")]
    ReadFile { path: String, source: io::Error },

    #[error("fail to create temp file {dir}/{pattern}-*: {source}")]
    CreateTemp { dir: String, pattern: String, source: io::Error },
}

impl TestutilError {
    pub fn mismatch<W, G>(want: W, got: G) -> TestutilError
        where W: ToString, G: ToString {
        TestutilError::Mismatch { want: want.to_string(), got: got.to_string() }
    }
}
