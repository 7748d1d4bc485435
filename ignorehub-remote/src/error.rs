use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for remote operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("request to '{url}' failed")]
    #[diagnostic(
        code(ignorehub::remote::request),
        help("check your network connection and retry")
    )]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' answered with status {status}")]
    #[diagnostic(
        code(ignorehub::remote::status),
        help("the GitHub API rate-limits unauthenticated clients; wait a minute and retry")
    )]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode the response from '{url}'")]
    #[diagnostic(code(ignorehub::remote::decode))]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write the index cache at '{path}'")]
    #[diagnostic(
        code(ignorehub::remote::cache),
        help("delete the file and run 'ignorehub refresh'")
    )]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode the index cache")]
    #[diagnostic(code(ignorehub::remote::cache_encode))]
    CacheEncode {
        #[source]
        source: serde_json::Error,
    },
}
