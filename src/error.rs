// Error kinds surfaced to the user. Every variant is terminal: the
// program prints one line and exits, there is no recovery or retry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GistError {
    /// A named input file could not be read. Nothing is uploaded when
    /// any file fails.
    #[error("failed to read {}: {source}", path.display())]
    FileRead { path: PathBuf, source: io::Error },

    /// The payload could not be encoded to JSON. Should not happen for
    /// payloads built from real files.
    #[error("failed to encode gist payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A private gist was requested without a usable credential.
    #[error("a private gist requires GITHUB_TOKEN to be set")]
    Auth,

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never completed: DNS failure, refused connection,
    /// or timeout.
    #[error("request to {url} failed: {source}")]
    Network { url: String, source: reqwest::Error },

    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The server answered 2xx but the body was not valid JSON.
    #[error("could not decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
