// API module: the wire types for a gist and a small blocking HTTP
// client that performs the single POST to the gist-creation endpoint.
// It is intentionally synchronous; the whole program is one linear
// request/response exchange.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::error::GistError;

const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("gistup/", env!("CARGO_PKG_VERSION"));

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One named file inside a gist. The wire format nests the text under a
/// `content` key: `{"files": {"a.txt": {"content": "..."}}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub content: String,
}

impl GistFile {
    /// Read a file into a gist entry. Bytes are taken as-is; anything
    /// that is not UTF-8 goes through a lossy conversion rather than
    /// aborting the run.
    pub fn read(path: &Path) -> Result<Self, GistError> {
        let bytes = fs::read(path).map_err(|source| GistError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(GistFile {
            content: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// The gist-creation payload, serialized directly to the wire form.
/// Built once per invocation and immutable afterwards. `BTreeMap` keeps
/// serialization deterministic; inserting the same filename twice keeps
/// the last content.
#[derive(Serialize, Debug)]
pub struct Gist {
    pub description: String,
    pub public: bool,
    pub files: BTreeMap<String, GistFile>,
}

/// The API response. The server returns a large object of which only
/// `html_url` is consumed, so the fields stay an open map.
#[derive(Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct GistResponse(serde_json::Map<String, serde_json::Value>);

impl GistResponse {
    /// The shareable URL of the created gist, or the empty string when
    /// the server did not return one.
    pub fn html_url(&self) -> &str {
        self.0
            .get("html_url")
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}

/// Blocking client for the gist-creation endpoint. Holds the base URL
/// and an optional token for the private (authenticated) path.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client configured from the environment: `GITHUB_API_URL`
    /// overrides the endpoint (handy against a test server) and
    /// `GITHUB_TOKEN` supplies the credential for private gists.
    pub fn from_env() -> Result<Self, GistError> {
        let base_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        Self::new(base_url, token)
    }

    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, GistError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GistError::Client)?;
        Ok(ApiClient {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    /// Send the gist as a single POST and return the decoded response.
    ///
    /// The public path is anonymous. The private path attaches the
    /// token and refuses to send anything when no token is configured,
    /// since the server would reject the request anyway. A non-success
    /// status is an error even when the body parses.
    pub fn create_gist(&self, gist: &Gist) -> Result<GistResponse, GistError> {
        let url = format!("{}/gists", self.base_url);
        let body = serde_json::to_vec(gist).map_err(GistError::Serialize)?;

        let mut req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if !gist.public {
            let token = self.token.as_deref().ok_or(GistError::Auth)?;
            req = req
                .header(ACCEPT, "application/json")
                .header(AUTHORIZATION, format!("Bearer {}", token));
        }

        debug!("POST {}", url);
        let res = req.send().map_err(|source| GistError::Network {
            url: url.clone(),
            source,
        })?;

        let status = res.status();
        debug!("response status: {}", status);
        let text = res
            .text()
            .map_err(|source| GistError::Network { url, source })?;
        if !status.is_success() {
            return Err(GistError::Api { status, body: text });
        }

        serde_json::from_str(&text).map_err(GistError::Decode)
    }
}
