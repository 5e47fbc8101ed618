// src/gist/fetch.rs
// =============================================================================
// This module loads a public gist through the GitHub REST API.
//
// Flow:
// 1. GET {api}/gists/{id} with the v3 JSON Accept header
// 2. Map non-success status codes to a failure kind
// 3. Parse the files object and pick one file
//
// Nothing is ever returned as Err. Every failure becomes a
// GistFetchResult::Failure, and transport problems are logged and reported
// as a generic network error.
//
// Rust concepts:
// - async functions: The request is the only thing we wait on
// - thiserror: A small error enum for the things that can go wrong in transit
// =============================================================================

use log::{debug, error, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::id::GistId;
use super::model::{GistErrorKind, GistFetchResult, GistFile, GistResponse};

/// Public GitHub REST API root
pub const GITHUB_API_BASE: &str = "https://api.github.com/";

/// Asks for the versioned v3 JSON representation
const GIST_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub rejects API requests that carry no User-Agent
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Extensions preferred when no filename is requested
const PREFERRED_EXTENSIONS: [&str; 2] = [".md", ".txt"];

// Things that can go wrong between sending the request and holding parsed JSON
//
// These never reach the caller. They are logged and collapsed into
// GistErrorKind::NetworkError.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid gist JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unauthenticated client for the gist endpoint
#[derive(Debug, Clone)]
pub struct GistClient {
    base_url: Url,
    client: Client,
}

impl GistClient {
    /// Client pointed at api.github.com
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Client pointed at any API root (a mirror, or a fake server in tests)
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let mut base_url = Url::parse(base_url)?;

        // Url::join drops the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        // No timeout on purpose, the transport default applies
        let client = Client::builder().user_agent(CLIENT_USER_AGENT).build()?;

        Ok(Self { base_url, client })
    }

    // Fetches a gist and returns the content of one of its files
    //
    // Parameters:
    //   gist_id: validated gist ID
    //   target_filename: exact file name to return, or None to let the
    //                    selection policy decide
    //
    // Returns: Success with content/filename/API id, or a typed Failure
    pub async fn fetch_public_gist(
        &self,
        gist_id: &GistId,
        target_filename: Option<&str>,
    ) -> GistFetchResult {
        match self.request_gist(gist_id).await {
            Ok(Ok(gist)) => select_from_gist(gist, target_filename),
            Ok(Err(kind)) => GistFetchResult::failure(kind),
            Err(e) => {
                error!("Gist fetch error for {}: {}", gist_id, e);
                GistFetchResult::failure(GistErrorKind::NetworkError)
            }
        }
    }

    // Sends the request and parses the body
    //
    // The outer Result is for transport errors, the inner one for
    // HTTP status failures that we report by kind.
    async fn request_gist(
        &self,
        gist_id: &GistId,
    ) -> Result<Result<GistResponse, GistErrorKind>, FetchError> {
        let url = self.base_url.join(&format!("gists/{}", gist_id))?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GIST_ACCEPT_HEADER)
            .send()
            .await?;

        // Status is checked before touching the body
        if let Some(kind) = failure_for_status(response.status()) {
            debug!("Gist {} answered HTTP {}", gist_id, response.status().as_u16());
            return Ok(Err(kind));
        }

        let body = response.text().await?;
        let gist: GistResponse = serde_json::from_str(&body)?;
        Ok(Ok(gist))
    }
}

// Fetches a gist with a default api.github.com client
//
// Building the client can only fail if the TLS backend cannot start. That
// is reported the same way as any other transport error.
pub async fn fetch_public_gist(gist_id: &GistId, target_filename: Option<&str>) -> GistFetchResult {
    match GistClient::new() {
        Ok(client) => client.fetch_public_gist(gist_id, target_filename).await,
        Err(e) => {
            error!("Could not build HTTP client: {}", e);
            GistFetchResult::failure(GistErrorKind::NetworkError)
        }
    }
}

// Maps an HTTP status to a failure kind
//
// Returns None for 2xx, meaning "go on and parse the body".
//
//   404 -> NotFoundOrPrivate (GitHub hides private gists behind 404)
//   403 -> RateLimited
//   any other non-2xx -> HttpError(code)
pub fn failure_for_status(status: StatusCode) -> Option<GistErrorKind> {
    match status {
        s if s.is_success() => None,
        StatusCode::NOT_FOUND => Some(GistErrorKind::NotFoundOrPrivate),
        StatusCode::FORBIDDEN => Some(GistErrorKind::RateLimited),
        other => Some(GistErrorKind::HttpError(other.as_u16())),
    }
}

// Applies the file selection policy to a parsed gist
fn select_from_gist(gist: GistResponse, target_filename: Option<&str>) -> GistFetchResult {
    let files = match gist.files() {
        Ok(files) => files,
        Err(e) => {
            error!("Gist fetch error for {}: invalid file entry: {}", gist.id, e);
            return GistFetchResult::failure(GistErrorKind::NetworkError);
        }
    };

    match select_file(files, target_filename) {
        Ok(file) => {
            if file.truncated {
                warn!(
                    "{} is truncated by the API ({} bytes total), content is partial",
                    file.filename, file.size
                );
            }
            debug!(
                "Selected {} (language: {}, raw: {})",
                file.filename,
                file.language.as_deref().unwrap_or("unknown"),
                file.raw_url
            );

            GistFetchResult::Success {
                content: file.content,
                filename: file.filename,
                gist_id: gist.id,
            }
        }
        Err(kind) => GistFetchResult::failure(kind),
    }
}

// Picks one file out of the gist
//
// With a target name: exact, case-sensitive match or FileNotFound.
// Without one: first .md/.txt file, else the first file.
pub fn select_file(
    mut files: Vec<GistFile>,
    target_filename: Option<&str>,
) -> Result<GistFile, GistErrorKind> {
    if files.is_empty() {
        return Err(GistErrorKind::EmptyGist);
    }

    // An empty name counts as "no name given"
    if let Some(target) = target_filename.filter(|name| !name.is_empty()) {
        return files
            .into_iter()
            .find(|f| f.filename == target)
            .ok_or_else(|| GistErrorKind::FileNotFound(target.to_string()));
    }

    let preferred = files.iter().position(|f| {
        PREFERRED_EXTENSIONS
            .iter()
            .any(|ext| f.filename.ends_with(ext))
    });

    // Non-empty was checked above, so index 0 exists
    Ok(files.swap_remove(preferred.unwrap_or(0)))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Result<Result<GistResponse, GistErrorKind>, FetchError>?
//    - The outer Result means "did the HTTP exchange work at all"
//    - The inner Result means "did GitHub give us a gist or a status we map"
//    - The ? operator only unwraps the outer layer, so transport errors
//      bubble up while status failures are kept as plain values
//
// 2. What does #[from] do in the FetchError enum?
//    - thiserror generates From<reqwest::Error> (and friends) for us
//    - That is what lets `.send().await?` turn a reqwest error into FetchError
//
// 3. Why Option<&str> instead of Option<String> for the file name?
//    - We only compare against it, we never store it
//    - Callers with an Option<String> can pass `name.as_deref()`
//
// 4. What is swap_remove?
//    - Removes an element from a Vec by moving the last one into its slot
//    - O(1), and gives us the owned GistFile without cloning
//    - Order of the rest no longer matters once we picked our file
//
// 5. Why is there no timeout on the client?
//    - reqwest has no request timeout unless you set one
//    - Callers that need one can wrap the call in tokio::time::timeout
// -----------------------------------------------------------------------------
