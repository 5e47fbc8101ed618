// src/gist/mod.rs
// =============================================================================
// This module reads text out of public GitHub Gists.
//
// Currently implements:
// - Turning a bare ID or a gist.github.com URL into a GistId
// - Fetching a gist through the REST API (no authentication)
// - Picking one file: by exact name, else first .md/.txt, else first file
//
// Submodules:
// - id: GistId and input parsing
// - model: API response types and GistFetchResult
// - fetch: The HTTP client and file selection policy
// =============================================================================

mod fetch;
mod id;
mod model;

pub use fetch::{
    failure_for_status, fetch_public_gist, select_file, FetchError, GistClient, GITHUB_API_BASE,
};
pub use id::{extract_gist_id, is_valid_gist_id, GistId, InvalidGistRef};
pub use model::{GistErrorKind, GistFetchResult, GistFile, GistResponse};
