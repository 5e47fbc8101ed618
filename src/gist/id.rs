// src/gist/id.rs
// =============================================================================
// This module turns user input into a Gist ID.
//
// Accepted input:
//   - a bare ID:              aa5a315d61ae9438b18d6d1d4ab1d3e1
//   - a gist URL with a user: https://gist.github.com/alice/<id>
//   - a gist URL without one: https://gist.github.com/<id>
//
// Anything else resolves to None. Unrecognised input is not an error here,
// it just means "this is not a gist reference".
//
// Rust concepts:
// - Newtypes: GistId wraps a String so only validated IDs can exist
// - Option<T>: For "maybe there is an ID"
// - FromStr: Lets callers write "...".parse::<GistId>()
// =============================================================================

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Host that serves gist pages
const GIST_HOST: &str = "gist.github.com";

/// Gist IDs are always this many hex characters
const GIST_ID_LEN: usize = 32;

/// A validated 32-character lowercase hex gist ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GistId(String);

impl GistId {
    /// Builds a GistId only if `id` is already in canonical form
    pub fn parse(id: &str) -> Option<Self> {
        if is_valid_gist_id(id) {
            Some(GistId(id.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GistId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when a string is not a gist ID or gist URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a gist ID or gist URL: {0}")]
pub struct InvalidGistRef(pub String);

impl FromStr for GistId {
    type Err = InvalidGistRef;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_gist_id(s).ok_or_else(|| InvalidGistRef(s.to_string()))
    }
}

// Checks that `id` is exactly 32 characters of [a-f0-9]
//
// Uppercase hex is rejected on purpose: GitHub only hands out lowercase IDs.
pub fn is_valid_gist_id(id: &str) -> bool {
    id.len() == GIST_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

// Extracts a gist ID from a bare ID or a gist.github.com URL
//
// Parameters:
//   input: raw user input, surrounding whitespace is ignored
//
// Returns: Some(GistId) when the input names a gist, None otherwise
pub fn extract_gist_id(input: &str) -> Option<GistId> {
    let trimmed = input.trim();

    // A bare ID needs no URL parsing at all
    if let Some(id) = GistId::parse(trimmed) {
        return Some(id);
    }

    // Malformed URLs simply mean "not a gist reference"
    let url = Url::parse(trimmed).ok()?;

    if url.host_str() != Some(GIST_HOST) {
        return None;
    }

    // "/alice/<id>" and "/<id>" both end with the ID
    let last_segment = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()?;

    GistId::parse(last_segment)
}
