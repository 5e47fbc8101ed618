// src/gist/model.rs
// =============================================================================
// Data types for the Gist API response and the result of a fetch.
//
// Only the fields we actually read are declared. serde ignores the rest of
// the (fairly large) gist JSON document.
// =============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One file inside a gist, as returned by GET /gists/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct GistFile {
    pub filename: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub raw_url: String,
    #[serde(default)]
    pub size: u64,
    /// GitHub cuts inline content off at about 1 MB and sets this flag
    #[serde(default)]
    pub truncated: bool,
}

/// The subset of the gist document we care about
///
/// `files` stays a JSON map here so its key order survives parsing
/// (serde_json is built with `preserve_order`).
#[derive(Debug, Clone, Deserialize)]
pub struct GistResponse {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub files: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl GistResponse {
    /// Files in the order the API listed them
    pub fn files(&self) -> Result<Vec<GistFile>, serde_json::Error> {
        self.files
            .values()
            .map(|value| GistFile::deserialize(value))
            .collect()
    }
}

/// Why a gist could not be loaded
///
/// The Display text is the message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GistErrorKind {
    #[error("Gist does not exist or is private")]
    NotFoundOrPrivate,
    #[error("API rate limit exceeded, retry later")]
    RateLimited,
    #[error("Load failed ({0})")]
    HttpError(u16),
    #[error("Gist has no files")]
    EmptyGist,
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Network error, check your connection")]
    NetworkError,
}

/// Outcome of fetching a gist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GistFetchResult {
    Success {
        content: String,
        filename: String,
        /// The ID as reported by the API, not necessarily the input string
        gist_id: String,
    },
    Failure {
        kind: GistErrorKind,
        message: String,
    },
}

impl GistFetchResult {
    pub fn failure(kind: GistErrorKind) -> Self {
        let message = kind.to_string();
        GistFetchResult::Failure { kind, message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GistFetchResult::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_matches_kind() {
        let result = GistFetchResult::failure(GistErrorKind::HttpError(502));
        assert_eq!(
            result,
            GistFetchResult::Failure {
                kind: GistErrorKind::HttpError(502),
                message: "Load failed (502)".to_string(),
            }
        );
        assert!(!result.is_success());
    }

    #[test]
    fn test_files_keep_api_order() {
        let body = r#"{
            "id": "abc",
            "files": {
                "z.txt": {"filename": "z.txt", "content": "z", "language": "Text", "raw_url": "u1", "size": 1},
                "a.md":  {"filename": "a.md",  "content": "a", "language": null,   "raw_url": "u2", "size": 1}
            }
        }"#;
        let gist: GistResponse = serde_json::from_str(body).unwrap();
        let names: Vec<_> = gist.files().unwrap().into_iter().map(|f| f.filename).collect();
        assert_eq!(names, vec!["z.txt", "a.md"]);
    }

    #[test]
    fn test_file_entry_with_only_name_and_content() {
        let body = r#"{"id": "abc", "files": {"a.md": {"filename": "a.md", "content": "c"}}}"#;
        let gist: GistResponse = serde_json::from_str(body).unwrap();
        let files = gist.files().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content, "c");
        assert_eq!(files[0].raw_url, "");
        assert_eq!(files[0].language, None);
        assert!(!files[0].truncated);
    }

    #[test]
    fn test_result_serializes_with_status_tag() {
        let json = serde_json::to_value(GistFetchResult::failure(GistErrorKind::RateLimited)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "rate_limited");
        assert_eq!(json["message"], "API rate limit exceeded, retry later");
    }
}
