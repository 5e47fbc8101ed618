// src/codec/error.rs
// =============================================================================
// Error type for share token encoding and decoding.
// =============================================================================

use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("compression failed: {0}")]
    Compress(#[source] std::io::Error),

    #[error("token is not valid URL-safe base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("token is not a valid deflate stream: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("decoded data is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("decoded data exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("invalid share URL: {0}")]
    Url(#[from] url::ParseError),
}
