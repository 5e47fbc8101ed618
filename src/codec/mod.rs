// src/codec/mod.rs
// =============================================================================
// This module turns text into compact, URL-safe share tokens and back.
//
// Submodules:
// - compress: deflate + base64url encoding, share link helpers
// - error: CodecError
// =============================================================================

mod compress;
mod error;

pub use compress::{decode, decode_data, encode, encode_data, share_url, token_from_input};
pub use error::CodecError;
