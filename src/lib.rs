// src/lib.rs
// =============================================================================
// Library side of gist-share.
//
// Two independent, stateless pieces:
// - gist:  resolve a gist reference and load one of its files
// - codec: compress text into a URL-safe token and back
//
// The binary (src/main.rs) is a thin CLI over these two modules.
// =============================================================================

pub mod codec;
pub mod gist;
