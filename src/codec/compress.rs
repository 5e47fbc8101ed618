// src/codec/compress.rs
// =============================================================================
// This module packs text into a short token that can sit in a URL.
//
// Pipeline:
//   encode: UTF-8 bytes -> raw deflate -> base64 (URL-safe alphabet, no '=')
//   decode: the same steps backwards
//
// The token alphabet is [A-Za-z0-9_-], so it can go into a query value or a
// fragment without percent-escaping. Tokens carry no version tag.
//
// Two flavours of each operation:
// - encode / decode return Result<String, CodecError>
// - encode_data / decode_data log the error and return "" instead
//
// Rust concepts:
// - std::io::Read/Write: flate2 encoders are plain writers/readers
// - Read::take: Caps how much a decoder may produce
// =============================================================================

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use log::error;
use std::io::{Read, Write};
use url::Url;

use super::error::CodecError;

/// Upper bound on decoded output, a tiny token must not expand to gigabytes
pub const MAX_DECODED_BYTES: usize = 16 * 1024 * 1024;

// Compresses text into a URL-safe token
pub fn encode(text: &str) -> Result<String, CodecError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .map_err(CodecError::Compress)?;
    let compressed = encoder.finish().map_err(CodecError::Compress)?;

    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

// Turns a token back into the original text
//
// Surrounding whitespace is ignored (tokens are often pasted).
pub fn decode(token: &str) -> Result<String, CodecError> {
    let compressed = URL_SAFE_NO_PAD.decode(token.trim())?;

    // Read one byte past the limit so "exactly at the limit" still passes
    let mut decoder = DeflateDecoder::new(compressed.as_slice()).take(MAX_DECODED_BYTES as u64 + 1);
    let mut bytes = Vec::new();
    decoder
        .read_to_end(&mut bytes)
        .map_err(CodecError::Decompress)?;

    if bytes.len() > MAX_DECODED_BYTES {
        return Err(CodecError::TooLarge {
            limit: MAX_DECODED_BYTES,
        });
    }

    Ok(String::from_utf8(bytes)?)
}

// Like `encode`, but returns "" on failure
//
// Callers cannot tell failure from success by the value alone. Use `encode`
// when that matters.
pub fn encode_data(text: &str) -> String {
    encode(text).unwrap_or_else(|e| {
        error!("Encoding failed: {}", e);
        String::new()
    })
}

// Like `decode`, but returns "" on failure
//
// Note that a token made from empty text also decodes to "", so an empty
// result is ambiguous. `decode` tells the two apart.
pub fn decode_data(token: &str) -> String {
    decode(token).unwrap_or_else(|e| {
        error!("Decoding failed: {}", e);
        String::new()
    })
}

// Builds a share link by putting the token in the URL fragment
//
// Example:
//   share_url("https://app.example/view", "hi") -> "https://app.example/view#<token>"
pub fn share_url(base: &str, text: &str) -> Result<String, CodecError> {
    let mut url = Url::parse(base)?;
    url.set_fragment(Some(&encode(text)?));
    Ok(url.to_string())
}

// Pulls the token out of user input
//
// Accepts a bare token or a full share URL. For URLs the fragment is the
// token; a URL without a fragment has no token.
pub fn token_from_input(input: &str) -> Option<String> {
    let trimmed = input.trim();

    match Url::parse(trimmed) {
        Ok(url) => url.fragment().map(str::to_string),
        Err(_) => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let samples = [
            "hello",
            "# Title\n\nSome *markdown* with a [link](https://example.com?a=1&b=2).\n",
            "多語言 テキスト 😀 with emoji",
            "line1\r\nline2\ttabbed\0nul",
        ];
        for text in samples {
            assert_eq!(decode_data(&encode_data(text)), text);
        }
    }

    #[test]
    fn test_round_trip_large_repetitive_text() {
        let text = "the quick brown fox jumps over the lazy dog\n".repeat(2000);
        let token = encode(&text).unwrap();
        // Repetitive input should shrink a lot
        assert!(token.len() < text.len() / 10);
        assert_eq!(decode(&token).unwrap(), text);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = encode_data("a?b=c&d=e/f+g h#frag%20~");
        assert!(!token.is_empty());
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn test_empty_input_is_ambiguous_only_in_sentinel_api() {
        // Empty text still produces a real token
        let token = encode("").unwrap();
        assert!(!token.is_empty());
        assert_eq!(encode_data(""), token);

        // decode_data gives "" both for this token and for garbage...
        assert_eq!(decode_data(&token), "");
        assert_eq!(decode_data("not-a-valid-token!!!"), "");

        // ...while decode keeps them apart
        assert_eq!(decode(&token).unwrap(), "");
        assert!(decode("not-a-valid-token!!!").is_err());
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(matches!(decode("not-a-valid-token!!!"), Err(CodecError::Base64(_))));
        // Valid base64, but not a deflate stream
        let not_deflate = URL_SAFE_NO_PAD.encode([0xffu8; 16]);
        assert!(matches!(decode(&not_deflate), Err(CodecError::Decompress(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        let token = URL_SAFE_NO_PAD.encode(encoder.finish().unwrap());

        assert!(matches!(decode(&token), Err(CodecError::Utf8(_))));
        assert_eq!(decode_data(&token), "");
    }

    #[test]
    fn test_decompression_limit() {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&vec![b'a'; MAX_DECODED_BYTES + 1]).unwrap();
        let token = URL_SAFE_NO_PAD.encode(encoder.finish().unwrap());

        assert!(matches!(decode(&token), Err(CodecError::TooLarge { .. })));
    }

    #[test]
    fn test_share_url_and_back() {
        let link = share_url("https://app.example/view", "shared text").unwrap();
        assert!(link.starts_with("https://app.example/view#"));

        let token = token_from_input(&link).unwrap();
        assert_eq!(decode(&token).unwrap(), "shared text");
    }

    #[test]
    fn test_token_from_input() {
        assert_eq!(token_from_input("  abc_-9 \n"), Some("abc_-9".to_string()));
        assert_eq!(token_from_input("https://app.example/view"), None);
        assert_eq!(
            token_from_input("https://app.example/view#tok"),
            Some("tok".to_string())
        );
    }
}
