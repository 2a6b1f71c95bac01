//! Body decoding: base64 unwrapping plus `Content-Encoding`-aware
//! decompression, mirroring `original_source/backend/parsers/utils.py`.

use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Decode an HTTP message body to a UTF-8 string.
///
/// `content_encoding` is matched case-insensitively against `gzip`,
/// `deflate`, and `br`/`brotli`; anything else is treated as identity.
/// Decoding errors never abort the caller: invalid UTF-8 is replaced, and
/// decompression failures fall back to the raw (possibly base64-decoded)
/// bytes interpreted as UTF-8 lossily.
#[must_use]
pub fn decode_body(text: &str, content_encoding: Option<&str>, is_base64: bool) -> String {
    let raw: Vec<u8> =
        if is_base64 { BASE64.decode(text).unwrap_or_else(|_| text.as_bytes().to_vec()) } else { text.as_bytes().to_vec() };

    let encoding = content_encoding.unwrap_or_default().to_ascii_lowercase();
    let decompressed = match encoding.as_str() {
        "gzip" => decompress_gzip(&raw),
        "deflate" => decompress_deflate(&raw),
        "br" | "brotli" => decompress_brotli(&raw),
        _ => Some(raw.clone()),
    };

    String::from_utf8_lossy(&decompressed.unwrap_or(raw)).into_owned()
}

fn decompress_gzip(data: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    flate2::read::GzDecoder::new(data).read_to_end(&mut out).ok()?;
    Some(out)
}

fn decompress_deflate(data: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    flate2::read::ZlibDecoder::new(data).read_to_end(&mut out).ok()?;
    Some(out)
}

fn decompress_brotli(data: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    brotli::Decompressor::new(data, 4096).read_to_end(&mut out).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn identity_encoding_passes_through() {
        assert_eq!(decode_body("hello", None, false), "hello");
    }

    #[test]
    fn base64_is_unwrapped_before_decompression() {
        let encoded = base64::engine::general_purpose::STANDARD.encode("hello");
        assert_eq!(decode_body(&encoded, None, true), "hello");
    }

    #[test]
    fn gzip_bodies_are_decompressed() {
        let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"compressed payload").unwrap();
        let compressed = encoder.finish().unwrap();
        let text = String::from_utf8_lossy(&compressed).into_owned();
        // gzip output isn't valid UTF-8 in general; round-trip through bytes
        // via base64 instead, as real captures do for binary bodies.
        let encoded = base64::engine::general_purpose::STANDARD.encode(&compressed);
        assert_eq!(decode_body(&encoded, Some("gzip"), true), "compressed payload");
        let _ = text;
    }

    #[test]
    fn unknown_encoding_falls_back_to_identity() {
        assert_eq!(decode_body("plain", Some("x-unknown"), false), "plain");
    }
}
