//! PEM armor helpers for public key text.
//!
//! Keys travel armored in text form but raw on the wire. These are pure
//! string transforms; the key material itself is opaque to this crate.

/// Opening marker of an armored public key.
pub const BEGIN_PUBLIC_KEY: &str = "-----BEGIN PUBLIC KEY-----";

/// Closing marker of an armored public key.
pub const END_PUBLIC_KEY: &str = "-----END PUBLIC KEY-----";

/// Armored base64 body is wrapped at 64 characters per line.
const LINE_WIDTH: usize = 64;

/// Strip PEM armor and line breaks, leaving the bare base64 key body.
pub fn strip_armor(pem: &str) -> String {
    pem.replace(BEGIN_PUBLIC_KEY, "")
        .replace(END_PUBLIC_KEY, "")
        .replace(['\n', '\r'], "")
}

/// Armor a bare base64 key body into PEM text.
///
/// Output: BEGIN marker, body wrapped at 64 characters, END marker, each
/// line separated by `\n`, with a trailing newline.
pub fn armor(key_b64: &str) -> String {
    let mut out = String::with_capacity(key_b64.len() + 64);
    out.push_str(BEGIN_PUBLIC_KEY);
    out.push('\n');
    let bytes = key_b64.as_bytes();
    for chunk in bytes.chunks(LINE_WIDTH) {
        // key_b64 is ASCII base64, so chunking bytes never splits a char
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        out.push('\n');
    }
    out.push_str(END_PUBLIC_KEY);
    out.push('\n');
    out
}

/// Armor raw key bytes into PEM text.
pub fn armor_bytes(raw: &[u8]) -> String {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    armor(&BASE64.encode(raw))
}
