//! Deterministic short code generation.
//!
//! Codes are derived from the original URL by hashing, so the retry sequence
//! for a given URL (salt 0, 1, 2, ...) is fully reproducible. This enables
//! idempotent collision handling in the shortening service, in contrast to
//! random nonce schemes.

use sha2::{Digest, Sha256};

/// Base62 alphabet, uppercase before lowercase before digits.
const BASE62: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a short code for a URL.
///
/// The URL is concatenated with the salt (salt 0 contributes nothing, so
/// `salt = 0` hashes identically to "no salt"), hashed with SHA-256, and the
/// digest is interpreted as a single big-endian integer encoded in base62.
/// The first `length` characters of the encoding (its most significant
/// digits) form the code; the remainder is discarded.
///
/// The function is pure: identical inputs always yield identical output.
///
/// # Examples
///
/// ```
/// use linklet::utils::shortener::generate_short_code;
///
/// let code = generate_short_code("https://example.com/test", 0, 6);
/// assert_eq!(code.len(), 6);
/// assert_eq!(code, generate_short_code("https://example.com/test", 0, 6));
/// ```
pub fn generate_short_code(original_url: &str, salt: u32, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(original_url.as_bytes());
    if salt != 0 {
        hasher.update(salt.to_string().as_bytes());
    }

    let digest = hasher.finalize();

    let mut encoded = base62_encode(&digest);
    encoded.truncate(length);
    encoded
}

/// Encodes a big-endian byte string as base62.
///
/// Repeated division by 62 accumulates digits least-significant first; the
/// result is reversed so the most significant digit comes first. A 256-bit
/// digest yields 43 digits, so truncation to typical code lengths never
/// needs padding.
fn base62_encode(bytes: &[u8]) -> String {
    let mut num = bytes.to_vec();
    let mut digits = Vec::new();

    while num.iter().any(|&b| b != 0) {
        let mut rem: u32 = 0;
        for byte in num.iter_mut() {
            let cur = rem * 256 + u32::from(*byte);
            *byte = (cur / 62) as u8;
            rem = cur % 62;
        }
        digits.push(BASE62[rem as usize]);
    }

    if digits.is_empty() {
        digits.push(BASE62[0]);
    }

    digits.reverse();
    String::from_utf8(digits).expect("base62 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const TEST_URLS: &[&str] = &[
        "https://example.com/test",
        "https://example.com/test?query=value",
        "http://localhost:8000/some/deep/path",
        "https://x.test/a",
        "https://rust-lang.org",
    ];

    #[test]
    fn test_generate_is_deterministic() {
        for url in TEST_URLS {
            for salt in 0..5 {
                assert_eq!(
                    generate_short_code(url, salt, 6),
                    generate_short_code(url, salt, 6)
                );
            }
        }
    }

    #[test]
    fn test_generate_golden_vector() {
        // Pinned fixture guarding against drift in the hash/base62 routine.
        assert_eq!(generate_short_code("https://example.com/test", 0, 6), "k3EUVC");
    }

    #[test]
    fn test_salts_produce_distinct_codes() {
        for url in TEST_URLS {
            let codes: HashSet<String> =
                (0..5).map(|salt| generate_short_code(url, salt, 6)).collect();
            assert_eq!(codes.len(), 5, "salt collision for {}", url);
        }
    }

    #[test]
    fn test_code_length_matches_request() {
        assert_eq!(generate_short_code("https://example.com/test", 0, 6).len(), 6);
        assert_eq!(generate_short_code("https://example.com/test", 0, 10).len(), 10);
    }

    #[test]
    fn test_code_uses_base62_alphabet_only() {
        for url in TEST_URLS {
            let code = generate_short_code(url, 0, 10);
            assert!(code.bytes().all(|b| BASE62.contains(&b)), "bad char in {}", code);
        }
    }

    #[test]
    fn test_longer_code_extends_shorter_one() {
        // Truncation keeps the most significant digits, so a 6-char code is
        // a prefix of the 10-char code for the same input.
        let short = generate_short_code("https://example.com/test", 0, 6);
        let long = generate_short_code("https://example.com/test", 0, 10);
        assert!(long.starts_with(&short));
        assert_eq!(long, "k3EUVCVwuW");
    }

    #[test]
    fn test_zero_salt_equals_unsalted_input() {
        // Salt 0 must hash identically to hashing the bare URL.
        let mut hasher = sha2::Sha256::new();
        sha2::Digest::update(&mut hasher, b"https://example.com/test");
        let digest = sha2::Digest::finalize(hasher);
        let mut unsalted = base62_encode(&digest);
        unsalted.truncate(6);

        assert_eq!(generate_short_code("https://example.com/test", 0, 6), unsalted);
    }

    #[test]
    fn test_base62_encode_zero() {
        assert_eq!(base62_encode(&[0, 0, 0]), "A");
    }

    #[test]
    fn test_base62_encode_small_values() {
        assert_eq!(base62_encode(&[61]), "9");
        assert_eq!(base62_encode(&[62]), "BA");
    }
}
