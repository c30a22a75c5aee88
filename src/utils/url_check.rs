//! URL scheme validation.
//!
//! Only absolute HTTP/HTTPS URLs may be shortened. Rejects dangerous
//! protocols like `javascript:`, `data:`, `file:`, etc.

use url::Url;

/// Errors that can occur while checking a URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that the input parses as an absolute HTTP(S) URL.
///
/// # Errors
///
/// Returns [`UrlCheckError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlCheckError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn check_url(input: &str) -> Result<(), UrlCheckError> {
    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlCheckError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(check_url("http://example.com").is_ok());
        assert!(check_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(matches!(
            check_url("not-a-url"),
            Err(UrlCheckError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for input in ["ftp://example.com", "javascript:alert(1)", "file:///etc/passwd"] {
            assert!(matches!(
                check_url(input),
                Err(UrlCheckError::UnsupportedProtocol)
            ));
        }
    }
}
