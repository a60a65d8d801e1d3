//! URL validation.
//!
//! A candidate link target is accepted only when it parses as an absolute
//! URL with an `http` or `https` scheme. This is a security boundary: it
//! keeps `javascript:` and `data:` schemes out of user-entered links, and it
//! is applied again at navigation time even for stored values.

use url::Url;

/// Whether `candidate` is an absolute http(s) URL.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
