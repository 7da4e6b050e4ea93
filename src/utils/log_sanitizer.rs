//! Log sanitization utilities
//!
//! Keeps credentials (access tokens, refresh tokens, partner keys) and
//! oversized response bodies from being fully exposed in debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Leading token characters left visible by [`mask_token`].
const MASK_PREFIX: usize = 6;
/// Trailing token characters left visible by [`mask_token`].
const MASK_SUFFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a response body for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` characters with a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask an access token for logging.
///
/// Long tokens keep a short prefix and suffix so two tokens can be told apart
/// in a trace; short tokens are fully hidden.
pub fn mask_token(token: &str) -> String {
    if token.is_empty() {
        return "<empty>".to_string();
    }
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= MASK_PREFIX + MASK_SUFFIX {
        return "***".to_string();
    }
    let prefix: String = chars[..MASK_PREFIX].iter().collect();
    let suffix: String = chars[chars.len() - MASK_SUFFIX..].iter().collect();
    format!("{prefix}***{suffix}")
}
