//! Log sanitization utilities
//!
//! Keeps response bodies and session cookies out of debug logs in full.

/// Maximum number of bytes of a body echoed into the log.
const BODY_LOG_LIMIT: usize = 256;

/// Number of leading characters of a secret that stay visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|i| s.is_char_boundary(*i)).unwrap_or(0)
}

/// Shorten a response body for logging.
///
/// Bodies within the limit are returned unchanged, longer ones are cut on a
/// char boundary and suffixed with the original byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= BODY_LOG_LIMIT {
        return s.to_string();
    }
    format!(
        "{}... [truncated, total {} bytes]",
        &s[..floor_char_boundary(s, BODY_LOG_LIMIT)],
        s.len()
    )
}

/// Mask a secret (session cookie, token) leaving only a short prefix.
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    if visible.len() == secret.len() {
        return "*".repeat(secret.chars().count());
    }
    format!("{visible}***")
}
