//! Input sanitization applied to all user-typed text before it is
//! transmitted or rendered.

/// Maximum accepted input length, in characters, after escaping.
pub const MAX_INPUT_LEN: usize = 5000;

/// Escape HTML-special characters, truncate, then trim.
///
/// The order matters and is part of the contract: escaping first (escaped
/// entities count against the limit), truncation to [`MAX_INPUT_LEN`]
/// characters second, surrounding whitespace trimmed last.
#[must_use]
pub fn sanitize_input(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('/', "&#x2F;");
    let truncated: String = escaped.chars().take(MAX_INPUT_LEN).collect();
    truncated.trim().to_string()
}
