//! Credential field cleaning.
//!
//! Keys pasted from vendor consoles routinely arrive wrapped in quotes or
//! carrying zero-width characters picked up from rich-text clipboards. A
//! single invisible byte in a secret key produces a valid-looking HMAC that
//! the vendor rejects, which is close to undebuggable from the 401 alone,
//! so every credential field is cleaned on the way in.

/// Characters stripped from anywhere inside a credential field.
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Clean a single credential field.
///
/// Strips surrounding whitespace, removes zero-width characters anywhere in
/// the value, and removes quote characters (`"`, `'`, `` ` ``).
pub fn clean_credential_field(value: &str) -> String {
    value
        .chars()
        .filter(|c| !ZERO_WIDTH.contains(c) && !matches!(c, '"' | '\'' | '`'))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_unchanged() {
        assert_eq!(clean_credential_field("abc123"), "abc123");
    }

    #[test]
    fn surrounding_whitespace_stripped() {
        assert_eq!(clean_credential_field("  abc123\t\n"), "abc123");
    }

    #[test]
    fn zero_width_characters_removed() {
        assert_eq!(
            clean_credential_field("\u{FEFF}ab\u{200B}c\u{200C}12\u{200D}3"),
            "abc123"
        );
    }

    #[test]
    fn quotes_removed() {
        assert_eq!(clean_credential_field("\"abc123\""), "abc123");
        assert_eq!(clean_credential_field("'abc123'"), "abc123");
        assert_eq!(clean_credential_field("`abc123`"), "abc123");
    }

    #[test]
    fn inner_whitespace_preserved() {
        // Only the edges are trimmed; vendors never put spaces in keys but
        // cleaning should not silently rewrite the middle of a value.
        assert_eq!(clean_credential_field(" a b "), "a b");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(clean_credential_field("  \u{200B} "), "");
    }
}
