//! Internal helpers shared across the ops modules.
//!
//! These utilities are **not** part of the public API.

use unicode_normalization::UnicodeNormalization;

/// Normalize user-entered text for matching: NFC then lowercase.
///
/// Search input and stored descriptions both pass through here so that
/// composed and decomposed forms of the same text compare equal.
pub(crate) fn normalize_text(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_composition() {
        assert_eq!(normalize_text("Kopi SUSU"), "kopi susu");
        // "café" decomposed (e + combining acute) matches the composed form.
        assert_eq!(normalize_text("cafe\u{0301}"), normalize_text("caf\u{e9}"));
    }
}
