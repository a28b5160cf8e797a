//! Text truncation
//!
//! Lengths are counted in characters, not bytes. The omission is part of
//! the budget: a cut result is exactly `max_len` characters long.

/// Default omission appended to cut text
pub const DEFAULT_OMISSION: &str = "...";

/// Truncate `text` to at most `max_len` characters, ending with `omission` when cut
pub fn truncate(text: &str, max_len: usize, omission: &str) -> String {
    let len = text.chars().count();
    if len <= max_len {
        return text.to_string();
    }

    let omission_len = omission.chars().count();
    if omission_len >= max_len {
        return omission.chars().take(max_len).collect();
    }

    let mut out: String = text.chars().take(max_len - omission_len).collect();
    out.push_str(omission);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate("hello", 10, "..."), "hello");
        assert_eq!(truncate("hello", 5, "..."), "hello");
    }

    #[test]
    fn test_cut_includes_omission() {
        let text = "x".repeat(300);
        let cut = truncate(&text, 60, DEFAULT_OMISSION);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..57], &text[..57]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let cut = truncate(&text, 6, "...");
        assert_eq!(cut, "ééé...");
    }

    #[test]
    fn test_tiny_limit() {
        assert_eq!(truncate("abcdef", 2, "..."), "..");
        assert_eq!(truncate("abcdef", 0, "..."), "");
    }
}
