//! Shared utility functions.

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview for log fields: newlines collapsed, cut to
/// `max_bytes`, with `...` appended when something was dropped.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    let cut = truncate_str(&flat, max_bytes);
    if cut.len() < flat.len() {
        format!("{}...", cut)
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("the fool", 3), "the");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        // Each Hangul syllable is 3 bytes.
        let s = "타로카드";
        assert_eq!(truncate_str(s, 4), "타");
        assert_eq!(truncate_str(s, 6), "타로");
        assert_eq!(truncate_str(s, 12), s);
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(log_preview("will\n  it   rain", 100), "will it rain");
    }

    #[test]
    fn preview_marks_truncation() {
        assert_eq!(log_preview("abcdefgh", 4), "abcd...");
        assert_eq!(log_preview("abcd", 4), "abcd");
    }
}
