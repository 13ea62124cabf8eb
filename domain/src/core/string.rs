//! String helpers for list previews.

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut.
///
/// Counts characters rather than bytes so tooltips with accented or CJK
/// text are shortened to the same visual width as ASCII ones.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let end = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
    format!("{}...", &s[..end])
}

/// Collapse line breaks so a multi-line tooltip fits on one row.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Rüstung", 7), "Rüstung");
        assert_eq!(truncate("Rüstung der Macht", 7), "Rüst...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("Deal 5 damage.\nHaste  1 item."), "Deal 5 damage. Haste 1 item.");
    }
}
