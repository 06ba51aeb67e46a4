//! Text utilities for TUI rendering and editing.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';
const MASK: char = '•';

/// Truncates a string with a trailing ellipsis if it exceeds `max_width`
/// terminal columns (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return ELLIPSIS.to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push(ELLIPSIS);
    truncated
}

/// Keeps the end of `text`, prefixing an ellipsis when it does not fit.
///
/// Used for input lines, where the cursor sits at the end of the value.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return ELLIPSIS.to_string();
    }
    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        tail.push(ch);
        width += ch_width;
    }
    std::iter::once(ELLIPSIS).chain(tail.into_iter().rev()).collect()
}

/// Replaces every character of a secret with a mask glyph.
pub fn mask_secret(value: &str) -> String {
    std::iter::repeat_n(MASK, value.chars().count()).collect()
}

/// Removes the last grapheme cluster. Returns false if `value` was empty.
pub fn pop_grapheme(value: &mut String) -> bool {
    match value.grapheme_indices(true).next_back() {
        Some((start, _)) => {
            value.truncate(start);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_cjk() {
        // "中文" = 4 columns
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start_with_ellipsis("abc", 5), "abc");
        assert_eq!(
            truncate_start_with_ellipsis("someone@example.com", 8),
            "…ple.com"
        );
        assert_eq!(truncate_start_with_ellipsis("abc", 1), "…");
    }

    #[test]
    fn test_mask_secret_counts_chars() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("pässwort"), "••••••••");
    }

    #[test]
    fn test_pop_grapheme() {
        let mut value = "cafe\u{301}".to_string();
        assert!(pop_grapheme(&mut value));
        assert_eq!(value, "caf");

        let mut empty = String::new();
        assert!(!pop_grapheme(&mut empty));
    }
}
