//! Text utilities for TUI rendering.
//!
//! Character names and class labels are mostly Hangul, which is two columns
//! wide, so all width math goes through `unicode_width`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
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
    truncated.push('…');
    truncated
}

/// Pads `text` with spaces on the right up to `width` columns, truncating if longer.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_with_ellipsis(text, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_with_ellipsis_very_short() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_hangul() {
        // Each syllable is two columns wide.
        assert_eq!(truncate_with_ellipsis("홀리나이트", 10), "홀리나이트");
        assert_eq!(truncate_with_ellipsis("홀리나이트", 7), "홀리나…");
        assert_eq!(truncate_with_ellipsis("홀리나이트", 6), "홀리…");
    }

    #[test]
    fn test_fit_to_width_pads_and_truncates() {
        assert_eq!(fit_to_width("바드", 6), "바드  ");
        assert_eq!(fit_to_width("abcdef", 4), "abc…");
        assert_eq!(fit_to_width("", 2), "  ");
    }
}
