//! Column-aware string helpers for fitting labels into fixed-width cells.
//!
//! Everything here slices on char boundaries, so multi-byte and double-width
//! glyphs never panic or get split.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Slice of `s` covering display columns `[start_cols, start_cols + width_cols)`.
/// A wide glyph that would straddle the end is left out.
pub fn window_by_columns(s: &str, start_cols: usize, width_cols: usize) -> &str {
    if width_cols == 0 || s.is_empty() {
        return "";
    }

    let mut col = 0usize;
    let mut start_byte = None;
    let mut end_byte = s.len();
    let target_end = start_cols.saturating_add(width_cols);

    for (idx, ch) in s.char_indices() {
        let next_col = col.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0).max(1));
        if start_byte.is_none() && col <= start_cols && start_cols < next_col {
            start_byte = Some(idx);
        }
        if start_byte.is_some() && next_col > target_end {
            end_byte = idx;
            break;
        }
        col = next_col;
    }

    match start_byte {
        Some(start) if start <= end_byte => &s[start..end_byte],
        _ => "",
    }
}

/// Fit `s` into `width` columns, ending with `…` when something was cut.
pub fn fit_columns(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    format!("{}…", window_by_columns(s, 0, width - 1))
}

/// Show the tail of `s` that fits in `width` columns; used for the text
/// prompt so the cursor end stays visible.
pub fn tail_columns(s: &str, width: usize) -> &str {
    let total = display_width(s);
    if total <= width {
        return s;
    }
    let mut skip = total - width;
    for (idx, ch) in s.char_indices() {
        if skip == 0 {
            return &s[idx..];
        }
        skip = skip.saturating_sub(UnicodeWidthChar::width(ch).unwrap_or(0).max(1));
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_counts_columns_not_chars() {
        assert_eq!(window_by_columns("abcdef", 0, 3), "abc");
        assert_eq!(window_by_columns("abcdef", 2, 3), "cde");
        assert_eq!(window_by_columns("abcdef", 10, 5), "");
        assert_eq!(window_by_columns("你好世界", 0, 4), "你好");
        assert_eq!(window_by_columns("你好世界", 0, 3), "你");
    }

    #[test]
    fn fit_adds_ellipsis_only_when_cut() {
        assert_eq!(fit_columns("Weather", 10), "Weather");
        assert_eq!(fit_columns("Luz de día", 6), "Luz d…");
        assert_eq!(fit_columns("Calculator", 1), "…");
        assert_eq!(fit_columns("Calculator", 0), "");
    }

    #[test]
    fn tail_keeps_the_end_visible() {
        assert_eq!(tail_columns("https://example.com/a.jpg", 5), "a.jpg");
        assert_eq!(tail_columns("short", 10), "short");
        assert_eq!(tail_columns("日本語", 4), "本語");
    }
}
