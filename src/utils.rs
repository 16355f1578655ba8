use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to fit in `max_width` terminal columns, ending it with
/// `...` when anything was cut. Width-aware so wide characters never get
/// split mid-glyph.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let text_width = max_width.saturating_sub(3);
    let mut used = 0;
    let mut truncated = String::new();
    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);
        if used + char_width > text_width {
            break;
        }
        used += char_width;
        truncated.push(c);
    }
    truncated.push_str("...");
    truncated
}
