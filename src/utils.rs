use unicode_width::UnicodeWidthChar;

/// Truncate to at most `max_width` display columns, appending "..." when
/// anything was cut. Width-aware so wide characters never overflow a column
/// budget.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let char_width = ch.width().unwrap_or(1);
        if used + char_width > budget {
            break;
        }
        out.push(ch);
        used += char_width;
    }
    format!("{}...", out)
}
