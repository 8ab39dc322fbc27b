// src/core/sanitize.rs
use crate::config::consts::NOT_AVAILABLE;

/// Collapse runs of whitespace (incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Cell text, or the "Not Available" placeholder when the cell is empty.
pub fn cell_or_placeholder(text: &str) -> String {
    let t = normalize_ws(text);
    if t.is_empty() { s!(NOT_AVAILABLE) } else { t }
}

/// Heading text with the fixed page-title suffix removed.
/// "Ohio Public Libraries" -> "Ohio". Text without the suffix is returned as-is.
pub fn strip_heading_suffix(heading: &str, suffix: &str) -> String {
    let h = normalize_ws(heading);
    if suffix.is_empty() {
        return h;
    }
    h.replace(suffix, "").trim().to_string()
}
