use std::sync::LazyLock;

use regex::Regex;

static PAGE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,4}$").unwrap());

/// Detects ALL-CAPS running headers like "AUTOMOBILE" or "SWASTIKA": among
/// alphabetic characters only, at least 90% uppercase, and a stripped
/// length of 2..=50. Blocks with no alphabetic characters never qualify.
pub fn is_running_header(text: &str) -> bool {
    let stripped = text.trim().trim_end_matches('.');
    let len = stripped.chars().count();
    if !(2..=50).contains(&len) {
        return false;
    }

    let alpha: Vec<char> = stripped.chars().filter(|c| c.is_alphabetic()).collect();
    if alpha.is_empty() {
        return false;
    }
    let upper = alpha.iter().filter(|c| c.is_uppercase()).count();
    upper as f32 / alpha.len() as f32 >= 0.9
}

/// Detects standalone page numbers like "311" or "59".
pub fn is_page_number(text: &str) -> bool {
    PAGE_NUMBER_RE.is_match(text.trim())
}
