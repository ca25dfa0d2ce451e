//! Small text helpers for line-based section rendering.
//!
//! Sections render to pre-measured lines so the page scroll geometry stays
//! exact; ratatui's own wrapping would change heights behind our back.

/// Greedy word wrap to `width` columns. Words longer than the width get a
/// line of their own and are left unbroken.
#[must_use]
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
