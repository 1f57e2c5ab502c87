// src/text_utils.rs
// Utility functions for text formatting

/// Widest line a bubble will hold before it starts chunking.
pub const MAX_WIDTH: usize = 49;

/// Whitespace for trimming purposes: Unicode whitespace plus the ASCII
/// file/group/record/unit separators (U+001C..=U+001F).
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Number of characters in `text` (not bytes).
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Right-pad a string with spaces up to `width` characters.
pub fn pad_right(text: &str, width: usize) -> String {
    let line_width = char_len(text);
    let pad = width.saturating_sub(line_width);
    let mut content = String::with_capacity(text.len() + pad);
    content.push_str(text);
    for _ in 0..pad { content.push(' '); }
    content
}

/// Hard-wrap lines at `max_width` characters, ignoring word boundaries.
///
/// Lines that fit pass through untouched; longer ones become consecutive
/// chunks of exactly `max_width` characters (the last may be shorter).
/// A `max_width` of zero disables wrapping.
pub fn wrap_lines<S: AsRef<str>>(lines: &[S], max_width: usize) -> Vec<String> {
    let mut wrapped = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        if max_width == 0 || char_len(line) <= max_width {
            wrapped.push(line.to_string());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        for chunk in chars.chunks(max_width) {
            wrapped.push(chunk.iter().collect());
        }
    }
    wrapped
}
