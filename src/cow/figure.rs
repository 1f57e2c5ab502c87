//! The cow drawn underneath the bubble.

/// Fixed drawing. Blank lines are dropped when rendering.
pub const COW: &str = r"
\   ^__^
 \  (oo)\_______
    (__)\       )\/\
        ||----w |
        ||     ||
";

/// Smallest indent the figure ever gets, so the tail still reaches the bubble.
const MIN_INDENT: usize = 2;

/// Indent each line of [`COW`] by half the bubble's content width.
pub fn generate_figure(content_width: usize) -> Vec<String> {
    let indent = " ".repeat((content_width / 2).max(MIN_INDENT));
    COW.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| format!("{indent}{line}"))
        .collect()
}
