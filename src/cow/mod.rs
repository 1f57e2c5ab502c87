// cow/mod.rs - bubble + figure rendering
pub mod bubble;
pub mod figure;
pub mod types;

pub use bubble::generate_bubble;
pub use figure::generate_figure;
pub use types::CowsayError;

use crate::text_utils::char_len;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1C-\x1F]").unwrap());

/// Width of the `< ` / ` >` delimiters around each content line.
const FRAME_WIDTH: usize = 4;

/// Render `text` as a speech bubble with the cow underneath.
///
/// Fails with [`CowsayError::EmptyInput`] when `text` has nothing but whitespace.
pub fn render(text: &str) -> Result<Vec<String>, CowsayError> {
    if WHITESPACE_RE.replace_all(text, "").is_empty() {
        tracing::debug!("Rejecting whitespace-only input ({} bytes)", text.len());
        return Err(CowsayError::EmptyInput);
    }
    let mut output = generate_bubble(text)?;
    let content_width = output
        .iter()
        .map(|line| char_len(line))
        .max()
        .unwrap_or(FRAME_WIDTH)
        .saturating_sub(FRAME_WIDTH);
    tracing::debug!(
        bubble_lines = output.len(),
        content_width,
        "Rendered bubble"
    );
    output.extend(generate_figure(content_width));
    Ok(output)
}
