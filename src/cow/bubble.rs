//! Speech bubble framing around the wrapped text.
//!
//! Single-line text gets a closed bubble:
//!
//! ```text
//!  ________
//! < moo moo >
//!  --------
//! ```
//!
//! Anything longer gets open shoulders above and below the text.

use crate::cow::types::CowsayError;
use crate::text_utils::{MAX_WIDTH, char_len, is_space, pad_right, wrap_lines};

const TOP: char = '_';
const BOTTOM: char = '-';
const LEFT: &str = "< ";
const RIGHT: &str = " >";

/// Split on newlines, trim, drop blank lines and hard-wrap the rest.
pub fn content_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_matches(is_space))
        .filter(|line| !line.is_empty())
        .collect();
    wrap_lines(&lines, MAX_WIDTH)
}

/// Build the bubble lines for `text`.
pub fn generate_bubble(text: &str) -> Result<Vec<String>, CowsayError> {
    let lines = content_lines(text);
    let text_width = lines
        .iter()
        .map(|line| char_len(line))
        .max()
        .ok_or(CowsayError::EmptyInput)?;
    let multi = lines.len() > 1;

    let mut output = Vec::with_capacity(lines.len() + 4);
    output.push(format!(" {}", border(TOP, text_width)));
    if multi {
        output.push(format!(" /{}\\", " ".repeat(text_width)));
    }
    for line in &lines {
        output.push(format!("{LEFT}{}{RIGHT}", pad_right(line, text_width)));
    }
    if multi {
        output.push(format!(" \\{}/", " ".repeat(text_width)));
    }
    output.push(format!(" {}", border(BOTTOM, text_width)));
    Ok(output)
}

fn border(ch: char, text_width: usize) -> String {
    std::iter::repeat_n(ch, text_width + 2).collect()
}
