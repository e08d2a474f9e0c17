//! Paragraph Utilities
//!
//! Descriptions separate paragraphs with a blank line.

pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split text into paragraph blocks, preserving order.
/// Text without a separator yields a single block.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR).collect()
}

/// Whether a visual separator follows the block at `index`
pub fn has_separator_after(index: usize, count: usize) -> bool {
    index + 1 < count
}
