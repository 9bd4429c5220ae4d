//! Fenced code block termination checking.

use crate::check::Document;
use crate::finding::Finding;

/// Fence marker: three backticks at the start of a trimmed line.
const FENCE_MARKER: &str = "```";

/// Detect an unterminated fenced code block.
///
/// Every fence-marker line toggles state open/closed; an odd total count
/// means the document ends inside a block, and the finding cites the line
/// where that last block opened. Languages and nesting are deliberately
/// not distinguished — this is a strict toggle.
#[must_use]
pub fn check_fences(doc: &Document) -> Vec<Finding> {
    let mut fence_count: usize = 0;
    let mut in_block = false;
    let mut opened_at: usize = 0;

    for (line_idx, line) in doc.content.lines().enumerate() {
        if line.trim().starts_with(FENCE_MARKER) {
            fence_count += 1;
            if in_block {
                in_block = false;
            } else {
                in_block = true;
                opened_at = line_idx + 1;
            }
        }
    }

    if fence_count % 2 != 0 {
        return vec![Finding::UnclosedCodeBlock {
            file: doc.path.clone(),
            opened_at,
        }];
    }
    vec![]
}
