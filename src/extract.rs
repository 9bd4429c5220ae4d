//! Reference and heading extraction.
//!
//! A small tokenizer over document text producing typed values for the
//! checks to consume, so each check stays independently testable instead of
//! carrying its own inline pattern matching.

use std::sync::LazyLock;

use regex::Regex;

/// Matches both link and image forms: an optional leading `!`, bracketed
/// text, and a parenthesized target. The capture groups are (bang, text,
/// target). Only this literal bracket/parenthesis form is recognized — no
/// full markup parsing.
static REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(!?)\[([^\]]*)\]\(([^)]+)\)") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid reference regex: {err}"),
    }
});

/// A cross-reference link or image reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Display text (links) or alt text (images).
    pub text: String,
    /// Target string as written, including any anchor fragment.
    pub target: String,
    /// Line number (1-indexed) the reference appears on.
    pub line: usize,
}

/// A heading found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Line number (1-indexed).
    pub line: usize,
    /// Nesting level: count of leading `#` characters in the first token.
    pub level: usize,
    /// The full heading line.
    pub text: String,
}

/// Extract all cross-reference links `[text](target)` in document order.
///
/// An image reference `![alt](path)` is classified as an image only and is
/// never also returned as a link. Links with empty display text are not
/// recognized.
#[must_use]
pub fn links(content: &str) -> Vec<Reference> {
    collect_references(content, false)
}

/// Extract all image references `![alt](path)` in document order.
#[must_use]
pub fn images(content: &str) -> Vec<Reference> {
    collect_references(content, true)
}

fn collect_references(content: &str, want_images: bool) -> Vec<Reference> {
    let mut refs = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        for caps in REFERENCE_PATTERN.captures_iter(line) {
            let is_image = !caps[1].is_empty();
            if is_image != want_images {
                continue;
            }
            let text = &caps[2];
            if !want_images && text.is_empty() {
                continue;
            }
            refs.push(Reference {
                text: text.to_owned(),
                target: caps[3].to_owned(),
                line: line_idx + 1,
            });
        }
    }
    refs
}

/// Extract every heading line (lines beginning with `#`) in document order.
///
/// The level is the count of consecutive `#` characters in the first
/// whitespace-delimited token, so `#Title` (no space) still counts as one
/// level-1 heading.
#[must_use]
pub fn headings(content: &str) -> Vec<HeadingRecord> {
    let mut records = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        if !line.starts_with('#') {
            continue;
        }
        let Some(first_token) = line.split_whitespace().next() else {
            continue;
        };
        let level = first_token.chars().take_while(|&c| c == '#').count();
        records.push(HeadingRecord {
            line: line_idx + 1,
            level,
            text: line.to_owned(),
        });
    }
    records
}
