//! Per-document consistency checks.
//!
//! Each sub-module handles one rule family:
//! - `links` — dead cross-reference links (with extension fallback)
//! - `images` — missing image targets (no fallback)
//! - `fences` — unterminated fenced code blocks
//! - `metadata` — malformed or title-less metadata blocks
//! - `headings` — heading level skips
//!
//! Checks are read-only over a [`Document`] and share no state, so the order
//! in [`run_checks`] exists only to keep finding output deterministic.

pub mod fences;
pub mod headings;
pub mod images;
pub mod links;
pub mod metadata;

use std::path::{Path, PathBuf};

use crate::config::CheckConfig;
use crate::finding::Finding;

/// A documentation page loaded into memory, immutable once read.
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute path of the document.
    pub path: PathBuf,
    /// Directory containing the document; references resolve against this.
    pub dir: PathBuf,
    /// Raw UTF-8 content.
    pub content: String,
}

impl Document {
    /// Build a document from its absolute path and content.
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Self {
        let dir = path
            .parent()
            .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);
        Self { path, dir, content }
    }
}

/// Run all checks against one document in fixed order and collect findings.
#[must_use]
pub fn run_checks(doc: &Document, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    findings.extend(links::check_links(doc, config));
    findings.extend(images::check_images(doc));
    findings.extend(fences::check_fences(doc));
    findings.extend(metadata::check_metadata(doc, config));
    findings.extend(headings::check_headings(doc));
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_dir_is_parent() {
        let doc = Document::new(PathBuf::from("/repo/docs/a.md"), String::new());
        assert_eq!(doc.dir, PathBuf::from("/repo/docs"));
    }

    #[test]
    fn test_run_checks_clean_document() {
        let doc = Document::new(
            PathBuf::from("/repo/docs/a.md"),
            "# Title\n\nJust prose, no references.\n".to_owned(),
        );
        let findings = run_checks(&doc, &CheckConfig::default());
        assert!(findings.is_empty(), "unexpected findings: {findings:?}");
    }

    #[test]
    fn test_run_checks_order_is_deterministic() {
        // One broken link and one unclosed fence: link findings come first.
        let doc = Document::new(
            PathBuf::from("/nonexistent-root/docs/a.md"),
            "[gone](missing)\n```\n".to_owned(),
        );
        let findings = run_checks(&doc, &CheckConfig::default());
        assert_eq!(findings.len(), 2);
        assert!(matches!(findings[0], Finding::BrokenLink { .. }));
        assert!(matches!(findings[1], Finding::UnclosedCodeBlock { .. }));
    }
}
