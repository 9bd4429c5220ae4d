//! Heading hierarchy checking.

use crate::check::Document;
use crate::extract;
use crate::finding::Finding;

/// Flag headings that skip more than one level deeper than their
/// predecessor. Equal levels and any decrease are always allowed; only a
/// forward jump of two or more levels is inconsistent.
#[must_use]
pub fn check_headings(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pair in extract::headings(&doc.content).windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.level > prev.level + 1 {
            findings.push(Finding::HeadingLevelSkip {
                file: doc.path.clone(),
                line: curr.line,
                previous_level: prev.level,
                level: curr.level,
            });
        }
    }

    findings
}
