//! Check report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::finding::Finding;

/// Per-document outcome, in processing order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct DocumentStatus {
    /// Document path.
    pub path: PathBuf,
    /// Number of findings recorded for this document (0 means it passed).
    pub findings: usize,
}

/// Result of a documentation check run.
///
/// CI pipelines check `ok`: it is `true` only when the aggregate finding
/// list is empty — read failures count as findings, so a partially scanned
/// tree never reports success.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct CheckReport {
    /// Number of documents successfully read and checked.
    pub scanned_files: usize,
    /// Number of documents that could not be read.
    pub failed_files: usize,
    /// Whether the whole tree passed (no findings of any kind).
    pub ok: bool,
    /// Per-document status lines, in processing order.
    pub documents: Vec<DocumentStatus>,
    /// All findings across the tree, in deterministic document-then-check order.
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// Total number of documents attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Number of findings recorded across the tree.
    #[must_use]
    pub fn findings_count(&self) -> usize {
        self.findings.len()
    }
}
