//! # docs-validator
//!
//! Static consistency checker for markdown documentation trees.
//!
//! Checks every document under a root directory for dead cross-reference
//! links, missing images, unterminated fenced code blocks, malformed
//! metadata blocks, and heading level skips. It is a linter, not a
//! renderer: markup is only scanned far enough to locate links, images,
//! fences, metadata delimiters, and headings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use docs_validator::{check_docs, CheckConfig, FsSourceConfig};
//!
//! let mut source = FsSourceConfig::default();
//! source.root = PathBuf::from("docs");
//! source.exclude = vec!["drafts/*".to_owned()];
//!
//! let report = check_docs(&source, &CheckConfig::default()).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Findings: {}", report.findings_count());
//! println!("OK: {}", report.ok);
//! ```

mod check;
mod config;
mod extract;
mod finding;
pub mod output;
mod report;
mod resolve;
mod scanner;

pub use check::Document;
pub use config::{CheckConfig, FsSourceConfig};
pub use finding::Finding;
pub use report::{CheckReport, DocumentStatus};

use scanner::{ReadResult, find_documents, read_document_bounded};

/// Check all documentation files under the configured root.
///
/// This is the primary public API. Documents are read once each and run
/// through all checks in a fixed order (links, images, fences, metadata,
/// headings); a file that cannot be read is recorded as a
/// [`Finding::DocumentReadError`] and the run continues with the next
/// document. The report is deterministic for a fixed tree snapshot.
///
/// # Errors
///
/// Returns an error if the configured root does not exist or cannot be
/// canonicalized. Per-document failures never abort the run — they are
/// reported as findings.
pub fn check_docs(
    source: &FsSourceConfig,
    checks: &CheckConfig,
) -> anyhow::Result<CheckReport> {
    if !source.root.exists() {
        anyhow::bail!("Documentation root does not exist: {}", source.root.display());
    }
    // Canonicalize once so every document (and thus every resolved
    // reference) carries an absolute path.
    let root = source.root.canonicalize().map_err(|e| {
        anyhow::anyhow!(
            "Failed to canonicalize documentation root {}: {e}",
            source.root.display()
        )
    })?;

    let (files, discovery_findings) = find_documents(&root, source, &checks.doc_extension);

    let mut findings = discovery_findings;
    // Discovery-stage failures (walk errors, bad exclude patterns) count as
    // failed files upfront.
    let mut failed_files = findings.len();
    let mut scanned_files: usize = 0;
    let mut documents = Vec::with_capacity(files.len());

    for file_path in files {
        let content = match read_document_bounded(&file_path, source.max_file_size) {
            ReadResult::Ok(c) => c,
            ReadResult::Err(finding) => {
                documents.push(DocumentStatus {
                    path: file_path,
                    findings: 1,
                });
                findings.push(finding);
                failed_files += 1;
                continue;
            }
        };

        let document = Document::new(file_path, content);
        let document_findings = check::run_checks(&document, checks);
        scanned_files += 1;
        documents.push(DocumentStatus {
            path: document.path,
            findings: document_findings.len(),
        });
        findings.extend(document_findings);
    }

    let ok = findings.is_empty();
    Ok(CheckReport {
        scanned_files,
        failed_files,
        ok,
        documents,
        findings,
    })
}
