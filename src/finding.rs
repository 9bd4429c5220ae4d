//! The finding taxonomy for documentation checks.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single consistency problem found in a documentation tree.
///
/// This is a closed tagged type: each variant carries only the fields
/// relevant to that kind, so machine-readable consumers never have to
/// reparse a freeform message. A non-empty finding list means the run
/// fails; every finding is local and recoverable, none aborts the scan.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind")]
#[non_exhaustive]
pub enum Finding {
    /// A local cross-reference link whose target does not exist, even after
    /// the documentation-extension fallback.
    BrokenLink {
        /// Document containing the link.
        file: PathBuf,
        /// Line number (1-indexed) where the link appears.
        line: usize,
        /// Display text of the link.
        text: String,
        /// Original target string as written in the document.
        target: String,
        /// Absolute path the target resolved to.
        resolved: PathBuf,
    },
    /// A local image reference whose target does not exist.
    MissingImage {
        /// Document containing the image reference.
        file: PathBuf,
        /// Line number (1-indexed) where the reference appears.
        line: usize,
        /// Alt text of the image.
        alt: String,
        /// Original path string as written in the document.
        target: String,
        /// Absolute path the target resolved to.
        resolved: PathBuf,
    },
    /// A fenced code block opened but never closed before end of document.
    UnclosedCodeBlock {
        /// Document containing the block.
        file: PathBuf,
        /// Line number (1-indexed) of the last unmatched opening fence.
        opened_at: usize,
    },
    /// A leading metadata block whose closing delimiter is missing.
    IncompleteMetadata {
        /// Document with the malformed metadata block.
        file: PathBuf,
    },
    /// A metadata block lacking the required `title:` field.
    MissingTitle {
        /// Document with the title-less metadata block.
        file: PathBuf,
    },
    /// A heading more than one level deeper than the preceding heading.
    HeadingLevelSkip {
        /// Document containing the heading.
        file: PathBuf,
        /// Line number (1-indexed) of the offending heading.
        line: usize,
        /// Level of the preceding heading.
        previous_level: usize,
        /// Level of the offending heading.
        level: usize,
    },
    /// The document could not be read (I/O failure, size limit, bad encoding).
    /// Recorded as a finding so the run continues with the next document.
    DocumentReadError {
        /// Document (or directory entry) that could not be read.
        file: PathBuf,
        /// Human-readable description of the failure.
        message: String,
    },
}

impl Finding {
    /// The document this finding originated from.
    #[must_use]
    pub fn file(&self) -> &Path {
        match self {
            Self::BrokenLink { file, .. }
            | Self::MissingImage { file, .. }
            | Self::UnclosedCodeBlock { file, .. }
            | Self::IncompleteMetadata { file }
            | Self::MissingTitle { file }
            | Self::HeadingLevelSkip { file, .. }
            | Self::DocumentReadError { file, .. } => file,
        }
    }

    /// Format the finding for human-readable output, one line per finding.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match self {
            Self::BrokenLink {
                file,
                line,
                text,
                target,
                resolved,
            } => format!(
                "Broken link in {}:{}: [{}]({}) -> {} not found",
                file.display(),
                line,
                text,
                target,
                resolved.display()
            ),
            Self::MissingImage {
                file,
                line,
                alt,
                target,
                resolved,
            } => format!(
                "Missing image in {}:{}: ![{}]({}) -> {} not found",
                file.display(),
                line,
                alt,
                target,
                resolved.display()
            ),
            Self::UnclosedCodeBlock { file, opened_at } => format!(
                "Unclosed code block in {}: started at line {}",
                file.display(),
                opened_at
            ),
            Self::IncompleteMetadata { file } => {
                format!("Incomplete metadata block in {}", file.display())
            }
            Self::MissingTitle { file } => {
                format!("Missing title in metadata block in {}", file.display())
            }
            Self::HeadingLevelSkip {
                file,
                line,
                previous_level,
                level,
            } => format!(
                "Heading level skip in {} at line {}: jumped from H{} to H{}",
                file.display(),
                line,
                previous_level,
                level
            ),
            Self::DocumentReadError { file, message } => {
                format!("Failed to read {}: {}", file.display(), message)
            }
        }
    }
}
