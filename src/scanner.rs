//! Documentation tree discovery and bounded document reading.
//!
//! Discovers every documentation file under a root directory and reads them
//! safely for the check pipeline:
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Maximum directory depth is enforced to prevent infinite recursion
//! - Bounded streaming reads enforce the size limit during the read itself
//! - Traversal and read failures become `DocumentReadError` findings, never
//!   an aborted run

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::FsSourceConfig;
use crate::finding::Finding;

/// Directories that never contain documentation pages.
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target"];

/// Result of attempting to read a document for checking.
pub enum ReadResult {
    /// Document was read successfully; contains the UTF-8 content.
    Ok(String),
    /// Document could not be read; contains the finding to record.
    Err(Finding),
}

/// Check if a path matches any of the exclude patterns.
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Check if a file carries the documentation extension.
fn is_document(path: &Path, doc_extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(doc_extension)
}

/// Enumerate every documentation file under the (already canonicalized) root.
///
/// Returns `(documents, findings)`:
/// - `documents`: sorted, deduplicated paths ready to read — sorting keeps
///   the aggregate finding order deterministic for a fixed tree snapshot.
/// - `findings`: traversal errors (permission denied, loop, etc.) and invalid
///   exclude patterns, recorded as `DocumentReadError` so the run continues.
pub fn find_documents(
    root: &Path,
    config: &FsSourceConfig,
    doc_extension: &str,
) -> (Vec<PathBuf>, Vec<Finding>) {
    let mut documents = Vec::new();
    let mut findings = Vec::new();

    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => exclude_patterns.push(pat),
            Err(e) => {
                findings.push(Finding::DocumentReadError {
                    file: PathBuf::from(pat_str),
                    message: format!("Invalid exclude glob pattern '{pat_str}': {e}"),
                });
            }
        }
    }

    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                findings.push(Finding::DocumentReadError {
                    file: path,
                    message: format!("Directory traversal error: {walk_err}"),
                });
                continue;
            }
        };

        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if !is_document(file_path, doc_extension) {
            continue;
        }
        if matches_exclude(file_path, &exclude_patterns) {
            continue;
        }

        documents.push(file_path.to_path_buf());
    }

    documents.sort();
    documents.dedup();
    (documents, findings)
}

/// Read a document using a bounded streaming read, enforcing `max_file_size`.
///
/// Uses `Read::take` so the size check and the read are the same operation;
/// never calls `read_to_string` on an unbounded handle. Failures come back
/// as `DocumentReadError` findings, never silently discarded.
pub fn read_document_bounded(path: &Path, max_file_size: u64) -> ReadResult {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ReadResult::Err(Finding::DocumentReadError {
                file: path.to_owned(),
                message: format!("Failed to open file: {e}"),
            });
        }
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    if let Err(e) = file.take(max_file_size + 1).read_to_end(&mut buffer) {
        return ReadResult::Err(Finding::DocumentReadError {
            file: path.to_owned(),
            message: format!("Failed to read file: {e}"),
        });
    }

    if buffer.len() as u64 > max_file_size {
        return ReadResult::Err(Finding::DocumentReadError {
            file: path.to_owned(),
            message: format!("File exceeds maximum size of {max_file_size} bytes"),
        });
    }

    match String::from_utf8(buffer) {
        Ok(content) => ReadResult::Ok(content),
        Err(_) => ReadResult::Err(Finding::DocumentReadError {
            file: path.to_owned(),
            message: "File is not valid UTF-8".to_owned(),
        }),
    }
}
