//! Configuration types for documentation checking.
//!
//! Split into check config (universal) and source-specific config (how
//! documents are discovered on disk). This ensures the check engine does not
//! leak filesystem concerns.

use std::path::PathBuf;

/// Filesystem-specific source options.
///
/// The `"docs"` default root mirrors the conventional documentation layout,
/// but it is an explicit configuration value — callers embedding the engine
/// pass their own root.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Root directory to scan for documentation files.
    pub root: PathBuf,
    /// Exclude patterns (glob format), matched against full paths and file names.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the
    /// documentation root and traversing system directories in CI.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
        }
    }
}

/// Core check config — applies regardless of how documents were discovered.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Extension (without the dot) identifying documentation files.
    /// Used for discovery and for the broken-link extension fallback.
    pub doc_extension: String,
    /// File name exempt from the metadata title requirement.
    pub index_file: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            doc_extension: "md".to_owned(),
            index_file: "index.md".to_owned(),
        }
    }
}
