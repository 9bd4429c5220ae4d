//! Metadata (frontmatter) block checking.

use crate::check::Document;
use crate::config::CheckConfig;
use crate::finding::Finding;

/// Delimiter line opening and closing a metadata block.
const DELIMITER: &str = "---\n";

/// Required field marker for the document title.
const TITLE_FIELD: &str = "title:";

/// Validate the structural integrity of a leading metadata block.
///
/// Documents without a leading delimiter have no metadata and always pass.
/// A block that never closes is incomplete; a closed block must carry a
/// `title:` field unless the document is the index file. No other field
/// validation is performed.
#[must_use]
pub fn check_metadata(doc: &Document, config: &CheckConfig) -> Vec<Finding> {
    if !doc.content.starts_with(DELIMITER) {
        return vec![];
    }

    let parts: Vec<&str> = doc.content.splitn(3, DELIMITER).collect();
    if parts.len() < 3 {
        return vec![Finding::IncompleteMetadata {
            file: doc.path.clone(),
        }];
    }

    let body = parts[1];
    let is_index = doc
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == config.index_file);
    if !body.contains(TITLE_FIELD) && !is_index {
        return vec![Finding::MissingTitle {
            file: doc.path.clone(),
        }];
    }

    vec![]
}
