//! Cross-reference link checking.

use std::path::PathBuf;

use crate::check::Document;
use crate::config::CheckConfig;
use crate::extract;
use crate::finding::Finding;
use crate::resolve::{Resolved, resolve_reference};

/// Verify every local cross-reference link in the document.
///
/// External and anchor-only links are skipped. A missing target that does
/// not already end in the documentation extension is retried once with that
/// extension appended; a target that already ends in the extension gets no
/// further fallback.
#[must_use]
pub fn check_links(doc: &Document, config: &CheckConfig) -> Vec<Finding> {
    let mut findings = Vec::new();
    let suffix = format!(".{}", config.doc_extension);

    for link in extract::links(&doc.content) {
        let Resolved::Local(resolved) = resolve_reference(&doc.dir, &link.target) else {
            continue;
        };
        if resolved.exists() {
            continue;
        }

        if !resolved.to_string_lossy().ends_with(&suffix) {
            let with_extension = PathBuf::from(format!("{}{}", resolved.display(), suffix));
            if with_extension.exists() {
                continue;
            }
        }

        findings.push(Finding::BrokenLink {
            file: doc.path.clone(),
            line: link.line,
            text: link.text,
            target: link.target,
            resolved,
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn doc_in(dir: &TempDir, content: &str) -> Document {
        Document::new(dir.path().join("page.md"), content.to_owned())
    }

    #[test]
    fn test_existing_target_is_valid() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("other.md"), "# Other\n").unwrap();
        let doc = doc_in(&tmp, "[other](other.md)\n");
        assert!(check_links(&doc, &CheckConfig::default()).is_empty());
    }

    #[test]
    fn test_extension_fallback() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("other.md"), "# Other\n").unwrap();
        // Target written without extension still resolves via fallback.
        let doc = doc_in(&tmp, "[other](other)\n");
        assert!(check_links(&doc, &CheckConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_target_flagged() {
        let tmp = TempDir::new().unwrap();
        let doc = doc_in(&tmp, "[gone](nowhere.md)\n");
        let findings = check_links(&doc, &CheckConfig::default());
        assert_eq!(findings.len(), 1);
        let Finding::BrokenLink {
            text,
            target,
            resolved,
            line,
            ..
        } = &findings[0]
        else {
            panic!("expected BrokenLink, got {:?}", findings[0]);
        };
        assert_eq!(text, "gone");
        assert_eq!(target, "nowhere.md");
        assert_eq!(*line, 1);
        assert_eq!(*resolved, tmp.path().join("nowhere.md"));
    }

    #[test]
    fn test_no_second_fallback_for_md_target() {
        // "nowhere.md" already carries the extension: no "nowhere.md.md" retry.
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("nowhere.md.md"), "decoy\n").unwrap();
        let doc = doc_in(&tmp, "[gone](nowhere.md)\n");
        assert_eq!(check_links(&doc, &CheckConfig::default()).len(), 1);
    }

    #[test]
    fn test_external_and_anchor_links_never_flagged() {
        let tmp = TempDir::new().unwrap();
        let doc = doc_in(
            &tmp,
            "[site](https://example.com/missing)\n\
             [mail](mailto:a@b.c)\n\
             [anchor](#section)\n",
        );
        assert!(check_links(&doc, &CheckConfig::default()).is_empty());
    }

    #[test]
    fn test_parent_relative_link() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("top.md"), "# Top\n").unwrap();
        let doc = Document::new(
            tmp.path().join("sub").join("page.md"),
            "[up](../top.md)\n".to_owned(),
        );
        assert!(check_links(&doc, &CheckConfig::default()).is_empty());
    }

    #[test]
    fn test_anchor_fragment_stripped_before_resolution() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("other.md"), "# Other\n").unwrap();
        let doc = doc_in(&tmp, "[other](other.md#section)\n");
        assert!(check_links(&doc, &CheckConfig::default()).is_empty());
    }
}
