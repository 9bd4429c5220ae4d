//! Image reference checking.

use crate::check::Document;
use crate::extract;
use crate::finding::Finding;
use crate::resolve::{Resolved, resolve_reference};

/// Verify every local image reference in the document.
///
/// Images share the link resolver (so external references and anchor
/// fragments are handled the same way) but get no extension fallback:
/// an image path is expected to be written exactly.
#[must_use]
pub fn check_images(doc: &Document) -> Vec<Finding> {
    let mut findings = Vec::new();

    for image in extract::images(&doc.content) {
        let Resolved::Local(resolved) = resolve_reference(&doc.dir, &image.target) else {
            continue;
        };
        if resolved.exists() {
            continue;
        }

        findings.push(Finding::MissingImage {
            file: doc.path.clone(),
            line: image.line,
            alt: image.text,
            target: image.target,
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
    fn test_existing_image_is_valid() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("img")).unwrap();
        fs::write(tmp.path().join("img").join("arch.png"), [0x89, 0x50]).unwrap();
        let doc = doc_in(&tmp, "![architecture](img/arch.png)\n");
        assert!(check_images(&doc).is_empty());
    }

    #[test]
    fn test_missing_image_flagged() {
        let tmp = TempDir::new().unwrap();
        let doc = doc_in(&tmp, "![missing](img/gone.png)\n");
        let findings = check_images(&doc);
        assert_eq!(findings.len(), 1);
        let Finding::MissingImage { alt, target, .. } = &findings[0] else {
            panic!("expected MissingImage, got {:?}", findings[0]);
        };
        assert_eq!(alt, "missing");
        assert_eq!(target, "img/gone.png");
    }

    #[test]
    fn test_no_extension_fallback_for_images() {
        // A sibling "diagram.md" must not satisfy an image reference "diagram".
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("diagram.md"), "# Not an image\n").unwrap();
        let doc = doc_in(&tmp, "![d](diagram)\n");
        assert_eq!(check_images(&doc).len(), 1);
    }

    #[test]
    fn test_external_image_skipped() {
        let tmp = TempDir::new().unwrap();
        let doc = doc_in(&tmp, "![badge](https://img.shields.io/missing.svg)\n");
        assert!(check_images(&doc).is_empty());
    }
}
