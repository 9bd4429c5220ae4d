//! Reference target resolution.
//!
//! Turns a reference string found in a document into an absolute filesystem
//! candidate, relative to the document's own directory. Resolution is purely
//! lexical — existence is the caller's concern.

use std::path::{Component, Path, PathBuf};

/// Reference prefixes that point outside the local document tree.
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:"];

/// Outcome of classifying and resolving a reference target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Network or mail reference — never resolved, never flagged.
    External,
    /// In-page anchor (`#...`) — skipped entirely.
    Anchor,
    /// Reference that reduced to an empty string after anchor stripping.
    Empty,
    /// Local reference, resolved to a normalized absolute path.
    Local(PathBuf),
}

/// Resolve a reference string against the directory of the document it
/// appears in. Any anchor fragment (text after the first `#`) is stripped
/// before resolution; `./` and `../` use normal relative-path semantics.
#[must_use]
pub fn resolve_reference(doc_dir: &Path, target: &str) -> Resolved {
    if EXTERNAL_PREFIXES.iter().any(|p| target.starts_with(p)) {
        return Resolved::External;
    }
    if target.starts_with('#') {
        return Resolved::Anchor;
    }

    let path_part = target.split('#').next().unwrap_or_default();
    if path_part.is_empty() {
        return Resolved::Empty;
    }

    let path_part = path_part.strip_prefix("./").unwrap_or(path_part);
    Resolved::Local(normalize(&doc_dir.join(path_part)))
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. `..` at the filesystem root is clamped, matching
/// how the OS resolves it.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir() -> PathBuf {
        PathBuf::from("/repo/docs/guide")
    }

    #[test]
    fn test_external_references_never_resolved() {
        for target in [
            "http://example.com/page",
            "https://example.com/page.md",
            "mailto:docs@example.com",
        ] {
            assert_eq!(resolve_reference(&dir(), target), Resolved::External);
        }
    }

    #[test]
    fn test_anchor_only_skipped() {
        assert_eq!(resolve_reference(&dir(), "#install"), Resolved::Anchor);
        assert_eq!(resolve_reference(&dir(), "#"), Resolved::Anchor);
    }

    #[test]
    fn test_anchor_fragment_stripped() {
        assert_eq!(
            resolve_reference(&dir(), "setup.md#prereqs"),
            Resolved::Local(PathBuf::from("/repo/docs/guide/setup.md"))
        );
    }

    #[test]
    fn test_plain_target_resolves_against_doc_dir() {
        assert_eq!(
            resolve_reference(&dir(), "setup.md"),
            Resolved::Local(PathBuf::from("/repo/docs/guide/setup.md"))
        );
    }

    #[test]
    fn test_dot_slash_prefix_consumed() {
        assert_eq!(
            resolve_reference(&dir(), "./setup.md"),
            Resolved::Local(PathBuf::from("/repo/docs/guide/setup.md"))
        );
    }

    #[test]
    fn test_parent_prefix_resolved() {
        assert_eq!(
            resolve_reference(&dir(), "../api/index.md"),
            Resolved::Local(PathBuf::from("/repo/docs/api/index.md"))
        );
        assert_eq!(
            resolve_reference(&dir(), "../../README.md"),
            Resolved::Local(PathBuf::from("/repo/README.md"))
        );
    }

    #[test]
    fn test_empty_after_anchor_strip() {
        // "#..." is an anchor, but a target that is empty before the '#'
        // cannot occur via extraction; an entirely empty target still must
        // not produce a candidate path.
        assert_eq!(resolve_reference(&dir(), ""), Resolved::Empty);
    }

    #[test]
    fn test_parent_clamped_at_root() {
        assert_eq!(
            resolve_reference(Path::new("/"), "../../etc/passwd"),
            Resolved::Local(PathBuf::from("/etc/passwd"))
        );
    }
}
