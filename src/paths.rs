//! Path utilities: root walking, lexical resolution and relative paths
//!
//! All operations are lexical. Nothing here touches the filesystem, which
//! keeps entry resolution identical to how the deployment adapter computes
//! paths before it ever reads a file.

use std::path::{Component, Path, PathBuf};

use crate::error::{AnalyzeError, Result};

/// Walk up from `path` until taking the parent no longer changes it
///
/// The result is the platform root (`/`, or a drive root on Windows) and is
/// used as the trace base directory. Relative or empty input is rejected
/// because parent-walking it never reaches a filesystem root.
///
/// # Example
/// ```
/// use nftlens::paths::find_root;
/// use std::path::Path;
///
/// if cfg!(unix) {
///     assert_eq!(find_root(Path::new("/repo/apps/index.js")).unwrap(), Path::new("/"));
/// }
/// assert!(find_root(Path::new("apps/index.js")).is_err());
/// ```
pub fn find_root(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(AnalyzeError::InvalidPath("path is empty".to_string()));
    }
    if !path.is_absolute() {
        return Err(AnalyzeError::InvalidPath(format!(
            "{} is not absolute",
            path.display()
        )));
    }

    let mut current = path;
    while let Some(parent) = current.parent() {
        current = parent;
    }
    Ok(current.to_path_buf())
}

/// Resolve a CLI entry argument to a normalized absolute path
pub fn resolve_entry(arg: &str, cwd: &Path) -> Result<PathBuf> {
    if arg.is_empty() {
        return Err(AnalyzeError::InvalidPath(
            "entry argument is empty".to_string(),
        ));
    }

    let raw = Path::new(arg);
    let joined = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        cwd.join(raw)
    };

    let resolved = normalize(&joined);
    if !resolved.is_absolute() {
        return Err(AnalyzeError::InvalidPath(format!(
            "{arg} does not resolve to an absolute path"
        )));
    }
    Ok(resolved)
}

/// Lexically normalize a path
///
/// Drops `.`, lets `..` consume the preceding normal segment and keeps `..`
/// at the root from escaping it. Repeated separators collapse because
/// `Path::components` never yields empty segments.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Relative path leading from `from` to `to`
///
/// Both sides are normalized first. Equal paths give an empty path.
pub fn relative(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);
    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let shared = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in shared..from_parts.len() {
        rel.push("..");
    }
    for part in &to_parts[shared..] {
        rel.push(part.as_os_str());
    }
    rel
}

/// Split a path string on `sep`, keeping empty segments
pub fn segments(path: &str, sep: char) -> Vec<&str> {
    path.split(sep).collect()
}

/// Segments of the directory containing `path`
///
/// A path without a separator lives in the base itself and has no segments.
pub fn dirname_segments(path: &str, sep: char) -> Vec<&str> {
    match path.rfind(sep) {
        Some(idx) => segments(&path[..idx], sep),
        None => Vec::new(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_find_root_reaches_slash() {
        let root = find_root(Path::new("/repo/apps/app/.svelte-kit/vercel-tmp/index.js")).unwrap();
        assert_eq!(root, PathBuf::from("/"));
    }

    #[test]
    fn test_find_root_is_fixed_point() {
        let root = find_root(Path::new("/a/b")).unwrap();
        assert_eq!(find_root(&root).unwrap(), root);
    }

    #[test]
    fn test_find_root_rejects_relative() {
        let err = find_root(Path::new("apps/index.js")).unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidPath(_)));
    }

    #[test]
    fn test_find_root_rejects_empty() {
        assert!(find_root(Path::new("")).is_err());
    }

    #[test]
    fn test_resolve_entry_joins_cwd() {
        let entry = resolve_entry("apps/x/index.js", Path::new("/work/repo")).unwrap();
        assert_eq!(entry, PathBuf::from("/work/repo/apps/x/index.js"));
    }

    #[test]
    fn test_resolve_entry_collapses_dots() {
        let entry = resolve_entry("./a/../b/./index.js", Path::new("/work")).unwrap();
        assert_eq!(entry, PathBuf::from("/work/b/index.js"));
    }

    #[test]
    fn test_resolve_entry_keeps_absolute() {
        let entry = resolve_entry("/srv/index.js", Path::new("/work")).unwrap();
        assert_eq!(entry, PathBuf::from("/srv/index.js"));
    }

    #[test]
    fn test_resolve_entry_rejects_empty() {
        let err = resolve_entry("", Path::new("/work")).unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidPath(_)));
    }

    #[test]
    fn test_normalize_parent_at_root_stays() {
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_double_slash() {
        assert_eq!(normalize(Path::new("//repo//apps")), PathBuf::from("/repo/apps"));
    }

    #[test]
    fn test_relative_descends() {
        let rel = relative(Path::new("/repo"), Path::new("/repo/apps/index.js"));
        assert_eq!(rel, PathBuf::from("apps/index.js"));
    }

    #[test]
    fn test_relative_climbs() {
        let rel = relative(Path::new("/repo/packages/lib"), Path::new("/repo/apps/index.js"));
        assert_eq!(rel, PathBuf::from("../../apps/index.js"));
    }

    #[test]
    fn test_relative_equal_is_empty() {
        assert_eq!(relative(Path::new("/a/b"), Path::new("/a/b/")), PathBuf::new());
    }

    #[test]
    fn test_dirname_segments() {
        assert_eq!(dirname_segments("a/b/c.js", '/'), vec!["a", "b"]);
        assert!(dirname_segments("c.js", '/').is_empty());
    }
}
