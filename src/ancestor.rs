//! Common-ancestor reduction, the way the deployment adapter computes it
//!
//! The adapter seeds the shared prefix with the first file's directory and
//! shrinks it against every other file. The handler path it derives joins the
//! base directory twice; that computation is reproduced here unchanged and
//! reported as suspect rather than corrected.

use std::path::{Path, PathBuf, MAIN_SEPARATOR, MAIN_SEPARATOR_STR};

use crate::paths::{dirname_segments, relative, segments};

/// Longest segment prefix shared by every file
///
/// Seeded with the containing directory of the first file, so a single-file
/// list yields that file's directory. An empty list yields no segments.
pub fn common_ancestor_segments<S: AsRef<str>>(files: &[S], sep: char) -> Vec<&str> {
    let Some((first, rest)) = files.split_first() else {
        return Vec::new();
    };

    let mut common = dirname_segments(first.as_ref(), sep);
    for file in rest {
        let parts = segments(file.as_ref(), sep);
        if let Some(diverge) = (0..common.len()).find(|&j| parts.get(j) != Some(&common[j])) {
            common.truncate(diverge);
        }
    }
    common
}

/// Base directory followed by the shared segments (plain concatenation)
pub fn common_ancestor<S: AsRef<str>>(base: &Path, files: &[S]) -> String {
    let common = common_ancestor_segments(files, MAIN_SEPARATOR);
    format!(
        "{}{}",
        base.display(),
        common.join(MAIN_SEPARATOR_STR)
    )
}

/// Relative path from `base + ancestor` to the entry
///
/// `ancestor` already starts with `base`, so the base is counted twice.
/// Harmless when the base is a bare root, misleading otherwise.
pub fn handler_path(base: &Path, ancestor: &str, entry: &Path) -> PathBuf {
    let from = format!("{}{}", base.display(), ancestor);
    relative(Path::new(&from), entry)
}

/// True when [`handler_path`] double-counts a non-trivial base
pub fn handler_path_suspect(base: &Path) -> bool {
    base.as_os_str().len() > 1
}
