//! Grouping by top-level segment and the outside-project filter

use serde::Serialize;
use std::collections::HashMap;

/// Group label for files that sit directly in the base directory
pub const ROOT_GROUP: &str = "(root)";

/// Default project boundary markers, tried in order
pub const DEFAULT_PROJECT_MARKERS: [&str; 2] = ["/apps/", "/.svelte-kit/"];

/// Traced files partitioned by their first path segment
///
/// Groups keep first-seen order; files inside a group keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    groups: Vec<(String, Vec<String>)>,
}

/// One line of the group summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub segment: String,
    pub files: usize,
}

impl Groups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, segment: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(s, _)| s == segment)
            .map(|(_, files)| files.as_slice())
    }

    /// Iterate groups in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(s, f)| (s.as_str(), f.as_slice()))
    }

    /// Groups by descending size, ties in first-seen order
    pub fn sorted_by_size(&self) -> Vec<(&str, &[String])> {
        let mut sorted: Vec<_> = self.iter().collect();
        // sort_by is stable, so equal sizes keep first-seen order
        sorted.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        sorted
    }

    pub fn counts(&self) -> Vec<GroupCount> {
        self.sorted_by_size()
            .into_iter()
            .map(|(segment, files)| GroupCount {
                segment: segment.to_string(),
                files: files.len(),
            })
            .collect()
    }
}

/// First `/`-separated segment, or [`ROOT_GROUP`] when there is none
pub fn top_segment(path: &str) -> &str {
    match path.split_once('/') {
        Some((first, _)) if !first.is_empty() => first,
        _ => ROOT_GROUP,
    }
}

/// Partition `files` by top-level segment
pub fn group_by_top_segment<S: AsRef<str>>(files: &[S]) -> Groups {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for file in files {
        let file = file.as_ref();
        let segment = top_segment(file);
        let slot = match index.get(segment) {
            Some(&slot) => slot,
            None => {
                index.insert(segment.to_string(), groups.len());
                groups.push((segment.to_string(), Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(file.to_string());
    }

    Groups { groups }
}

/// Infer the project directory from the entry path
///
/// Takes the prefix before the first marker that yields a non-empty prefix.
/// Falls back to the whole entry path when no marker applies.
pub fn project_dir<S: AsRef<str>>(entry: &str, markers: &[S]) -> String {
    markers
        .iter()
        .filter_map(|marker| entry.find(marker.as_ref()).map(|idx| &entry[..idx]))
        .find(|prefix| !prefix.is_empty())
        .unwrap_or(entry)
        .to_string()
}

/// Files whose path does not start with the project directory
///
/// Plain string prefix test, not segment-aware: `repo-other/x.js` counts as
/// inside `/repo`. Output keeps input order.
pub fn filter_outside_project<'a, S: AsRef<str>>(files: &'a [S], project_dir: &str) -> Vec<&'a str> {
    let relative = project_dir
        .strip_prefix(std::path::MAIN_SEPARATOR)
        .unwrap_or(project_dir);
    files
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| !f.starts_with(relative))
        .collect()
}
