//! Property-based tests for the path reduction and grouping invariants
//!
//! Core properties covered:
//! 1. Root walking reaches a fixed point
//! 2. The common ancestor is a prefix of every traced file
//! 3. Grouping partitions the file list
//! 4. The outside-project filter is an order-preserving subsequence

use nftlens::ancestor::common_ancestor_segments;
use nftlens::grouping::{filter_outside_project, group_by_top_segment};
use nftlens::paths::{dirname_segments, find_root, segments};
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::Path;

fn segment() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,8}"
}

/// Relative traced paths like `node_modules/pino/pino.js`
fn traced_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=6).prop_map(|parts| parts.join("/"))
}

fn unique_files() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(traced_path(), 0..24).prop_map(|files| {
        let mut seen = HashSet::new();
        files.into_iter().filter(|f| seen.insert(f.clone())).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[cfg(unix)]
    #[test]
    fn prop_find_root_is_idempotent(path in traced_path()) {
        let absolute = format!("/{path}");
        let root = find_root(Path::new(&absolute)).unwrap();
        prop_assert_eq!(find_root(&root).unwrap(), root.clone());
        prop_assert_eq!(root, Path::new("/").to_path_buf());
    }

    #[test]
    fn prop_relative_paths_never_find_root(path in traced_path()) {
        prop_assert!(find_root(Path::new(&path)).is_err());
    }

    #[test]
    fn prop_common_ancestor_prefixes_every_file(files in unique_files()) {
        let common = common_ancestor_segments(&files, '/');
        for file in &files {
            let parts = segments(file, '/');
            prop_assert!(common.len() <= parts.len());
            prop_assert_eq!(&parts[..common.len()], common.as_slice());
        }
    }

    #[test]
    fn prop_common_ancestor_within_first_directory(files in unique_files()) {
        prop_assume!(!files.is_empty());
        let common = common_ancestor_segments(&files, '/');
        let first_dir = dirname_segments(&files[0], '/');
        prop_assert!(common.len() <= first_dir.len());
    }

    #[test]
    fn prop_single_file_ancestor_is_its_directory(file in traced_path()) {
        let files = [file.clone()];
        let common = common_ancestor_segments(&files, '/');
        prop_assert_eq!(common, dirname_segments(&file, '/'));
    }

    #[test]
    fn prop_grouping_is_a_partition(files in unique_files()) {
        let groups = group_by_top_segment(&files);
        let mut regrouped: Vec<&str> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(regrouped.len(), files.len());

        let mut expected: Vec<&str> = files.iter().map(String::as_str).collect();
        regrouped.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(regrouped, expected);
    }

    #[test]
    fn prop_groups_sorted_by_descending_size(files in unique_files()) {
        let counts = group_by_top_segment(&files).counts();
        for pair in counts.windows(2) {
            prop_assert!(pair[0].files >= pair[1].files);
        }
    }

    #[test]
    fn prop_outside_filter_is_ordered_subsequence(
        files in unique_files(),
        project in segment(),
    ) {
        let project_dir = format!("/{project}");
        let outside = filter_outside_project(&files, &project_dir);

        let mut cursor = files.iter();
        for kept in &outside {
            prop_assert!(!kept.starts_with(project.as_str()));
            prop_assert!(cursor.any(|f| f.as_str() == *kept), "out of order or not in input: {}", kept);
        }

        let expected = files.iter().filter(|f| !f.starts_with(project.as_str())).count();
        prop_assert_eq!(outside.len(), expected);
    }
}
