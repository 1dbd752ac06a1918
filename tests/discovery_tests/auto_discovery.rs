//! Auto-discovery from a project root

use pretty_assertions::assert_eq;
use std::fs;
use test_discovery::discovery::{discover, Diagnostic, DiscoveryConfig, DiscoveryMode};

use super::test_utils::*;
use crate::fixtures::{create_tree, reference_tree};

fn config(root: &std::path::Path) -> DiscoveryConfig {
    DiscoveryConfig::new(root)
        .with_max_depth(5)
        .with_exclude_paths(["bin"])
}

#[test]
fn test_reference_tree_discovery() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();

    let result = discover(&config(root)).expect("discovery should succeed");

    assert_eq!(result.mode, DiscoveryMode::AutoDiscovery);
    assert_eq!(directory_names(&result, root), vec!["Tests", "src/Test"]);
    assert_eq!(
        file_names(&result, root),
        vec![
            "Tests/Component.Test.ps1",
            "Tests/Feature.Tests.ps1",
            "src/Test/Module.Tests.ps1",
        ]
    );
    assert!(result.validation.has_valid_directories);
    assert!(result.validation.has_valid_files);
    assert!(result.validation.conventions_followed);
}

#[test]
fn test_reference_tree_rejections() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();

    let result = discover(&config(root)).unwrap();
    let files = file_names(&result, root);

    assert_file_not_found(&files, "UnitTests");
    assert_file_not_found(&files, "bin/");
    assert_file_not_found(&files, "NotATest.ps1");
    assert_file_found(&files, "Feature.Tests.ps1");
}

#[test]
fn test_reference_tree_warns_about_multiple_directories() {
    let temp_dir = reference_tree();
    let result = discover(&config(temp_dir.path())).unwrap();

    let warning = result
        .diagnostics
        .iter()
        .find_map(|d| match d {
            Diagnostic::MultipleTestDirectories { paths } => Some(paths),
            _ => None,
        })
        .expect("two test directories should produce a warning");
    assert_eq!(warning.len(), 2);
}

#[test]
fn test_depth_one_excludes_nested_directory() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();

    let result = discover(&config(root).with_max_depth(1)).unwrap();

    assert_eq!(directory_names(&result, root), vec!["Tests"]);
    assert_file_not_found(&file_names(&result, root), "Module.Tests.ps1");
    assert!(result.validation.conventions_followed);
}

#[test]
fn test_without_exclusion_bin_is_searched() {
    let temp_dir = reference_tree();
    let root = temp_dir.path();

    let result = discover(&config(root).with_exclude_paths(Vec::<String>::new())).unwrap();

    assert_eq!(
        directory_names(&result, root),
        vec!["Tests", "bin/Tests", "src/Test"]
    );
    assert_file_found(&file_names(&result, root), "bin/Tests/Excluded.Tests.ps1");
}

#[test]
fn test_exclusion_is_substring_match() {
    let temp_dir = create_tree(&["cabinet/Tests/Drawer.Tests.ps1", "Tests/Kept.Tests.ps1"]);
    let root = temp_dir.path();

    let result = discover(&config(root)).unwrap();

    assert_eq!(directory_names(&result, root), vec!["Tests"]);
}

#[test]
fn test_nonexistent_root() {
    let config = DiscoveryConfig::new("/nonexistent/project/root").with_exclude_paths(["bin"]);

    let result = discover(&config).expect("missing root is not an error");

    assert_eq!(result.test_directory_count(), 0);
    assert_eq!(result.test_file_count(), 0);
    assert!(!result.validation.conventions_followed);
}

#[test]
fn test_no_test_directories_skips_file_search() {
    let temp_dir = create_tree(&["src/Orphan.Tests.ps1", "UnitTests/Unit.Tests.ps1"]);
    let root = temp_dir.path();

    let result = discover(&config(root)).unwrap();

    assert!(result.test_directories.is_empty());
    assert!(result.test_files.is_empty());
    assert!(!result.validation.has_valid_directories);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::NoTestDirectories { .. })));
    assert!(!result
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::NoTestFiles { .. })));
}

#[test]
fn test_test_directory_without_test_files() {
    let temp_dir = create_tree(&["Tests/helpers.ps1"]);
    let root = temp_dir.path();

    let result = discover(&config(root)).unwrap();

    assert!(result.validation.has_valid_directories);
    assert!(!result.validation.has_valid_files);
    assert!(!result.validation.conventions_followed);
    assert!(result
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::NoTestFiles { .. })));
}

#[test]
fn test_nested_test_directories_do_not_duplicate_files() {
    let temp_dir = create_tree(&["Tests/Outer.Tests.ps1", "Tests/Unit/Test/Inner.Test.ps1"]);
    let root = temp_dir.path();

    let result = discover(&config(root)).unwrap();

    assert_eq!(
        directory_names(&result, root),
        vec!["Tests", "Tests/Unit/Test"]
    );
    assert_eq!(
        file_names(&result, root),
        vec!["Tests/Outer.Tests.ps1", "Tests/Unit/Test/Inner.Test.ps1"]
    );
}

#[test]
fn test_files_below_search_depth_are_still_found() {
    let temp_dir = create_tree(&["Tests/a/b/c/d/e/f/Deep.Tests.ps1"]);
    let root = temp_dir.path();

    let result = discover(&config(root).with_max_depth(1)).unwrap();

    assert_eq!(
        file_names(&result, root),
        vec!["Tests/a/b/c/d/e/f/Deep.Tests.ps1"]
    );
}

#[test]
fn test_discovered_paths_mirror_directories() {
    let temp_dir = reference_tree();
    let result = discover(&config(temp_dir.path())).unwrap();

    let expected: Vec<String> = result
        .test_directories
        .iter()
        .map(|d| d.path.to_string_lossy().to_string())
        .collect();
    assert_eq!(result.discovered_paths, expected);
}

#[test]
fn test_directory_depths_are_relative_to_root() {
    let temp_dir = reference_tree();
    let result = discover(&config(temp_dir.path())).unwrap();

    let depths: Vec<usize> = result.test_directories.iter().map(|d| d.depth).collect();
    assert_eq!(depths, vec![1, 2]);
}

#[test]
fn test_metadata_records_search_settings() {
    let temp_dir = reference_tree();
    fs::create_dir_all(temp_dir.path().join("obj")).unwrap();

    let result = discover(&config(temp_dir.path()).with_exclude_paths(["bin", "obj"])).unwrap();

    assert_eq!(result.metadata.search_depth, 5);
    assert_eq!(result.metadata.excluded_paths, vec!["bin", "obj"]);
    assert_eq!(result.metadata.valid_directory_names, vec!["Test", "Tests"]);
    assert_eq!(
        result.metadata.valid_file_patterns,
        vec!["*.Test.ps1", "*.Tests.ps1"]
    );
}
