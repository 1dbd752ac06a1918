//! Naming predicates and run-to-run stability

use std::collections::BTreeSet;
use std::thread;

use test_discovery::discovery::{
    discover, is_valid_test_directory_name, is_valid_test_file_name, find_test_files,
    Conventions, Discoverer, DiscoveryConfig, SearchRoots,
};

use crate::fixtures::reference_tree;

#[test]
fn test_directory_predicate_is_exact_membership() {
    let accepted = ["Test", "Tests"];
    let rejected = [
        "test", "tests", "TEST", "Tests ", "MyTests", "UnitTests", "Tests.old", "src", "", "T",
        "Testss",
    ];

    for name in accepted {
        assert!(is_valid_test_directory_name(name), "{name:?}");
    }
    for name in rejected {
        assert!(!is_valid_test_directory_name(name), "{name:?}");
    }
}

#[test]
fn test_file_predicate_is_suffix_match() {
    let stems = ["A", "Feature", "My.Module", "with space"];
    for stem in stems {
        assert!(is_valid_test_file_name(&format!("{stem}.Test.ps1")));
        assert!(is_valid_test_file_name(&format!("{stem}.Tests.ps1")));
        assert!(!is_valid_test_file_name(&format!("{stem}.ps1")));
        assert!(!is_valid_test_file_name(&format!("{stem}.Tests.ps1.txt")));
        assert!(!is_valid_test_file_name(&format!("{stem}Tests.ps1")));
    }
}

#[test]
fn test_empty_search_roots_yield_nothing() {
    let mut diagnostics = Vec::new();
    let files = find_test_files(
        &Conventions::default(),
        &SearchRoots::ByDirectories(Vec::new()),
        true,
        &mut diagnostics,
    )
    .expect("empty input is not an error");

    assert!(files.is_empty());
}

#[test]
fn test_repeated_discovery_is_stable() {
    let temp_dir = reference_tree();
    let config = DiscoveryConfig::new(temp_dir.path()).with_exclude_paths(["bin"]);

    let first = discover(&config).unwrap();
    let second = discover(&config).unwrap();

    assert_eq!(first.test_directories, second.test_directories);
    assert_eq!(first.test_files, second.test_files);
    assert_eq!(first.validation, second.validation);
}

#[test]
fn test_discoverer_shared_across_threads() {
    let temp_dir = reference_tree();
    let config = DiscoveryConfig::new(temp_dir.path()).with_exclude_paths(["bin"]);
    let discoverer = Discoverer::default();

    let results: Vec<BTreeSet<_>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let result = discoverer.discover(&config).unwrap();
                    result.test_files.into_iter().map(|f| f.path).collect::<BTreeSet<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].len(), 3);
}

#[test]
fn test_invariants_hold_on_reference_tree() {
    let temp_dir = reference_tree();
    let config = DiscoveryConfig::new(temp_dir.path()).with_exclude_paths(["bin"]);
    let result = discover(&config).unwrap();

    assert_eq!(
        result.validation.conventions_followed,
        result.validation.has_valid_directories && result.validation.has_valid_files
    );
    for dir in &result.test_directories {
        let name = dir.path.file_name().unwrap().to_str().unwrap();
        assert!(is_valid_test_directory_name(name));
    }
    for file in &result.test_files {
        let name = file.path.file_name().unwrap().to_str().unwrap();
        assert!(is_valid_test_file_name(name));
        assert!(result
            .test_directories
            .iter()
            .any(|d| file.path.starts_with(&d.path)));
    }
    let mut sorted = result.test_files.clone();
    sorted.sort();
    assert_eq!(sorted, result.test_files);
}
