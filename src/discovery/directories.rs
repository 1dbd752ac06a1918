use std::path::Path;

use crate::discovery::conventions::Conventions;
use crate::discovery::diagnostics::Diagnostic;
use crate::discovery::walker::TreeWalker;
use crate::discovery::DirectoryEntry;
use crate::error::Result;

/// Finds every directory under `root` whose own name follows the convention.
///
/// More than one match is reported as a warning but every match is returned,
/// in walk order.
pub fn find_test_directories(
    conventions: &Conventions,
    root: &Path,
    max_depth: usize,
    exclude: &[String],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<DirectoryEntry>> {
    let candidates = TreeWalker::new(max_depth, exclude).walk(root, diagnostics)?;

    let matches: Vec<DirectoryEntry> = candidates
        .into_iter()
        .filter(|entry| {
            entry
                .path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| conventions.is_valid_test_directory_name(name))
        })
        .collect();

    match matches.len() {
        0 => diagnostics.push(Diagnostic::NoTestDirectories {
            root: root.to_path_buf(),
            expected: conventions.directory_names().to_vec(),
        }),
        1 => {}
        _ => diagnostics.push(Diagnostic::MultipleTestDirectories {
            paths: matches.iter().map(|e| e.path.clone()).collect(),
        }),
    }

    Ok(matches)
}
