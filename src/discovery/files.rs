use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::discovery::conventions::Conventions;
use crate::discovery::diagnostics::Diagnostic;
use crate::discovery::{DirectoryEntry, FileEntry};
use crate::error::{IoError, Result};

/// Where to look for test files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRoots {
    ByDirectories(Vec<DirectoryEntry>),
    ByPath(PathBuf),
}

impl SearchRoots {
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            SearchRoots::ByDirectories(dirs) => dirs.iter().map(|d| d.path.as_path()).collect(),
            SearchRoots::ByPath(path) => vec![path.as_path()],
        }
    }
}

/// Collects files matching the file convention under every search root.
///
/// Missing roots are skipped. A discovered directory that cannot be read is
/// skipped with a diagnostic; only an unreadable explicit path is fatal. The
/// result is deduplicated by canonical path and sorted, so overlapping roots
/// (e.g. `Tests` and `Tests/Unit/Test`) report each file once.
pub fn find_test_files(
    conventions: &Conventions,
    roots: &SearchRoots,
    recursive: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<FileEntry>> {
    let mut found = BTreeSet::new();
    let unreadable_root_is_fatal = matches!(roots, SearchRoots::ByPath(_));

    for root in roots.paths() {
        if !root.exists() {
            diagnostics.push(Diagnostic::SearchRootNotFound {
                path: root.to_path_buf(),
            });
            continue;
        }
        search_root(
            conventions,
            root,
            recursive,
            unreadable_root_is_fatal,
            &mut found,
            diagnostics,
        )?;
    }

    Ok(found.into_iter().map(|path| FileEntry { path }).collect())
}

fn search_root(
    conventions: &Conventions,
    root: &Path,
    recursive: bool,
    unreadable_root_is_fatal: bool,
    found: &mut BTreeSet<PathBuf>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<()> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut matched = 0usize;

    for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 && unreadable_root_is_fatal => {
                return Err(IoError::walk_error(root, err).into());
            }
            Err(err) if err.depth() == 0 => {
                tracing::debug!("skipping test directory {}: {err}", root.display());
                diagnostics.push(Diagnostic::SkippedDirectory {
                    path: root.to_path_buf(),
                    reason: err.to_string(),
                });
                continue;
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                diagnostics.push(Diagnostic::SkippedFile {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let is_match = entry
            .file_name()
            .to_str()
            .is_some_and(|name| conventions.is_valid_test_file_name(name));
        if !is_match {
            continue;
        }

        let canonical = entry
            .path()
            .canonicalize()
            .unwrap_or_else(|_| entry.path().to_path_buf());
        if found.insert(canonical) {
            matched += 1;
        }
    }

    tracing::debug!("{matched} new test files under {}", root.display());
    Ok(())
}
