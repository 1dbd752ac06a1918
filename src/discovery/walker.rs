use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::discovery::diagnostics::Diagnostic;
use crate::discovery::DirectoryEntry;
use crate::error::{IoError, Result};

/// Enumerates directories below a root, bounded by depth and exclusions.
///
/// The root is depth 0 and is never yielded itself. Output is sorted by
/// file name at every level, so repeated walks over an unchanged tree agree.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'a> {
    max_depth: usize,
    exclude: &'a [String],
}

impl<'a> TreeWalker<'a> {
    pub fn new(max_depth: usize, exclude: &'a [String]) -> Self {
        Self { max_depth, exclude }
    }

    pub fn walk(&self, root: &Path, diagnostics: &mut Vec<Diagnostic>) -> Result<Vec<DirectoryEntry>> {
        if !root.exists() {
            diagnostics.push(Diagnostic::RootNotFound {
                path: root.to_path_buf(),
            });
            return Ok(Vec::new());
        }

        let root = root
            .canonicalize()
            .map_err(|e| IoError::read_error(root, e))?;

        let mut directories = Vec::new();
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_type().is_dir() && !self.is_excluded(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(IoError::walk_error(&root, err).into());
                }
                Err(err) => {
                    let path = err.path().unwrap_or(root.as_path()).to_path_buf();
                    tracing::debug!("skipping {}: {err}", path.display());
                    diagnostics.push(Diagnostic::SkippedDirectory {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            directories.push(DirectoryEntry {
                depth: entry.depth(),
                path: entry.into_path(),
            });
        }

        tracing::debug!(
            "walked {} directories under {} (max depth {})",
            directories.len(),
            root.display(),
            self.max_depth
        );
        Ok(directories)
    }

    // Plain substring containment on the full path: "bin" also drops "cabinet".
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        let path = entry.path().to_string_lossy();
        self.exclude
            .iter()
            .any(|pattern| !pattern.is_empty() && path.contains(pattern.as_str()))
    }
}
