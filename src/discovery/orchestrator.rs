use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::discovery::conventions::{Conventions, DEFAULT_EXCLUDED_PATHS, DEFAULT_MAX_DEPTH};
use crate::discovery::diagnostics::Diagnostic;
use crate::discovery::directories::find_test_directories;
use crate::discovery::files::{find_test_files, SearchRoots};
use crate::discovery::{
    DirectoryEntry, DiscoveryMode, DiscoveryResult, FileEntry, Metadata, Validation,
};
use crate::error::{IoError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub root: PathBuf,
    pub explicit_path: Option<PathBuf>,
    pub max_depth: usize,
    pub exclude_paths: Vec<String>,
}

impl DiscoveryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_exclude_paths<I, S>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_paths = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// The explicit path, if one was given and is not blank.
    pub fn explicit_path(&self) -> Option<&Path> {
        self.explicit_path
            .as_deref()
            .filter(|p| !p.as_os_str().to_string_lossy().trim().is_empty())
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            explicit_path: None,
            max_depth: DEFAULT_MAX_DEPTH,
            exclude_paths: DEFAULT_EXCLUDED_PATHS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Entry point for a discovery run.
///
/// Holds nothing but the immutable [`Conventions`], so a single instance can be
/// shared and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct Discoverer {
    conventions: Conventions,
}

impl Discoverer {
    pub fn new(conventions: Conventions) -> Self {
        Self { conventions }
    }

    pub fn discover(&self, config: &DiscoveryConfig) -> Result<DiscoveryResult> {
        let timestamp = Utc::now();
        let mut diagnostics = Vec::new();

        let (mode, test_directories, test_files) = match config.explicit_path() {
            Some(path) => {
                let (dirs, files) = self.discover_explicit(config, path, &mut diagnostics)?;
                (DiscoveryMode::Explicit, dirs, files)
            }
            None => {
                let (dirs, files) = self.discover_auto(config, &mut diagnostics)?;
                (DiscoveryMode::AutoDiscovery, dirs, files)
            }
        };

        let validation = Validation::from_counts(test_directories.len(), test_files.len());
        let discovered_paths = test_directories
            .iter()
            .map(|d| d.path.to_string_lossy().to_string())
            .collect();

        tracing::debug!(
            "{} discovery: {} directories, {} files",
            mode.as_str(),
            test_directories.len(),
            test_files.len()
        );

        Ok(DiscoveryResult {
            mode,
            test_directories,
            test_files,
            discovered_paths,
            validation,
            metadata: Metadata {
                search_depth: config.max_depth,
                excluded_paths: config.exclude_paths.clone(),
                valid_directory_names: self.conventions.directory_names().to_vec(),
                valid_file_patterns: self.conventions.file_patterns().to_vec(),
                timestamp,
            },
            diagnostics,
        })
    }

    // The explicit path is trusted: it is never checked against the
    // directory naming convention.
    fn discover_explicit(
        &self,
        config: &DiscoveryConfig,
        path: &Path,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(Vec<DirectoryEntry>, Vec<FileEntry>)> {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            config.root.join(path)
        };

        if !path.exists() {
            diagnostics.push(Diagnostic::ExplicitPathNotFound { path });
            return Ok((Vec::new(), Vec::new()));
        }

        let path = path
            .canonicalize()
            .map_err(|e| IoError::read_error(&path, e))?;
        let files = find_test_files(
            &self.conventions,
            &SearchRoots::ByPath(path.clone()),
            true,
            diagnostics,
        )?;
        self.note_missing_files(&files, diagnostics);

        Ok((vec![DirectoryEntry { path, depth: 0 }], files))
    }

    fn discover_auto(
        &self,
        config: &DiscoveryConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(Vec<DirectoryEntry>, Vec<FileEntry>)> {
        let dirs = find_test_directories(
            &self.conventions,
            &config.root,
            config.max_depth,
            &config.exclude_paths,
            diagnostics,
        )?;

        if dirs.is_empty() {
            return Ok((dirs, Vec::new()));
        }

        let roots = SearchRoots::ByDirectories(dirs.clone());
        let files = find_test_files(&self.conventions, &roots, true, diagnostics)?;
        self.note_missing_files(&files, diagnostics);

        Ok((dirs, files))
    }

    fn note_missing_files(&self, files: &[FileEntry], diagnostics: &mut Vec<Diagnostic>) {
        if files.is_empty() {
            diagnostics.push(Diagnostic::NoTestFiles {
                expected: self.conventions.file_patterns().to_vec(),
            });
        }
    }
}

/// Runs discovery with the standard conventions.
pub fn discover(config: &DiscoveryConfig) -> Result<DiscoveryResult> {
    Discoverer::default().discover(config)
}
