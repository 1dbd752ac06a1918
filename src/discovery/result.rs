use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::diagnostics::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscoveryMode {
    Explicit,
    AutoDiscovery,
}

impl DiscoveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryMode::Explicit => "explicit",
            DiscoveryMode::AutoDiscovery => "auto-discovery",
        }
    }
}

/// A directory seen during traversal, tagged with its distance from the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub has_valid_directories: bool,
    pub has_valid_files: bool,
    pub conventions_followed: bool,
}

impl Validation {
    pub fn from_counts(directories: usize, files: usize) -> Self {
        let has_valid_directories = directories > 0;
        let has_valid_files = files > 0;
        Self {
            has_valid_directories,
            has_valid_files,
            conventions_followed: has_valid_directories && has_valid_files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub search_depth: usize,
    pub excluded_paths: Vec<String>,
    pub valid_directory_names: Vec<String>,
    pub valid_file_patterns: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryResult {
    pub mode: DiscoveryMode,
    pub test_directories: Vec<DirectoryEntry>,
    pub test_files: Vec<FileEntry>,
    pub discovered_paths: Vec<String>,
    pub validation: Validation,
    pub metadata: Metadata,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl DiscoveryResult {
    pub fn test_directory_count(&self) -> usize {
        self.test_directories.len()
    }

    pub fn test_file_count(&self) -> usize {
        self.test_files.len()
    }
}
