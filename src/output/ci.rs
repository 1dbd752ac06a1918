use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::discovery::DiscoveryResult;

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Key/value pairs handed to a CI system after discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiOutputs {
    pairs: Vec<(&'static str, String)>,
}

impl CiOutputs {
    pub fn from_result(result: &DiscoveryResult) -> Self {
        let validation = &result.validation;
        Self {
            pairs: vec![
                ("test-path-exists", validation.has_valid_directories.to_string()),
                ("discovered-paths", result.discovered_paths.join(";")),
                ("test-file-count", result.test_file_count().to_string()),
                ("test-directory-count", result.test_directory_count().to_string()),
                ("conventions-followed", validation.conventions_followed.to_string()),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends `key=value` lines to the file at `path`, creating it if needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Cannot open CI output file: {}", path.display()))?;

        for (key, value) in &self.pairs {
            writeln!(file, "{key}={value}")
                .with_context(|| format!("Cannot write CI output file: {}", path.display()))?;
        }
        Ok(())
    }

    /// Writes to the file named by `GITHUB_OUTPUT`. Returns the path written,
    /// or `None` when the variable is unset or empty.
    pub fn emit_from_env(&self) -> Result<Option<PathBuf>> {
        let Some(target) = std::env::var_os(GITHUB_OUTPUT_ENV).filter(|v| !v.is_empty()) else {
            tracing::debug!("{GITHUB_OUTPUT_ENV} not set, skipping CI outputs");
            return Ok(None);
        };
        let path = PathBuf::from(target);
        self.write_to(&path)?;
        Ok(Some(path))
    }
}
