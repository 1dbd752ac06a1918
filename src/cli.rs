use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::discovery::conventions::{DEFAULT_EXCLUDED_PATHS, DEFAULT_MAX_DEPTH};
use crate::discovery::DiscoveryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "test-discovery")]
#[command(about = "Discover test directories and files by naming convention", long_about = None)]
pub struct Args {
    /// Project root to search (defaults to the current directory)
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Search this path directly instead of auto-discovering test directories
    #[arg(long, value_name = "PATH")]
    pub test_path: Option<PathBuf>,

    /// Maximum directory depth below the root to search
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Skip any path containing this text. Can be specified multiple times;
    /// defaults to .git, node_modules, bin and obj.
    #[arg(long, value_name = "TEXT")]
    pub exclude: Vec<String>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Append CI outputs to the file named by $GITHUB_OUTPUT
    #[arg(long)]
    pub ci_output: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.path)
    }

    pub fn to_config(&self) -> DiscoveryConfig {
        let exclude: Vec<String> = if self.exclude.is_empty() {
            DEFAULT_EXCLUDED_PATHS.iter().map(|s| s.to_string()).collect()
        } else {
            self.exclude.clone()
        };

        let config = DiscoveryConfig::new(&self.path)
            .with_max_depth(self.max_depth)
            .with_exclude_paths(exclude);

        match &self.test_path {
            Some(test_path) => config.with_explicit_path(test_path),
            None => config,
        }
    }
}

/// A missing root is fine (discovery reports an empty result), but a root
/// that exists and is not a directory is a usage error.
pub fn validate_root(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}
