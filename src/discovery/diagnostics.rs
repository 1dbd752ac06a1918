use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Something worth telling the user that did not stop discovery.
///
/// The core only records these; rendering is left to [`crate::output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    RootNotFound { path: PathBuf },
    SkippedDirectory { path: PathBuf, reason: String },
    MultipleTestDirectories { paths: Vec<PathBuf> },
    NoTestDirectories { root: PathBuf, expected: Vec<String> },
    SearchRootNotFound { path: PathBuf },
    SkippedFile { path: PathBuf, reason: String },
    NoTestFiles { expected: Vec<String> },
    ExplicitPathNotFound { path: PathBuf },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::SkippedDirectory { .. }
            | Self::SkippedFile { .. }
            | Self::MultipleTestDirectories { .. }
            | Self::SearchRootNotFound { .. }
            | Self::ExplicitPathNotFound { .. } => Severity::Warning,
            Self::RootNotFound { .. } | Self::NoTestDirectories { .. } | Self::NoTestFiles { .. } => {
                Severity::Info
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotFound { path } => {
                write!(f, "search root does not exist: {}", path.display())
            }
            Self::SkippedDirectory { path, reason } => {
                write!(f, "skipped unreadable directory {}: {reason}", path.display())
            }
            Self::MultipleTestDirectories { paths } => {
                write!(f, "found {} test directories, expected one:", paths.len())?;
                for path in paths {
                    write!(f, "\n  - {}", path.display())?;
                }
                Ok(())
            }
            Self::NoTestDirectories { root, expected } => write!(
                f,
                "no test directories under {}; name one of: {}",
                root.display(),
                expected.join(", ")
            ),
            Self::SearchRootNotFound { path } => {
                write!(f, "test directory does not exist, skipping: {}", path.display())
            }
            Self::SkippedFile { path, reason } => {
                write!(f, "skipped unreadable entry {}: {reason}", path.display())
            }
            Self::NoTestFiles { expected } => {
                write!(f, "no test files found; name them like: {}", expected.join(", "))
            }
            Self::ExplicitPathNotFound { path } => {
                write!(f, "test path does not exist: {}", path.display())
            }
        }
    }
}
