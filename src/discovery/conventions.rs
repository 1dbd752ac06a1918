pub const TEST_DIRECTORY_NAMES: &[&str] = &["Test", "Tests"];

pub const TEST_FILE_PATTERNS: &[&str] = &["*.Test.ps1", "*.Tests.ps1"];

pub const DEFAULT_MAX_DEPTH: usize = 5;

pub const DEFAULT_EXCLUDED_PATHS: &[&str] = &[".git", "node_modules", "bin", "obj"];

/// Whether file-name suffixes compare case-sensitively on this host.
///
/// Follows the default of the host filesystem: Windows and macOS volumes are
/// case-insensitive out of the box, everything else is treated as sensitive.
pub const fn host_file_names_case_sensitive() -> bool {
    !cfg!(any(windows, target_os = "macos"))
}

/// The naming rules a directory or file must satisfy to be discovered.
///
/// Built once and handed to [`crate::discovery::Discoverer`]; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    directory_names: Vec<String>,
    file_patterns: Vec<String>,
    case_sensitive_files: bool,
}

impl Conventions {
    /// Builds a convention set from directory names and `*<suffix>` patterns.
    pub fn new<D, P>(directory_names: D, file_patterns: P, case_sensitive_files: bool) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            directory_names: directory_names.into_iter().map(Into::into).collect(),
            file_patterns: file_patterns.into_iter().map(Into::into).collect(),
            case_sensitive_files,
        }
    }

    pub fn directory_names(&self) -> &[String] {
        &self.directory_names
    }

    pub fn file_patterns(&self) -> &[String] {
        &self.file_patterns
    }

    /// Exact, case-sensitive membership. `UnitTests` or `tests` never match.
    pub fn is_valid_test_directory_name(&self, name: &str) -> bool {
        self.directory_names.iter().any(|valid| valid == name)
    }

    pub fn is_valid_test_file_name(&self, name: &str) -> bool {
        self.file_patterns
            .iter()
            .map(|pattern| pattern.trim_start_matches('*'))
            .any(|suffix| ends_with(name, suffix, self.case_sensitive_files))
    }
}

impl Default for Conventions {
    fn default() -> Self {
        Self::new(
            TEST_DIRECTORY_NAMES.iter().copied(),
            TEST_FILE_PATTERNS.iter().copied(),
            host_file_names_case_sensitive(),
        )
    }
}

pub fn is_valid_test_directory_name(name: &str) -> bool {
    TEST_DIRECTORY_NAMES.contains(&name)
}

pub fn is_valid_test_file_name(name: &str) -> bool {
    let case_sensitive = host_file_names_case_sensitive();
    TEST_FILE_PATTERNS
        .iter()
        .map(|pattern| pattern.trim_start_matches('*'))
        .any(|suffix| ends_with(name, suffix, case_sensitive))
}

fn ends_with(name: &str, suffix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return name.ends_with(suffix);
    }
    let (name, suffix) = (name.as_bytes(), suffix.as_bytes());
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
