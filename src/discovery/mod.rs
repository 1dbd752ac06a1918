//! Convention-based discovery of test directories and test files.
//!
//! Data flows one way: [`walker`] feeds [`directories`], whose output seeds
//! [`files`], and [`orchestrator`] assembles the final [`DiscoveryResult`].

pub mod conventions;
pub mod diagnostics;
pub mod directories;
pub mod files;
pub mod orchestrator;
pub mod result;
pub mod walker;

pub use conventions::{is_valid_test_directory_name, is_valid_test_file_name, Conventions};
pub use diagnostics::{Diagnostic, Severity};
pub use directories::find_test_directories;
pub use files::{find_test_files, SearchRoots};
pub use orchestrator::{discover, DiscoveryConfig, Discoverer};
pub use result::{
    DirectoryEntry, DiscoveryMode, DiscoveryResult, FileEntry, Metadata, Validation,
};
pub use walker::TreeWalker;
