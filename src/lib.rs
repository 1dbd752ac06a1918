/// Test Discovery
///
/// Finds test directories and test files in a project tree by fixed naming
/// conventions, checks that the conventions are followed, and renders the
/// outcome for humans and CI systems.
pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;

pub use discovery::{discover, Discoverer, DiscoveryConfig, DiscoveryResult};
pub use error::{Error, Result};
