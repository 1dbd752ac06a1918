pub mod ci;
pub mod formatter;

pub use ci::CiOutputs;
pub use formatter::OutputFormatter;

use crate::discovery::{Diagnostic, Severity};

/// Renders the diagnostics collected during discovery through `tracing`.
pub fn log_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Warning => tracing::warn!("{diagnostic}"),
            Severity::Info => tracing::info!("{diagnostic}"),
        }
    }
}
