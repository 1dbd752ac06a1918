use std::fmt::Write;

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::discovery::DiscoveryResult;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(result: &DiscoveryResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Text => Self::format_text(result),
        }
    }

    pub fn format_text(result: &DiscoveryResult) -> Result<String> {
        let mut out = String::new();
        Self::write_text(&mut out, result)?;
        Ok(out)
    }

    fn write_text(out: &mut String, result: &DiscoveryResult) -> std::fmt::Result {
        let validation = &result.validation;

        writeln!(out, "Mode: {}", result.mode.as_str())?;
        writeln!(out, "Test directories ({}):", result.test_directory_count())?;
        for dir in &result.test_directories {
            writeln!(out, "  {} (depth {})", dir.path.display(), dir.depth)?;
        }
        writeln!(out, "Test files ({}):", result.test_file_count())?;
        for file in &result.test_files {
            writeln!(out, "  {}", file.path.display())?;
        }
        writeln!(out, "Has valid directories: {}", validation.has_valid_directories)?;
        writeln!(out, "Has valid files: {}", validation.has_valid_files)?;
        writeln!(out, "Conventions followed: {}", validation.conventions_followed)?;

        if !validation.conventions_followed {
            writeln!(
                out,
                "Expected directories named {} containing files named {}",
                result.metadata.valid_directory_names.join(" or "),
                result.metadata.valid_file_patterns.join(" or ")
            )?;
        }
        Ok(())
    }
}
