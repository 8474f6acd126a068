pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod merger;
pub mod table;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, Command, OutputFormat};
pub use config::{BuildConfig, CliOverrides, Config, ExtractConfig};
pub use error::{LocSheetError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{ExtractReport, MappingExtractor};
pub use merger::{MergeReport, OutputBuilder, TranslationIndex};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface for LocSheet functionality
pub struct LocSheet {
    config: Config,
    output_formatter: OutputFormatter,
}

impl LocSheet {
    /// Create a new LocSheet instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create LocSheet instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Extract an editable mapping file from a source sheet.
    ///
    /// The mapping is written to the configured mapping path (CLI `-o`
    /// overrides it before this is called).
    pub fn create_mapping(&self, source: &Path) -> Result<ExtractReport> {
        self.output_formatter
            .start_operation("Creating translation mapping");

        let extractor = MappingExtractor::new();
        let report = extractor.extract(source, &self.config.extract.mapping_path)?;

        self.output_formatter.debug(&format!(
            "{} rows written, {} rows dropped",
            report.rows_written, report.rows_skipped
        ));

        Ok(report)
    }

    /// Merge an edited mapping back into a full sheet.
    ///
    /// The merged sheet is written to the configured output path.
    pub fn build_sheet(&self, source: &Path, mapping: &Path) -> Result<MergeReport> {
        self.output_formatter
            .start_operation("Building translation sheet");

        let builder = OutputBuilder::new();
        let report = builder.merge(source, mapping, &self.config.build.output_path)?;

        self.output_formatter.debug(&format!(
            "{} of {} rows matched the mapping",
            report.rows_matched, report.rows_emitted
        ));

        Ok(report)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(LocSheetError::Io)?;
        Ok(())
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &LocSheetError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract a mapping with default settings
pub fn create_mapping_simple(source: &Path, mapping: &Path) -> Result<ExtractReport> {
    MappingExtractor::new().extract(source, mapping)
}

/// Convenience function to merge a mapping with default settings
pub fn build_sheet_simple(source: &Path, mapping: &Path, output: &Path) -> Result<MergeReport> {
    OutputBuilder::new().merge(source, mapping, output)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
