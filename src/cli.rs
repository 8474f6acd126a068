use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locsheet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract and merge translation mappings for localization CSV sheets")]
#[command(
    long_about = "LocSheet pulls the translatable text out of a localization CSV sheet into \
                       a small two-column mapping file, and merges the hand-edited mapping back \
                       into a full sheet with the original header preserved byte for byte."
)]
#[command(after_help = "EXAMPLES:\n  \
    locsheet create './#GF_hypocritical.csv'\n  \
    locsheet create source.csv -o my_translations.csv\n  \
    # edit the second column of my_translations.csv, then:\n  \
    locsheet build source.csv my_translations.csv -o './#GF_custom.csv'\n\n\
    For more information, visit: https://github.com/user/locsheet")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file path
    #[arg(short, long, global = true, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an editable mapping file from a source sheet
    Create {
        /// Source CSV sheet (e.g. #GF_hypocritical.csv)
        source: PathBuf,

        /// Mapping file to write (default: translations_to_edit.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the final sheet from a source and an edited mapping
    Build {
        /// Source CSV sheet the mapping was created from
        source: PathBuf,

        /// Mapping file with your edited translations
        mapping: PathBuf,

        /// Merged sheet to write (default: #GF_custom.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        match &self.command {
            Some(Command::Create { output, .. }) => {
                CliOverrides::new().with_mapping_path(output.clone())
            }
            Some(Command::Build { output, .. }) => {
                CliOverrides::new().with_output_path(output.clone())
            }
            None => CliOverrides::new(),
        }
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let cli = parse(&["locsheet", "create", "source.csv"]);

        match cli.command {
            Some(Command::Create { ref source, ref output }) => {
                assert_eq!(source, &PathBuf::from("source.csv"));
                assert!(output.is_none());
            }
            _ => panic!("expected create subcommand"),
        }

        let config = cli.load_config().unwrap();
        assert_eq!(
            config.extract.mapping_path,
            PathBuf::from("translations_to_edit.csv")
        );
    }

    #[test]
    fn test_create_output_override() {
        let cli = parse(&["locsheet", "create", "source.csv", "-o", "edits.csv"]);
        let config = cli.load_config().unwrap();
        assert_eq!(config.extract.mapping_path, PathBuf::from("edits.csv"));
        // The build side keeps its default untouched.
        assert_eq!(config.build.output_path, PathBuf::from("#GF_custom.csv"));
    }

    #[test]
    fn test_build_output_override() {
        let cli = parse(&[
            "locsheet", "build", "source.csv", "edits.csv", "-o", "merged.csv",
        ]);

        match cli.command {
            Some(Command::Build { ref mapping, .. }) => {
                assert_eq!(mapping, &PathBuf::from("edits.csv"));
            }
            _ => panic!("expected build subcommand"),
        }

        let config = cli.load_config().unwrap();
        assert_eq!(config.build.output_path, PathBuf::from("merged.csv"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["locsheet", "-q", "-v", "create", "source.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = parse(&["locsheet", "-vv", "create", "source.csv"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = parse(&["locsheet", "-q", "create", "source.csv"]);
        assert_eq!(quiet.verbosity_level(), 0);
        assert!(!quiet.is_verbose());
    }
}
