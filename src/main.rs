use clap::Parser;
use locsheet::{Cli, Command, LocSheet, LocSheetError, UserFriendlyError};
use locsheet::{OutputFormatter, OutputMode};
use std::process;

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let app = match LocSheet::from_cli(&cli) {
        Ok(app) => app,
        Err(e) => {
            print_startup_error(&e);
            return 2;
        }
    };

    let Some(command) = cli.command.as_ref() else {
        // clap shows help for a bare invocation; reaching here means only
        // global flags were given.
        eprintln!("No command given. Run `locsheet --help` for usage.");
        return 2;
    };

    let result = match command {
        Command::Create { source, .. } => app.create_mapping(source).map(|report| {
            app.output_formatter().print_extract_report(&report);
        }),
        Command::Build {
            source, mapping, ..
        } => app.build_sheet(source, mapping).map(|report| {
            app.output_formatter().print_merge_report(&report);
        }),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            app.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &LocSheetError) -> i32 {
    match error {
        LocSheetError::Config { .. } => 2,
        LocSheetError::SourceNotFound { .. } => 3,
        LocSheetError::MappingNotFound { .. } => 4,
        LocSheetError::Sheet(_) => 5,
        _ => 1,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "locsheet.toml".to_string());

    match LocSheet::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nTo use this configuration:");
            println!("  locsheet create <source> --config {}", config_path);
            println!("\nEdit the file to customize default output paths.");
            0
        }
        Err(e) => {
            eprintln!("Failed to generate configuration file: {}", e.user_message());
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn print_startup_error(error: &LocSheetError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use locsheet::OutputFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_command() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let cli = Cli {
            command: None,
            config: Some(config_path.clone()),
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            generate_config: true,
        };

        let exit_code = handle_generate_config(&cli);
        assert_eq!(exit_code, 0);
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[extract]"));
    }

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            exit_code_for(&LocSheetError::SourceNotFound {
                path: "x".to_string()
            }),
            3
        );
        assert_eq!(
            exit_code_for(&LocSheetError::MappingNotFound {
                path: "x".to_string()
            }),
            4
        );
        assert_eq!(
            exit_code_for(&LocSheetError::Config {
                message: "x".to_string()
            }),
            2
        );
        assert_eq!(
            exit_code_for(&LocSheetError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "x"
            ))),
            1
        );
    }

    #[test]
    fn test_generate_config_default_path_name() {
        let cli = Cli {
            command: None,
            config: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
            generate_config: true,
        };

        // Default path is relative; only check the name resolution here.
        let config_path = cli
            .config
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| "locsheet.toml".to_string());
        assert_eq!(PathBuf::from(config_path), PathBuf::from("locsheet.toml"));
    }
}
