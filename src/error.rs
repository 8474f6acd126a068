use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocSheetError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source sheet not found: {path}")]
    SourceNotFound { path: String },

    #[error("Mapping file not found: {path}")]
    MappingNotFound { path: String },

    #[error("Malformed sheet data: {0}")]
    Sheet(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for LocSheetError {
    fn user_message(&self) -> String {
        match self {
            LocSheetError::SourceNotFound { path } => {
                format!("Source sheet not found: {}", path)
            }
            LocSheetError::MappingNotFound { path } => {
                format!("Mapping file not found: {}", path)
            }
            LocSheetError::Sheet(e) => {
                format!("Malformed sheet data: {}", e)
            }
            LocSheetError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            LocSheetError::SourceNotFound { .. } => Some(
                "Check the path to the source sheet. Filenames starting with # usually need shell quoting (e.g. './#GF_hypocritical.csv').".to_string()
            ),
            LocSheetError::MappingNotFound { .. } => Some(
                "Run `locsheet create <source>` first to produce an editable mapping file, or check the mapping path passed to `build`.".to_string()
            ),
            LocSheetError::Sheet(_) => Some(
                "The file could not be decoded as UTF-8 comma-separated text. Re-export the sheet with UTF-8 encoding and try again.".to_string()
            ),
            LocSheetError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all paths are non-empty.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for LocSheetError {
    fn from(error: toml::de::Error) -> Self {
        LocSheetError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LocSheetError>;
