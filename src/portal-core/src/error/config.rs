use crate::error::foundation::FoundationError;
use crate::error::json_file::JsonFileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine the portal configuration directory")]
    DetermineConfigDirectoryFailed(#[source] FoundationError),

    #[error("Failed to load portal configuration")]
    LoadConfigFailed(#[source] JsonFileError),

    #[error("Failed to save portal configuration")]
    SaveConfigFailed(#[source] JsonFileError),

    #[error("Unknown configuration key '{0}'. Valid keys are: {1}")]
    UnknownKey(String, String),

    #[error("Invalid value '{value}' for configuration key '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
