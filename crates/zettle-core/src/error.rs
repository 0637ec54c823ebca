use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZettleError>;

/// Failures that must be shown to the user.
///
/// "Nothing to complete here" is never an error; it is `Ok(None)`.
#[derive(Error, Debug)]
pub enum ZettleError {
    /// Missing or invalid settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A registered directory vanished or cannot be listed.
    #[error("Directory error: {path}: {message}")]
    Directory { path: PathBuf, message: String },

    /// The bibliography file is missing or malformed.
    #[error("Failed to parse bibliography {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ZettleError {
    pub fn missing_setting(name: &str) -> Self {
        ZettleError::Config(format!("Setting \"{}\" is not currently set.", name))
    }
}
