use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the domain, storage, and configuration layers.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = StdResult<T, DaybookError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] DaybookError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for DaybookError {
    fn from(err: std::io::Error) -> Self {
        DaybookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DaybookError {
    fn from(err: serde_json::Error) -> Self {
        DaybookError::Storage(err.to_string())
    }
}
