//! Error types for the policy audit CLI

use serde::Serialize;
use thiserror::Error;

use compliance_engine::AuditError;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid JSON format in file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("File must be a JSON array of objects: {0}")]
    InvalidBatch(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<AuditError> for CliError {
    fn from(err: AuditError) -> Self {
        match err {
            AuditError::MalformedBatch(msg) => CliError::InvalidBatch(msg),
            AuditError::InvalidConfig(msg) => CliError::InvalidConfig(msg),
        }
    }
}

/// Error body written to stderr
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::InvalidJson(_) => "INVALID_JSON",
            CliError::InvalidBatch(_) => "INVALID_BATCH",
            CliError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }

    /// Process exit code; 2 for bad input, 3 for bad configuration
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidJson(_) | CliError::InvalidBatch(_) => 2,
            CliError::InvalidConfig(_) => 3,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error: self.to_string(),
            code: self.code().to_string(),
        }
    }
}
