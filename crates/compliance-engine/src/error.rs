//! Error types for the compliance engine

use thiserror::Error;

/// Errors that abort an audit request
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Malformed batch: {0}")]
    MalformedBatch(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors from an optional enrichment source.
///
/// These never abort a batch; the engine falls back to the deterministic rules.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("Enrichment timed out after {0}ms")]
    Timeout(u64),
}
