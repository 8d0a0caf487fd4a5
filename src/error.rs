//! Error types for the lexnorm pipeline.

use thiserror::Error;

/// The main error type for normalization operations.
///
/// The pipeline itself has no internal failure modes; errors only arise
/// when an external text-processing collaborator rejects its input. No
/// stage retries or returns partial results.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// A purely numeric token could not be expanded into cardinal words.
    #[error("Numeral expansion error: {0}")]
    NumeralExpansion(String),
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
