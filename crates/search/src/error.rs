//! Error types for the search crate.
//!
//! The core functions (`parse_intent`, `filter_listings`, `score_listing`,
//! `suggest_terms`) are total and never fail; errors only arise when loading
//! vocabulary configuration from disk.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Vocabulary file could not be read
    #[error("Failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),

    /// Vocabulary file could not be parsed
    #[error("Failed to parse vocabulary TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
