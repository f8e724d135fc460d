//! Error types for the snippet engine

use thiserror::Error;

/// Errors raised while building a [`SnippetCatalog`](crate::SnippetCatalog)
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A language entry has an empty identifier
    #[error("Catalog entry has an empty language id")]
    EmptyLanguage,

    /// The same language was declared twice (compared case-insensitively)
    #[error("Duplicate language in catalog: {0}")]
    DuplicateLanguage(String),

    /// A language has no `default` snippet
    #[error("Language '{0}' has no default snippet")]
    MissingDefault(String),

    /// An empty keyword would match every prompt
    #[error("Language '{0}' declares an empty keyword")]
    EmptyKeyword(String),

    /// The same keyword was declared twice for one language
    #[error("Duplicate keyword '{keyword}' for language '{language}'")]
    DuplicateKeyword { language: String, keyword: String },

    /// Catalog document could not be parsed
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected match request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing prompt or language")]
    MissingField,
}
