//! Snippet engine for Mini Copilot
//!
//! Two stateless components make up the engine:
//! - **Selector**: maps a `(language, prompt)` pair to a pre-authored snippet
//!   from an immutable [`SnippetCatalog`] using first-match keyword search
//! - **Highlighter**: splits source text into lines and tokens and assigns
//!   each token a [`TokenCategory`] for display
//!
//! # Example
//!
//! ```rust
//! use snippet_engine::{classify, SnippetCatalog};
//!
//! let catalog = SnippetCatalog::builtin();
//! let selection = catalog.select("python", "write a function to reverse a string");
//! let lines = classify(&selection.code);
//! assert!(!lines.is_empty());
//! ```

pub mod catalog;
pub mod error;
pub mod highlight;
pub mod language;
pub mod palette;
pub mod selector;

mod builtin;

// Re-exports for convenience
pub use catalog::{CatalogEntry, LanguageSnippets, SnippetCatalog, DEFAULT_KEYWORD};
pub use error::{CatalogError, ValidationError};
pub use highlight::{classify, classify_line, tokenize, ClassifiedLine, Token, TokenCategory};
pub use language::{extension_for, file_name_for, Language, UnknownLanguage};
pub use palette::Palette;
pub use selector::{select, unsupported_placeholder, MatchOutcome, MatchRequest, Selection};
