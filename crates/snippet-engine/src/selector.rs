//! Prompt → snippet selection
//!
//! Selection is a first-match substring search over the language's keywords
//! in declaration order. It is not best-match or longest-match: when a prompt
//! contains several keywords, the one declared first wins.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::catalog::SnippetCatalog;
use crate::error::ValidationError;

/// Why a snippet was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// The prompt contained this keyword
    Keyword(&'a str),
    /// No keyword matched; the language default was used
    Default,
    /// The language has no catalog entry; a placeholder was generated
    Unsupported,
}

/// Result of a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Snippet text, returned verbatim from the catalog
    pub code: Cow<'a, str>,
    pub outcome: MatchOutcome<'a>,
}

impl Selection<'_> {
    pub fn into_code(self) -> String {
        self.code.into_owned()
    }
}

/// A validated `(prompt, language)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub prompt: String,
    pub language: String,
}

impl MatchRequest {
    /// Build a request, rejecting a missing or empty field
    pub fn new(
        prompt: Option<String>,
        language: Option<String>,
    ) -> Result<Self, ValidationError> {
        match (prompt, language) {
            (Some(prompt), Some(language)) if !prompt.is_empty() && !language.is_empty() => {
                Ok(Self { prompt, language })
            }
            _ => Err(ValidationError::MissingField),
        }
    }
}

/// Placeholder returned for languages the catalog does not know
pub fn unsupported_placeholder(language: &str) -> String {
    format!("// No mock data for {} yet.", language)
}

impl SnippetCatalog {
    /// Pick the snippet for `prompt` in `language`
    pub fn select<'a>(&'a self, language: &str, prompt: &str) -> Selection<'a> {
        let Some(table) = self.table(language) else {
            return Selection {
                code: Cow::Owned(unsupported_placeholder(language)),
                outcome: MatchOutcome::Unsupported,
            };
        };

        let prompt = prompt.to_lowercase();
        match table.keywords.iter().find(|k| prompt.contains(&k.keyword)) {
            Some(entry) => Selection {
                code: Cow::Borrowed(entry.code.as_str()),
                outcome: MatchOutcome::Keyword(entry.keyword.as_str()),
            },
            None => Selection {
                code: Cow::Borrowed(table.default.as_str()),
                outcome: MatchOutcome::Default,
            },
        }
    }

    pub fn select_request<'a>(&'a self, request: &MatchRequest) -> Selection<'a> {
        self.select(&request.language, &request.prompt)
    }
}

/// Select from the built-in catalog
pub fn select(language: &str, prompt: &str) -> String {
    SnippetCatalog::builtin().select(language, prompt).into_code()
}
