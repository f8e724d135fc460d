//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use snippet_engine::{ClassifiedLine, Palette, TokenCategory};

/// `POST /api/generate` body; fields are optional so absence maps to a 400
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub code: String,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /api/highlight` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightResponse {
    pub lines: Vec<HighlightedLine>,
}

/// A classified line with render colors attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HighlightedLine {
    Comment { text: String, color: String },
    Tokens { tokens: Vec<HighlightedToken> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedToken {
    pub text: String,
    pub category: TokenCategory,
    pub color: String,
}

impl HighlightedLine {
    pub fn from_classified(line: ClassifiedLine, palette: &Palette) -> Self {
        match line {
            ClassifiedLine::Comment { text } => HighlightedLine::Comment {
                text,
                color: palette.color(TokenCategory::Comment).to_string(),
            },
            ClassifiedLine::Tokens { tokens } => HighlightedLine::Tokens {
                tokens: tokens
                    .into_iter()
                    .map(|t| HighlightedToken {
                        color: palette.color(t.category).to_string(),
                        text: t.text,
                        category: t.category,
                    })
                    .collect(),
            },
        }
    }
}

/// Entry of `GET /api/languages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Catalog id
    pub id: String,
    pub label: String,
    pub extension: String,
    /// Display file name, e.g. `script.py`
    pub file_name: String,
    /// Keywords in match order, excluding `default`
    pub keywords: Vec<String>,
}
