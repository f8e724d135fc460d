//! Languages offered by the UI
//!
//! The highlighter does not depend on the language; this table only drives
//! display details such as the `script.<ext>` label above the output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Extension used for languages outside the table
const FALLBACK_EXTENSION: &str = "txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    Cpp,
    Java,
    CSharp,
    Go,
    Rust,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::Python,
        Language::JavaScript,
        Language::Cpp,
        Language::Java,
        Language::CSharp,
        Language::Go,
        Language::Rust,
    ];

    /// Catalog id (lower case)
    pub fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::CSharp => "csharp",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Cpp => "C++",
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Go => "Go",
            Language::Rust => "Rust",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::JavaScript => "js",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }

    /// File name shown above generated output, e.g. `script.py`
    pub fn file_name(self) -> String {
        format!("script.{}", self.extension())
    }

    /// Case-insensitive lookup by id
    pub fn parse(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        Self::ALL.into_iter().find(|l| l.id() == id)
    }
}

/// File extension for any language id, known or not
pub fn extension_for(language: &str) -> &'static str {
    Language::parse(language).map_or(FALLBACK_EXTENSION, Language::extension)
}

/// Display file name for any language id, known or not
pub fn file_name_for(language: &str) -> String {
    format!("script.{}", extension_for(language))
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Unrecognised language id
#[derive(Debug, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
