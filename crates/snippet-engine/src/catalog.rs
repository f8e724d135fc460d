//! Snippet catalog
//!
//! The catalog maps a language id to an ordered list of `(keyword, snippet)`
//! pairs. Both language ids and keywords are compared case-insensitively, so
//! they are lower-cased once at construction. Keyword order is preserved
//! exactly as declared because the selector uses it as the tie-break.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::error::CatalogError;

/// Reserved keyword holding the snippet returned when nothing else matches
pub const DEFAULT_KEYWORD: &str = "default";

static BUILTIN_CATALOG: Lazy<SnippetCatalog> =
    Lazy::new(|| match SnippetCatalog::from_entries(builtin::entries()) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Built-in snippet catalog is invalid, serving placeholders: {}", e);
            SnippetCatalog::empty()
        }
    });

/// A single keyword and the snippet it selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Substring searched for in the prompt
    pub keyword: String,
    /// Snippet returned verbatim on a match
    pub code: String,
}

/// Declared snippets for one language, in match-priority order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSnippets {
    /// Language id (e.g. "python")
    pub language: String,
    /// Keyword entries, including the reserved `default` entry
    pub snippets: Vec<CatalogEntry>,
}

/// Validated, lower-cased table for one language
#[derive(Debug, Clone)]
pub(crate) struct LanguageTable {
    pub(crate) language: String,
    pub(crate) keywords: Vec<CatalogEntry>,
    pub(crate) default: String,
}

/// Immutable language → keyword → snippet table
#[derive(Debug, Clone, Default)]
pub struct SnippetCatalog {
    tables: Vec<LanguageTable>,
    index: HashMap<String, usize>,
}

impl SnippetCatalog {
    /// The catalog shipped with the crate, built once per process
    pub fn builtin() -> &'static SnippetCatalog {
        &BUILTIN_CATALOG
    }

    /// A catalog with no languages; every lookup falls back to a placeholder
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from declared entries, validating every language
    pub fn from_entries(
        entries: impl IntoIterator<Item = LanguageSnippets>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();

        for entry in entries {
            let language = entry.language.to_lowercase();
            if language.is_empty() {
                return Err(CatalogError::EmptyLanguage);
            }
            if catalog.index.contains_key(&language) {
                return Err(CatalogError::DuplicateLanguage(entry.language));
            }

            let mut keywords: Vec<CatalogEntry> = Vec::with_capacity(entry.snippets.len());
            let mut default = None;

            for snippet in entry.snippets {
                let keyword = snippet.keyword.to_lowercase();
                if keyword.is_empty() {
                    return Err(CatalogError::EmptyKeyword(language));
                }

                let duplicate = if keyword == DEFAULT_KEYWORD {
                    default.replace(snippet.code).is_some()
                } else if keywords.iter().any(|k| k.keyword == keyword) {
                    true
                } else {
                    keywords.push(CatalogEntry {
                        keyword: keyword.clone(),
                        code: snippet.code,
                    });
                    false
                };

                if duplicate {
                    return Err(CatalogError::DuplicateKeyword { language, keyword });
                }
            }

            let default = default.ok_or_else(|| CatalogError::MissingDefault(language.clone()))?;

            catalog.index.insert(language.clone(), catalog.tables.len());
            catalog.tables.push(LanguageTable {
                language,
                keywords,
                default,
            });
        }

        Ok(catalog)
    }

    /// Parse a JSON catalog document: an array of [`LanguageSnippets`]
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<LanguageSnippets> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Language ids in declaration order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.language.as_str())
    }

    /// Whether the catalog has an entry for `language` (case-insensitive)
    pub fn supports(&self, language: &str) -> bool {
        self.table(language).is_some()
    }

    /// Keywords for `language` in match order, excluding `default`
    pub fn keywords(&self, language: &str) -> Option<Vec<&str>> {
        self.table(language)
            .map(|t| t.keywords.iter().map(|k| k.keyword.as_str()).collect())
    }

    /// The fallback snippet for `language`
    pub fn default_snippet(&self, language: &str) -> Option<&str> {
        self.table(language).map(|t| t.default.as_str())
    }

    /// The snippet mapped to `keyword` for `language`
    pub fn snippet(&self, language: &str, keyword: &str) -> Option<&str> {
        let table = self.table(language)?;
        let keyword = keyword.to_lowercase();
        if keyword == DEFAULT_KEYWORD {
            return Some(table.default.as_str());
        }
        table
            .keywords
            .iter()
            .find(|k| k.keyword == keyword)
            .map(|k| k.code.as_str())
    }

    /// Number of languages
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub(crate) fn table(&self, language: &str) -> Option<&LanguageTable> {
        self.index
            .get(&language.to_lowercase())
            .map(|&i| &self.tables[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(language: &str, pairs: &[(&str, &str)]) -> LanguageSnippets {
        LanguageSnippets {
            language: language.to_string(),
            snippets: pairs
                .iter()
                .map(|(k, c)| CatalogEntry {
                    keyword: k.to_string(),
                    code: c.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        // from_entries is strict; an invalid table would have fallen back to empty
        let catalog = SnippetCatalog::builtin();
        assert_eq!(catalog.len(), 7);
        assert!(SnippetCatalog::from_entries(builtin::entries()).is_ok());
    }

    #[test]
    fn test_builtin_languages_in_order() {
        let languages: Vec<&str> = SnippetCatalog::builtin().languages().collect();
        assert_eq!(
            languages,
            vec!["python", "javascript", "cpp", "java", "csharp", "go", "rust"]
        );
    }

    #[test]
    fn test_keywords_exclude_default_and_keep_order() {
        let keywords = SnippetCatalog::builtin().keywords("python").unwrap();
        assert_eq!(
            keywords,
            vec![
                "reverse string",
                "hello world",
                "fibonacci",
                "factorial",
                "palindrome",
                "sort",
                "file"
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = SnippetCatalog::builtin();
        assert!(catalog.supports("PyThOn"));
        assert_eq!(
            catalog.default_snippet("RUST"),
            catalog.default_snippet("rust")
        );
        assert_eq!(
            catalog.snippet("go", "Hello World"),
            Some("package main\nimport \"fmt\"\nfunc main() {\n    fmt.Println(\"Hello Go!\")\n}")
        );
    }

    #[test]
    fn test_missing_default_rejected() {
        let err = SnippetCatalog::from_entries(vec![entry("lua", &[("hello", "print('hi')")])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefault(lang) if lang == "lua"));
    }

    #[test]
    fn test_duplicate_language_rejected() {
        let err = SnippetCatalog::from_entries(vec![
            entry("lua", &[("default", "-- a")]),
            entry("Lua", &[("default", "-- b")]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateLanguage(_)));
    }

    #[test]
    fn test_duplicate_keyword_rejected() {
        let err = SnippetCatalog::from_entries(vec![entry(
            "lua",
            &[("loop", "a"), ("LOOP", "b"), ("default", "c")],
        )])
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateKeyword { ref keyword, .. } if keyword == "loop"
        ));

        let err = SnippetCatalog::from_entries(vec![entry(
            "lua",
            &[("default", "a"), ("Default", "b")],
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKeyword { .. }));
    }

    #[test]
    fn test_empty_keyword_and_language_rejected() {
        let err = SnippetCatalog::from_entries(vec![entry("lua", &[("", "a"), ("default", "b")])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyKeyword(_)));

        let err = SnippetCatalog::from_entries(vec![entry("", &[("default", "b")])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyLanguage));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "language": "Lua",
                "snippets": [
                    { "keyword": "Loop", "code": "for i = 1, 3 do print(i) end" },
                    { "keyword": "default", "code": "print('lua')" }
                ]
            }
        ]"#;
        let catalog = SnippetCatalog::from_json_str(json).unwrap();
        assert!(catalog.supports("lua"));
        assert_eq!(catalog.keywords("LUA").unwrap(), vec!["loop"]);
        assert_eq!(catalog.default_snippet("lua"), Some("print('lua')"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = SnippetCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
