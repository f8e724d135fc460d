//! Code generation backends
//!
//! Every backend implements [`CodeBackend`], so the gateway and the HTTP
//! layer never depend on where code comes from. The only backend shipped is
//! [`CannedBackend`], which answers from a fixed snippet catalog.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snippet_engine::{MatchOutcome, MatchRequest, SnippetCatalog};

/// Error types for backend operations
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend not ready")]
    NotReady,

    #[error("Generation failed: {0}")]
    Generation(String),
}

/// Backend information for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendInfo {
    /// Backend identifier
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Language ids the backend has snippets for
    pub languages: Vec<String>,
}

/// The trait every code generation backend implements
#[async_trait]
pub trait CodeBackend: Send + Sync {
    /// Human-readable name for display
    fn name(&self) -> &'static str;

    /// Description of this backend
    fn description(&self) -> &'static str;

    /// Language ids this backend has dedicated output for
    fn languages(&self) -> Vec<String>;

    /// Produce code for a validated request
    async fn generate(&self, request: &MatchRequest) -> Result<String, BackendError>;

    fn info(&self) -> BackendInfo {
        BackendInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
            languages: self.languages(),
        }
    }
}

/// Answers from a snippet catalog using first-match keyword selection
pub struct CannedBackend {
    catalog: Arc<SnippetCatalog>,
}

impl CannedBackend {
    pub fn new(catalog: Arc<SnippetCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CodeBackend for CannedBackend {
    fn name(&self) -> &'static str {
        "canned"
    }

    fn description(&self) -> &'static str {
        "Pre-authored snippets chosen by prompt keywords"
    }

    fn languages(&self) -> Vec<String> {
        self.catalog.languages().map(str::to_string).collect()
    }

    async fn generate(&self, request: &MatchRequest) -> Result<String, BackendError> {
        let selection = self.catalog.select_request(request);
        match selection.outcome {
            MatchOutcome::Keyword(keyword) => {
                log::debug!("[{}] matched keyword '{}'", request.language, keyword)
            }
            MatchOutcome::Default => {
                log::debug!("[{}] no keyword matched, using default", request.language)
            }
            MatchOutcome::Unsupported => {
                log::warn!("No snippets for language '{}'", request.language)
            }
        }
        Ok(selection.into_code())
    }
}
