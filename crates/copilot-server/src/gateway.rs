//! Generation gateway - single entry point for code generation
//!
//! The gateway validates requests, applies the simulated response latency and
//! forwards to the active backend. The latency is a boundary concern only: it
//! never changes which snippet is returned, and a zero delay skips the sleep.

use std::sync::Arc;
use std::time::Duration;

use snippet_engine::{MatchRequest, SnippetCatalog, ValidationError};

use crate::backend::{BackendError, BackendInfo, CannedBackend, CodeBackend};
use crate::config::ServerConfig;

/// Error types for gateway operations
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

pub type SharedGateway = Arc<GenerationGateway>;

/// Forwards validated requests to a [`CodeBackend`]
pub struct GenerationGateway {
    backend: Arc<dyn CodeBackend>,
    latency: Duration,
}

impl GenerationGateway {
    /// Create a gateway with no simulated latency
    pub fn new(backend: Arc<dyn CodeBackend>) -> Self {
        Self {
            backend,
            latency: Duration::ZERO,
        }
    }

    /// Gateway over the canned backend, configured from `config`
    pub fn from_config(config: &ServerConfig, catalog: Arc<SnippetCatalog>) -> Self {
        Self::new(Arc::new(CannedBackend::new(catalog))).with_latency(config.response_delay())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn backend_info(&self) -> BackendInfo {
        self.backend.info()
    }

    /// Validate the raw fields, wait out the simulated latency, then generate
    pub async fn generate(
        &self,
        prompt: Option<String>,
        language: Option<String>,
    ) -> Result<String, GatewayError> {
        let request = MatchRequest::new(prompt, language)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let code = self.backend.generate(&request).await?;
        log::debug!(
            "Generated {} bytes of {} via {}",
            code.len(),
            request.language,
            self.backend.name()
        );
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Instant;

    struct OfflineBackend;

    #[async_trait]
    impl CodeBackend for OfflineBackend {
        fn name(&self) -> &'static str {
            "offline"
        }

        fn description(&self) -> &'static str {
            "Always fails"
        }

        fn languages(&self) -> Vec<String> {
            Vec::new()
        }

        async fn generate(&self, _request: &MatchRequest) -> Result<String, BackendError> {
            Err(BackendError::NotReady)
        }
    }

    fn canned() -> GenerationGateway {
        GenerationGateway::new(Arc::new(CannedBackend::new(Arc::new(
            SnippetCatalog::builtin().clone(),
        ))))
    }

    #[tokio::test]
    async fn test_generate() {
        let code = canned()
            .generate(Some("Print Hello World".into()), Some("Go".into()))
            .await
            .unwrap();
        assert!(code.contains("fmt.Println(\"Hello Go!\")"));
    }

    #[tokio::test]
    async fn test_missing_fields_rejected() {
        let gateway = canned();
        for (prompt, language) in [
            (None, Some("go".to_string())),
            (Some("hello".to_string()), None),
            (Some(String::new()), Some("go".to_string())),
        ] {
            let err = gateway.generate(prompt, language).await.unwrap_err();
            assert!(matches!(
                err,
                GatewayError::Validation(ValidationError::MissingField)
            ));
        }
    }

    #[tokio::test]
    async fn test_latency_applied() {
        let gateway = canned().with_latency(Duration::from_millis(30));
        let start = Instant::now();
        gateway
            .generate(Some("x".into()), Some("rust".into()))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_latency_does_not_change_result() {
        let fast = canned()
            .generate(Some("sort".into()), Some("cpp".into()))
            .await
            .unwrap();
        let slow = canned()
            .with_latency(Duration::from_millis(5))
            .generate(Some("sort".into()), Some("cpp".into()))
            .await
            .unwrap();
        assert_eq!(fast, slow);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let gateway = GenerationGateway::new(Arc::new(OfflineBackend));
        let err = gateway
            .generate(Some("hello".into()), Some("go".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Backend(BackendError::NotReady)));
    }

    #[test]
    fn test_from_config() {
        let config = ServerConfig {
            response_delay_ms: 250,
            ..ServerConfig::default()
        };
        let gateway =
            GenerationGateway::from_config(&config, Arc::new(SnippetCatalog::empty()));
        assert_eq!(gateway.latency(), Duration::from_millis(250));
        assert_eq!(gateway.backend_info().name, "canned");
    }
}
