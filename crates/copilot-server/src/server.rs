//! Axum HTTP server
//!
//! Routes:
//! - `POST /api/generate` - `{prompt, language}` → `{code}`
//! - `POST /api/highlight` - `{code}` → classified lines with colors
//! - `GET /api/languages` - catalog languages with display metadata
//! - `GET /health` - liveness probe

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use snippet_engine::{classify, extension_for, file_name_for, Language, Palette, SnippetCatalog};
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::constants::routes;
use crate::gateway::{GatewayError, GenerationGateway, SharedGateway};
use crate::types::{
    ErrorResponse, GenerateRequest, GenerateResponse, HighlightRequest, HighlightResponse,
    HighlightedLine, LanguageInfo,
};

/// Shared state for Axum handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: SharedGateway,
    pub catalog: Arc<SnippetCatalog>,
    pub palette: Arc<Palette>,
}

impl AppState {
    pub fn new(gateway: SharedGateway, catalog: Arc<SnippetCatalog>) -> Self {
        Self {
            gateway,
            catalog,
            palette: Arc::new(Palette::default()),
        }
    }

    /// State backed by the canned backend over `catalog`
    pub fn from_config(config: &ServerConfig, catalog: Arc<SnippetCatalog>) -> Self {
        let gateway = Arc::new(GenerationGateway::from_config(config, catalog.clone()));
        Self::new(gateway, catalog)
    }
}

/// Errors returned to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing prompt or language")]
    MissingField,

    #[error("Invalid request body")]
    InvalidBody(String),

    #[error("Internal Server Error")]
    Internal(String),
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Validation(_) => ApiError::MissingField,
            GatewayError::Backend(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingField | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &self {
            ApiError::InvalidBody(detail) => log::debug!("Rejected request body: {}", detail),
            ApiError::Internal(detail) => log::error!("Request failed: {}", detail),
            ApiError::MissingField => {}
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Server startup errors
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::HEALTH, get(health_handler))
        .route(routes::GENERATE, post(generate_handler))
        .route(routes::HIGHLIGHT, post(highlight_handler))
        .route(routes::LANGUAGES, get(languages_handler))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve in a background task
pub async fn start_server(
    addr: &str,
    state: AppState,
) -> Result<(SocketAddr, tokio::task::JoinHandle<()>), ServerError> {
    let bind_err = |source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    };

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(bind_err)?;
    let local_addr = listener.local_addr().map_err(bind_err)?;

    let app = router(state);
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("HTTP server error: {}", e);
        }
    });

    Ok((local_addr, handle))
}

// --- Axum Handlers ---

async fn health_handler() -> &'static str {
    "ok"
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload?;
    let code = state.gateway.generate(req.prompt, req.language).await?;
    Ok(Json(GenerateResponse { code }))
}

async fn highlight_handler(
    State(state): State<AppState>,
    payload: Result<Json<HighlightRequest>, JsonRejection>,
) -> Result<Json<HighlightResponse>, ApiError> {
    let Json(req) = payload?;
    let lines = classify(&req.code)
        .into_iter()
        .map(|line| HighlightedLine::from_classified(line, &state.palette))
        .collect();
    Ok(Json(HighlightResponse { lines }))
}

async fn languages_handler(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    let languages = state
        .catalog
        .languages()
        .map(|id| LanguageInfo {
            id: id.to_string(),
            label: Language::parse(id).map_or_else(|| id.to_string(), |l| l.label().to_string()),
            extension: extension_for(id).to_string(),
            file_name: file_name_for(id),
            keywords: state
                .catalog
                .keywords(id)
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();
    Json(languages)
}
