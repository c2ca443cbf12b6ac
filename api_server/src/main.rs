use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use config_manager::{ConfigurationError, SystemConfig};
use horoscope_orchestrator::{
    select_source, HoroscopeService, MintPreparer, OrchestratorError, WalletProfiler,
};
use openai_client::OpenAiClient;
use persistence_layer::{HoroscopeStore, PersistenceError, PostgresClient};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

mod handlers;
mod types;

use handlers::*;
use types::*;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: SystemConfig,
    /// `None` when no chain-data credential is configured
    pub horoscopes: Option<Arc<HoroscopeService>>,
    pub mints: Arc<MintPreparer>,
    pub store: Option<Arc<dyn HoroscopeStore>>,
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),
    #[error("{0}")]
    Orchestrator(#[from] OrchestratorError),
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    DataSourceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Orchestrator(OrchestratorError::InvalidWallet(_)) => (
                StatusCode::BAD_REQUEST,
                "Invalid wallet address format".to_string(),
            ),
            ApiError::Orchestrator(OrchestratorError::InvalidRequest(message)) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::DataSourceUnavailable(_) | ApiError::Orchestrator(OrchestratorError::Config(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch wallet data. Please check your API keys.".to_string(),
            ),
            ApiError::Orchestrator(OrchestratorError::Narrative(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate horoscope. Please check your OpenAI API key.".to_string(),
            ),
            ApiError::Orchestrator(OrchestratorError::Mint(message)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
            ApiError::Config(_) | ApiError::Persistence(_) | ApiError::Orchestrator(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            timestamp: chrono::Utc::now(),
        });

        (status, body).into_response()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,api_server=debug".into()),
        )
        .init();

    info!("Starting Onchain Horoscope API Server...");

    let config = SystemConfig::load()?;
    info!("Configuration loaded successfully");

    let store = connect_store(&config).await;

    let horoscopes = match select_source(&config) {
        Ok(source) => {
            let profiler = WalletProfiler::from_config(source, &config);
            let narrator = Arc::new(OpenAiClient::new(config.openai.clone())?);
            Some(Arc::new(HoroscopeService::new(profiler, narrator, store.clone())))
        }
        Err(e) => {
            warn!("Horoscope generation disabled: {}", e);
            None
        }
    };
    if !config.openai.is_configured() {
        warn!("OPENAI_API_KEY is not set; horoscope requests will fail");
    }

    let mints = Arc::new(MintPreparer::new(config.mint.clone(), store.clone())?);

    let app_state = AppState {
        config: config.clone(),
        horoscopes,
        mints,
        store,
    };

    let app = create_router(app_state);

    info!("📋 Available endpoints:");
    info!("   • GET /health - Health check");
    info!("   • POST /api/generate-horoscope - Profile a wallet and write its horoscope");
    info!("   • POST /api/mint - Prepare NFT metadata and token URI");
    info!("   • POST /api/mints - Record a confirmed mint");
    info!("   • GET /api/horoscopes/:address - Horoscope history");
    info!("   • GET /api/mints/:address - Mint history");
    info!("   • GET /api/stats - Totals");
    info!("   • POST /api/webhook - Frame notifications");

    let bind_addr = format!("{}:{}", config.api.host, config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Persistence is optional; a database that cannot be reached disables it
async fn connect_store(config: &SystemConfig) -> Option<Arc<dyn HoroscopeStore>> {
    if !config.database.enabled {
        info!("Persistence disabled");
        return None;
    }

    let client = match PostgresClient::new(&config.database.postgres_url).await {
        Ok(client) => client,
        Err(e) => {
            warn!("Continuing without persistence: {}", e);
            return None;
        }
    };

    if let Err(e) = client.initialize_schema().await {
        warn!("Continuing without persistence: {}", e);
        return None;
    }

    let store: Arc<dyn HoroscopeStore> = Arc::new(client);
    Some(store)
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/generate-horoscope",
            get(generate_horoscope_usage).post(generate_horoscope),
        )
        .route("/api/mint", post(prepare_mint))
        .route("/api/mints", post(record_mint))
        .route("/api/mints/:address", get(get_user_mints))
        .route("/api/horoscopes/:address", get(get_user_horoscopes))
        .route("/api/stats", get(get_total_stats))
        .route("/api/webhook", get(webhook_info).post(handle_webhook))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state)
}
