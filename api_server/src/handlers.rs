use crate::types::*;
use crate::{ApiError, AppState};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use horoscope_core::{validate_wallet_address, MintRequest};
use persistence_layer::{MintRecord, TotalStats};
use serde_json::Value;
use tracing::{debug, info};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(SuccessResponse::new(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: state
            .horoscopes
            .as_ref()
            .map(|s| s.profiler().source_name().to_string()),
        narrative_configured: state.config.openai.is_configured(),
        persistence_enabled: state.store.is_some(),
    }))
}

pub async fn generate_horoscope_usage() -> impl IntoResponse {
    Json(UsageResponse {
        message: "Onchain Horoscope API",
        usage: r#"POST with { "address": "0x..." }"#,
    })
}

/// Profile the wallet across chains and write its horoscope
pub async fn generate_horoscope(
    State(state): State<AppState>,
    Json(request): Json<GenerateHoroscopeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let address = request
        .address
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Wallet address is required".to_string()))?;

    validate_wallet_address(&address)
        .map_err(|_| ApiError::Validation("Invalid wallet address format".to_string()))?;

    let service = state.horoscopes.as_ref().ok_or_else(|| {
        ApiError::DataSourceUnavailable(
            "No API key configured (COVALENT_API_KEY or BASESCAN_API_KEY)".to_string(),
        )
    })?;

    info!("Generating horoscope for {}", address);
    let result = service.generate(&address).await?;

    Ok(Json(GenerateHoroscopeResponse::from(result)))
}

/// Build NFT metadata and a token URI for the wallet to mint
pub async fn prepare_mint(
    State(state): State<AppState>,
    Json(request): Json<MintRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let prepared = state.mints.prepare(&request).await?;

    Ok(Json(MintResponse {
        success: true,
        token_uri: prepared.token_uri,
        metadata: prepared.metadata,
    }))
}

pub async fn record_mint(
    State(state): State<AppState>,
    Json(request): Json<RecordMintRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_wallet_address(&request.address)
        .map_err(|_| ApiError::Validation("Invalid wallet address format".to_string()))?;

    let record = MintRecord::new(
        &request.address,
        request.token_id,
        &request.transaction_hash,
        &request.zodiac_sign,
        request.degen_score,
    );
    state.mints.record_mint(&record).await?;

    Ok(Json(SuccessResponse::new(record)))
}

/// Newest first; empty when persistence is disabled
pub async fn get_user_horoscopes(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    validate_wallet_address(&address)
        .map_err(|_| ApiError::Validation("Invalid wallet address format".to_string()))?;

    let records = match &state.store {
        Some(store) => store.get_user_horoscopes(&address).await?,
        None => Vec::new(),
    };

    Ok(Json(SuccessResponse::new(records)))
}

/// Newest first; empty when persistence is disabled
pub async fn get_user_mints(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    validate_wallet_address(&address)
        .map_err(|_| ApiError::Validation("Invalid wallet address format".to_string()))?;

    let records = match &state.store {
        Some(store) => store.get_user_mints(&address).await?,
        None => Vec::new(),
    };

    Ok(Json(SuccessResponse::new(records)))
}

pub async fn get_total_stats(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = match &state.store {
        Some(store) => store.get_total_stats().await?,
        None => TotalStats::default(),
    };

    Ok(Json(SuccessResponse::new(stats)))
}

/// Frame lifecycle notifications are only logged
pub async fn handle_webhook(Json(body): Json<Value>) -> impl IntoResponse {
    debug!("Webhook received: {}", body);

    let event = body
        .get("event")
        .or_else(|| body.get("type"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let fid = body.get("fid").cloned().unwrap_or(Value::Null);

    match event {
        "frame.added" => info!("Frame added by user: {}", fid),
        "frame.removed" => info!("Frame removed by user: {}", fid),
        "notifications.enabled" => info!("Notifications enabled: {}", fid),
        "notifications.disabled" => info!("Notifications disabled: {}", fid),
        other => info!("Unknown event type: {}", other),
    }

    Json(WebhookResponse {
        success: true,
        message: "Webhook received",
    })
}

pub async fn webhook_info() -> impl IntoResponse {
    Json(WebhookInfoResponse {
        message: "The Based Oracle Webhook",
        status: "active",
        app: "The Based Oracle - Onchain Horoscope",
    })
}
