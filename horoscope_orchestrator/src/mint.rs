use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use config_manager::MintConfig;
use horoscope_core::{MintMetadata, MintRequest};
use persistence_layer::{HoroscopeStore, MintRecord, ProphecyRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::{OrchestratorError, Result};

/// Token URI plus the metadata it points at
#[derive(Debug, Clone, Serialize)]
pub struct MintPreparation {
    pub token_uri: String,
    pub metadata: MintMetadata,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    value: UploadValue,
}

#[derive(Debug, Deserialize)]
struct UploadValue {
    cid: String,
}

/// Builds NFT metadata and token URIs, and records confirmed mints
#[derive(Clone)]
pub struct MintPreparer {
    client: reqwest::Client,
    config: MintConfig,
    store: Option<Arc<dyn HoroscopeStore>>,
}

impl MintPreparer {
    pub fn new(config: MintConfig, store: Option<Arc<dyn HoroscopeStore>>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| OrchestratorError::Config(e.to_string()))?;

        Ok(Self {
            client,
            config,
            store,
        })
    }

    /// Metadata goes to NFT.Storage when a key is configured, otherwise it
    /// is inlined as a base64 data URI. The prophecy row is saved best-effort.
    pub async fn prepare(&self, request: &MintRequest) -> Result<MintPreparation> {
        if !request.is_complete() {
            return Err(OrchestratorError::InvalidRequest(
                "Missing required fields".to_string(),
            ));
        }

        let metadata = MintMetadata::from_request(request, Utc::now().date_naive());
        let token_uri = if self.config.nft_storage_key.trim().is_empty() {
            metadata.data_uri()?
        } else {
            self.upload(&metadata).await?
        };

        if let Some(store) = &self.store {
            let record = ProphecyRecord::new(request, &token_uri);
            if let Err(e) = store.save_prophecy(&record).await {
                warn!("Failed to save prophecy for {}: {}", request.address, e);
            }
        }

        info!("Prepared mint metadata for {}", request.address);
        Ok(MintPreparation {
            token_uri,
            metadata,
        })
    }

    async fn upload(&self, metadata: &MintMetadata) -> Result<String> {
        debug!("Uploading metadata to {}", self.config.nft_storage_url);
        let upload_failed = |detail: String| {
            error!("❌ IPFS upload failed: {}", detail);
            OrchestratorError::Mint("Failed to upload to IPFS".to_string())
        };

        let response = self
            .client
            .post(&self.config.nft_storage_url)
            .bearer_auth(&self.config.nft_storage_key)
            .json(metadata)
            .send()
            .await
            .map_err(|e| upload_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(upload_failed(format!("HTTP {}", response.status())));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| upload_failed(e.to_string()))?;
        Ok(format!("ipfs://{}", body.value.cid))
    }

    /// Store a mint the wallet confirmed onchain
    pub async fn record_mint(&self, record: &MintRecord) -> Result<()> {
        let store = self.store.as_ref().ok_or_else(|| {
            OrchestratorError::Persistence("Persistence is disabled".to_string())
        })?;
        store.record_mint(record).await?;
        info!(
            "Recorded mint of token {} for {}",
            record.token_id, record.wallet_address
        );
        Ok(())
    }
}
