use crate::{
    error::GoldRushError,
    types::{
        GoldRushResponse, GoldRushTransaction, TransactionRequest, TransactionSummaryResponse,
        TransactionsResponse,
    },
};
use config_manager::GoldRushConfig;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info};

/// GoldRush (Covalent) API client for multi-chain EVM transaction data
#[derive(Debug, Clone)]
pub struct GoldRushClient {
    client: Client,
    config: GoldRushConfig,
}

impl GoldRushClient {
    /// Create a new GoldRush client from its configuration section
    pub fn new(config: GoldRushConfig) -> Result<Self, GoldRushError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn page_size(&self) -> u32 {
        self.config.page_size
    }

    /// Lifetime transaction count from the transactions_summary endpoint
    pub async fn get_transaction_count(
        &self,
        wallet_address: &str,
        chain_id: u64,
    ) -> Result<u64, GoldRushError> {
        let url = format!(
            "{}/{}/address/{}/transactions_summary/",
            self.config.api_base_url, chain_id, wallet_address
        );

        let summary: TransactionSummaryResponse = self.get_json(&url, &[]).await?;
        let total = summary
            .items
            .first()
            .and_then(|item| item.total_count)
            .unwrap_or(0);

        debug!(
            "Lifetime count for {} on chain {}: {}",
            wallet_address, chain_id, total
        );
        Ok(total)
    }

    /// Most recent transactions for a wallet on one chain, newest first.
    /// One attempt only; a failure is returned to the caller as is.
    pub async fn get_recent_transactions(
        &self,
        request: &TransactionRequest,
    ) -> Result<Vec<GoldRushTransaction>, GoldRushError> {
        let url = format!(
            "{}/{}/address/{}/transactions_v3/",
            self.config.api_base_url, request.chain_id, request.wallet_address
        );
        let query = [
            ("no-logs", request.no_logs.to_string()),
            ("page-size", request.page_size.to_string()),
        ];

        let page: TransactionsResponse = self.get_json(&url, &query).await?;

        info!(
            "Fetched {} transactions for wallet {} on chain {}",
            page.items.len(),
            request.wallet_address,
            request.chain_id
        );
        Ok(page.items)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, GoldRushError> {
        debug!("GoldRush request: {} {:?}", url, query);

        let start_time = std::time::Instant::now();
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .query(query)
            .send()
            .await?;
        let status = response.status();
        debug!(
            "GoldRush response: {} in {:.2}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("❌ GoldRush API error - Status: {}, Body: {}", status, text);

            return Err(match status.as_u16() {
                401 => GoldRushError::AuthError,
                429 => GoldRushError::RateLimit,
                _ => GoldRushError::ApiError {
                    message: format!("HTTP {}: {}", status, text),
                },
            });
        }

        let response_text = response.text().await?;
        parse_envelope(&response_text)
    }
}

/// Unwrap the `{data, error, error_message}` envelope
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, GoldRushError> {
    let api_response: GoldRushResponse<T> =
        serde_json::from_str(body).map_err(|e| GoldRushError::ParseError {
            message: format!("JSON parse error: {} (response size: {} bytes)", e, body.len()),
        })?;

    if api_response.error {
        let error_msg = api_response
            .error_message
            .unwrap_or_else(|| "Unknown API error".to_string());
        error!("❌ API returned error flag: {}", error_msg);
        return Err(GoldRushError::ApiError { message: error_msg });
    }

    api_response.data.ok_or_else(|| GoldRushError::ParseError {
        message: "Response envelope has no data".to_string(),
    })
}
