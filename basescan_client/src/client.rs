use crate::{
    error::BaseScanError,
    types::{ExplorerResponse, ExplorerTransaction, NO_TRANSACTIONS_MESSAGE},
};
use config_manager::BaseScanConfig;
use horoscope_core::ChainConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

/// Etherscan-compatible explorer client for the single chain it serves
#[derive(Debug, Clone)]
pub struct BaseScanClient {
    client: Client,
    config: BaseScanConfig,
}

impl BaseScanClient {
    pub fn new(config: BaseScanConfig) -> Result<Self, BaseScanError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, config })
    }

    /// The only chain this explorer indexes
    pub fn chain(&self) -> ChainConfig {
        ChainConfig::new(self.config.chain_id, self.config.chain_name.clone())
    }

    /// Latest `page_size` transactions, newest first
    pub async fn get_recent_transactions(
        &self,
        wallet_address: &str,
    ) -> Result<Vec<ExplorerTransaction>, BaseScanError> {
        let query = [
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("address", wallet_address.to_string()),
            ("startblock", "0".to_string()),
            ("endblock", "99999999".to_string()),
            ("page", "1".to_string()),
            ("offset", self.config.page_size.to_string()),
            ("sort", "desc".to_string()),
            ("apikey", self.config.api_key.clone()),
        ];

        debug!("BaseScan txlist for {}", wallet_address);
        let response = self
            .client
            .get(&self.config.api_base_url)
            .query(&query)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!("❌ BaseScan HTTP error - Status: {}, Body: {}", status, text);
            return Err(match status.as_u16() {
                429 => BaseScanError::RateLimit,
                _ => BaseScanError::ApiError {
                    message: format!("HTTP {}: {}", status, text),
                },
            });
        }

        let body = response.text().await?;
        let transactions = parse_txlist(&body)?;

        info!(
            "Fetched {} transactions for wallet {} on {}",
            transactions.len(),
            wallet_address,
            self.config.chain_name
        );
        Ok(transactions)
    }
}

/// Interpret a txlist body. `status != "1"` is an error carrying the
/// explorer's message, except for a wallet with no history.
pub(crate) fn parse_txlist(body: &str) -> Result<Vec<ExplorerTransaction>, BaseScanError> {
    let envelope: ExplorerResponse =
        serde_json::from_str(body).map_err(|e| BaseScanError::ParseError {
            message: format!("JSON parse error: {} (response size: {} bytes)", e, body.len()),
        })?;

    if envelope.status != "1" {
        if envelope.message == NO_TRANSACTIONS_MESSAGE {
            return Ok(Vec::new());
        }

        let detail = envelope.result.as_str().unwrap_or_default();
        if detail.to_lowercase().contains("rate limit") {
            return Err(BaseScanError::RateLimit);
        }

        let message = match (envelope.message.is_empty(), detail.is_empty()) {
            (true, _) => "Failed to fetch transactions".to_string(),
            (false, true) => envelope.message,
            (false, false) => format!("{}: {}", envelope.message, detail),
        };
        return Err(BaseScanError::ApiError { message });
    }

    serde_json::from_value(envelope.result).map_err(|e| BaseScanError::ParseError {
        message: format!("Unexpected txlist result: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_list() {
        let body = r#"{
            "status": "1",
            "message": "OK",
            "result": [
                {"hash": "0x1", "from": "0xa", "to": "0xb", "value": "0", "isError": "0", "functionName": "mint(uint256)"},
                {"hash": "0x2", "from": "0xa", "to": "0xc", "value": "7", "isError": "1", "functionName": ""}
            ]
        }"#;

        let txs = parse_txlist(body).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].function_name.as_deref(), Some("mint(uint256)"));
    }

    #[test]
    fn test_no_transactions_is_empty_sample() {
        let body = r#"{"status": "0", "message": "No transactions found", "result": []}"#;
        assert!(parse_txlist(body).unwrap().is_empty());
    }

    #[test]
    fn test_notok_carries_provider_message() {
        let body = r#"{"status": "0", "message": "NOTOK", "result": "Invalid API Key"}"#;
        match parse_txlist(body) {
            Err(BaseScanError::ApiError { message }) => assert_eq!(message, "NOTOK: Invalid API Key"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rate_limit_message() {
        let body = r#"{"status": "0", "message": "NOTOK", "result": "Max rate limit reached"}"#;
        assert!(matches!(parse_txlist(body), Err(BaseScanError::RateLimit)));
    }

    #[test]
    fn test_chain_comes_from_config() {
        let client = BaseScanClient::new(config_manager::SystemConfig::default().basescan).unwrap();
        assert_eq!(client.chain(), ChainConfig::base());
    }
}
