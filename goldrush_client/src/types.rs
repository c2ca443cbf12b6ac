use chrono::{DateTime, Utc};
use horoscope_core::RawTransaction;
use serde::{Deserialize, Serialize};

/// Query parameters for the transactions_v3 endpoint
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    pub wallet_address: String,
    pub chain_id: u64,
    pub page_size: u32,
    pub no_logs: bool,
}

/// GoldRush API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldRushResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub error: bool,
    pub error_message: Option<String>,
    pub error_code: Option<u32>,
}

/// Response body of transactions_v3
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
    pub chain_name: Option<String>,
    #[serde(default)]
    pub items: Vec<GoldRushTransaction>,
}

/// Transaction as returned by transactions_v3 with `no-logs=true`.
///
/// Every field the classifier does not strictly need is optional; the
/// indexer omits or nulls them for some transaction kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldRushTransaction {
    pub block_signed_at: Option<DateTime<Utc>>,
    pub block_height: Option<u64>,
    pub tx_hash: Option<String>,
    pub successful: Option<bool>,
    #[serde(default)]
    pub from_address: String,
    pub from_address_label: Option<String>,
    pub to_address: Option<String>,
    pub to_address_label: Option<String>,
    /// Wei amount
    pub value: Option<String>,
    pub gas_offered: Option<u64>,
    pub gas_spent: Option<u64>,
    pub gas_price: Option<u64>,
    pub fees_paid: Option<String>,
}

impl GoldRushTransaction {
    /// Missing value reads as "0", missing gas as 0, missing status as success
    pub fn to_raw_transaction(&self) -> RawTransaction {
        RawTransaction {
            hash: self.tx_hash.clone(),
            from: self.from_address.clone(),
            to: self.to_address.clone(),
            value: self
                .value
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "0".to_string()),
            gas_spent: Some(self.gas_spent.unwrap_or(0)),
            timestamp: self.block_signed_at,
            success: self.successful.unwrap_or(true),
            method_name: None,
            method_id: None,
        }
    }
}

/// Response body of transactions_summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummaryResponse {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub items: Vec<TransactionSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_count: Option<u64>,
    pub earliest_transaction: Option<TransactionRef>,
    pub latest_transaction: Option<TransactionRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRef {
    pub block_signed_at: Option<DateTime<Utc>>,
    pub tx_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transactions_page() {
        let json = r#"{
            "data": {
                "address": "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3",
                "chain_id": 8453,
                "chain_name": "base-mainnet",
                "items": [
                    {
                        "block_signed_at": "2024-11-02T17:21:05Z",
                        "block_height": 21930001,
                        "tx_hash": "0xaaa",
                        "successful": true,
                        "from_address": "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3",
                        "to_address": "0x3fc91a3afd70395cd496c647d5a6cc9d4b2b7fad",
                        "to_address_label": "Uniswap: Universal Router",
                        "value": "250000000000000",
                        "gas_offered": 320000,
                        "gas_spent": 184233,
                        "gas_price": 1200000,
                        "fees_paid": "221079600000"
                    },
                    {
                        "block_signed_at": "2024-10-30T08:00:00Z",
                        "tx_hash": "0xbbb",
                        "successful": null,
                        "from_address": "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3",
                        "to_address": null,
                        "value": null,
                        "gas_spent": null
                    }
                ]
            },
            "error": false,
            "error_message": null,
            "error_code": null
        }"#;

        let response: GoldRushResponse<TransactionsResponse> = serde_json::from_str(json).unwrap();
        let items = response.data.unwrap().items;
        assert_eq!(items.len(), 2);

        let first = items[0].to_raw_transaction();
        assert_eq!(first.gas_spent, Some(184_233));
        assert_eq!(first.value, "250000000000000");
        assert!(first.success);

        let second = items[1].to_raw_transaction();
        assert_eq!(second.value, "0");
        assert_eq!(second.gas_spent, Some(0));
        assert!(second.success);
        assert!(second.to.is_none());
    }

    #[test]
    fn test_parse_summary() {
        let json = r#"{
            "data": {
                "address": "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3",
                "chain_id": 1,
                "items": [
                    {
                        "total_count": 1342,
                        "earliest_transaction": { "block_signed_at": "2019-04-01T10:00:00Z", "tx_hash": "0x01" },
                        "latest_transaction": { "block_signed_at": "2025-01-01T10:00:00Z", "tx_hash": "0x02" }
                    }
                ]
            },
            "error": false
        }"#;

        let response: GoldRushResponse<TransactionSummaryResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.unwrap().items[0].total_count, Some(1342));
    }

    #[test]
    fn test_parse_error_envelope() {
        let json = r#"{"data": null, "error": true, "error_message": "Malformed address provided", "error_code": 400}"#;
        let response: GoldRushResponse<TransactionsResponse> = serde_json::from_str(json).unwrap();
        assert!(response.error);
        assert!(response.data.is_none());
        assert_eq!(response.error_code, Some(400));
    }
}
