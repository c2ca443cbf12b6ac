use chrono::{DateTime, Utc};
use horoscope_core::RawTransaction;
use serde::{Deserialize, Serialize};

/// Message the explorer returns with `status: "0"` for a wallet with no history
pub const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

/// Etherscan-style envelope. `result` is a transaction array on success and
/// an error string otherwise, so it stays untyped until the status is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// Row of `module=account&action=txlist`. All numbers arrive as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTransaction {
    pub block_number: Option<String>,
    pub time_stamp: Option<String>,
    pub hash: Option<String>,
    #[serde(default)]
    pub from: String,
    pub to: Option<String>,
    #[serde(default)]
    pub value: String,
    pub gas: Option<String>,
    pub gas_used: Option<String>,
    pub is_error: Option<String>,
    #[serde(rename = "txreceipt_status")]
    pub receipt_status: Option<String>,
    pub method_id: Option<String>,
    pub function_name: Option<String>,
}

impl ExplorerTransaction {
    /// `isError == "0"` is success; anything else, including a missing flag, is not
    pub fn to_raw_transaction(&self) -> RawTransaction {
        let timestamp = self
            .time_stamp
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

        RawTransaction {
            hash: self.hash.clone(),
            from: self.from.clone(),
            to: self.to.clone().filter(|to| !to.is_empty()),
            value: if self.value.is_empty() {
                "0".to_string()
            } else {
                self.value.clone()
            },
            gas_spent: self.gas_used.as_deref().and_then(|g| g.parse().ok()),
            timestamp,
            success: self.is_error.as_deref() == Some("0"),
            method_name: self.function_name.clone().filter(|f| !f.is_empty()),
            method_id: self.method_id.clone().filter(|m| !m.is_empty()),
        }
    }
}
