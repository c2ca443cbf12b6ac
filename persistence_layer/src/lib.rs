use async_trait::async_trait;
use chrono::{DateTime, Utc};
use horoscope_core::{ChainProfile, WalletProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod postgres_client;

pub use postgres_client::PostgresClient;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Connection pool creation failed: {0}")]
    PoolCreation(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// A generated horoscope, one row per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoroscopeRecord {
    pub id: Uuid,
    pub wallet_address: String,
    pub zodiac_sign: String,
    pub horoscope_text: String,
    pub degen_score: i32,
    pub lifetime_tx_count: i64,
    pub most_active_chain: String,
    /// Per-chain breakdown the horoscope was written from
    pub chains: Vec<ChainProfile>,
    pub created_at: DateTime<Utc>,
}

impl HoroscopeRecord {
    pub fn new(profile: &WalletProfile, zodiac_sign: &str, horoscope_text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet_address: profile.address.to_lowercase(),
            zodiac_sign: zodiac_sign.to_string(),
            horoscope_text: horoscope_text.to_string(),
            degen_score: profile.degen_score as i32,
            lifetime_tx_count: profile.lifetime_tx_count as i64,
            most_active_chain: profile.most_active_chain.clone(),
            chains: profile.chains.clone(),
            created_at: Utc::now(),
        }
    }
}

/// A confirmed NFT mint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintRecord {
    pub id: Uuid,
    pub wallet_address: String,
    pub token_id: i64,
    pub transaction_hash: String,
    pub zodiac_sign: String,
    pub degen_score: i32,
    pub created_at: DateTime<Utc>,
}

impl MintRecord {
    pub fn new(
        wallet_address: &str,
        token_id: i64,
        transaction_hash: &str,
        zodiac_sign: &str,
        degen_score: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            wallet_address: wallet_address.to_lowercase(),
            token_id,
            transaction_hash: transaction_hash.to_string(),
            zodiac_sign: zodiac_sign.to_string(),
            degen_score,
            created_at: Utc::now(),
        }
    }
}

/// A prophecy prepared for minting, with the token URI handed to the wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProphecyRecord {
    pub id: Uuid,
    pub address: String,
    pub sign: String,
    pub prophecy: String,
    pub degen_score: i32,
    pub lifetime_tx_count: i64,
    pub most_active_chain: String,
    pub token_uri: String,
    pub created_at: DateTime<Utc>,
}

impl ProphecyRecord {
    pub fn new(request: &horoscope_core::MintRequest, token_uri: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: request.address.to_lowercase(),
            sign: request.sign.clone(),
            prophecy: request.prophecy.clone(),
            degen_score: request.degen_score as i32,
            lifetime_tx_count: request.lifetime_tx_count as i64,
            most_active_chain: request.most_active_chain.clone(),
            token_uri: token_uri.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub total_horoscopes: u64,
    pub total_mints: u64,
}

/// Storage seam for generated horoscopes and mint history
#[async_trait]
pub trait HoroscopeStore: Send + Sync {
    async fn save_horoscope(&self, record: &HoroscopeRecord) -> Result<()>;
    async fn record_mint(&self, record: &MintRecord) -> Result<()>;
    async fn save_prophecy(&self, record: &ProphecyRecord) -> Result<()>;
    /// Newest first
    async fn get_user_horoscopes(&self, wallet_address: &str) -> Result<Vec<HoroscopeRecord>>;
    /// Newest first
    async fn get_user_mints(&self, wallet_address: &str) -> Result<Vec<MintRecord>>;
    async fn get_total_stats(&self) -> Result<TotalStats>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use horoscope_core::{ChainConfig, MintRequest, ScoreFormula};

    fn profile() -> WalletProfile {
        let mut chain = ChainProfile::empty(&ChainConfig::base());
        chain.tx_count = 3;
        WalletProfile {
            address: "0x742D35Cc6131b2F6E7f4C3b5e8A8c8D8f0B4c4E3".to_string(),
            chains: vec![chain],
            total_tx_count: 3,
            total_swap_count: 1,
            total_mint_count: 1,
            total_transfer_count: 1,
            most_active_chain: "Base".to_string(),
            lifetime_tx_count: 3,
            first_tx_date: None,
            account_age_days: 0,
            degen_score: 50,
            formula: ScoreFormula::SingleChain,
        }
    }

    #[test]
    fn test_horoscope_record_lowercases_address() {
        let record = HoroscopeRecord::new(&profile(), "MoonboyGemini", "Your Base moon shines.");
        assert_eq!(record.wallet_address, "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3");
        assert_eq!(record.degen_score, 50);
        assert_eq!(record.chains.len(), 1);
    }

    #[test]
    fn test_prophecy_record_from_mint_request() {
        let request = MintRequest {
            address: "0xABC".to_string(),
            sign: "LionLeo".to_string(),
            prophecy: "Roar.".to_string(),
            degen_score: 25,
            lifetime_tx_count: 0,
            most_active_chain: "Ethereum".to_string(),
        };
        let record = ProphecyRecord::new(&request, "data:application/json;base64,e30=");

        assert_eq!(record.address, "0xabc");
        assert_eq!(record.degen_score, 25);
        assert_eq!(record.token_uri, "data:application/json;base64,e30=");
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = TotalStats {
            total_horoscopes: 4,
            total_mints: 1,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["totalHoroscopes"], 4);
        assert_eq!(value["totalMints"], 1);
    }
}
