use chrono::{DateTime, Utc};
use horoscope_core::{ChainProfile, GasEnergy};
use horoscope_orchestrator::HoroscopeResult;
use serde::{Deserialize, Serialize};

/// Standard API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// Standard API success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub data_source: Option<String>,
    pub narrative_configured: bool,
    pub persistence_enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateHoroscopeRequest {
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    pub total_tx_count: u64,
    pub total_swap_count: u64,
    pub total_mint_count: u64,
    pub total_transfer_count: u64,
    pub lifetime_tx_count: u64,
    pub account_age_days: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSummary {
    pub chain: String,
    pub tx_count: u64,
    pub swap_count: u64,
    pub mint_count: u64,
    pub transfer_count: u64,
    pub success_rate: f64,
}

impl From<&ChainProfile> for ChainSummary {
    fn from(chain: &ChainProfile) -> Self {
        Self {
            chain: chain.chain.clone(),
            tx_count: chain.tx_count,
            swap_count: chain.swap_count,
            mint_count: chain.mint_count,
            transfer_count: chain.transfer_count,
            success_rate: chain.success_rate,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSummary {
    pub emoji: &'static str,
    pub description: &'static str,
    pub compatibility: String,
    pub gas_energy: GasEnergy,
    pub gas_energy_message: &'static str,
    pub cosmic_keywords: Vec<&'static str>,
    pub lucky_contract: &'static str,
    pub lucky_contract_message: &'static str,
}

/// Body of a successful `POST /api/generate-horoscope`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHoroscopeResponse {
    pub horoscope: String,
    pub zodiac_sign: &'static str,
    pub degen_score: u32,
    pub most_active_chain: String,
    pub wallet_stats: WalletStats,
    pub chains: Vec<ChainSummary>,
    pub reading: ReadingSummary,
}

impl From<HoroscopeResult> for GenerateHoroscopeResponse {
    fn from(result: HoroscopeResult) -> Self {
        let HoroscopeResult {
            profile,
            reading,
            horoscope,
        } = result;

        Self {
            horoscope,
            zodiac_sign: reading.sign.name,
            degen_score: profile.degen_score,
            wallet_stats: WalletStats {
                total_tx_count: profile.total_tx_count,
                total_swap_count: profile.total_swap_count,
                total_mint_count: profile.total_mint_count,
                total_transfer_count: profile.total_transfer_count,
                lifetime_tx_count: profile.lifetime_tx_count,
                account_age_days: profile.account_age_days,
            },
            chains: profile.chains.iter().map(ChainSummary::from).collect(),
            most_active_chain: profile.most_active_chain,
            reading: ReadingSummary {
                emoji: reading.sign.emoji,
                description: reading.sign.description,
                compatibility: reading.compatibility,
                gas_energy: reading.gas_energy,
                gas_energy_message: reading.gas_energy_message,
                cosmic_keywords: reading.cosmic_keywords,
                lucky_contract: reading.lucky_contract,
                lucky_contract_message: reading.lucky_contract_message,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub message: &'static str,
    pub usage: &'static str,
}

/// Body of a successful `POST /api/mint`
#[derive(Debug, Serialize)]
pub struct MintResponse {
    pub success: bool,
    #[serde(rename = "tokenURI")]
    pub token_uri: String,
    pub metadata: horoscope_core::MintMetadata,
}

/// A mint the wallet confirmed onchain
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMintRequest {
    pub address: String,
    pub token_id: i64,
    pub transaction_hash: String,
    pub zodiac_sign: String,
    #[serde(default)]
    pub degen_score: i32,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebhookInfoResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub app: &'static str,
}
