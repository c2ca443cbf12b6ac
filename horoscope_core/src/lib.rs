pub mod address;
pub mod aggregator;
pub mod classifier;
pub mod mint;
pub mod profile;
pub mod prompt;
pub mod source;
pub mod types;
pub mod zodiac;

pub use address::validate_wallet_address;
pub use aggregator::{aggregate, aggregate_at, ScoreFormula};
pub use classifier::{classify, ClassificationRules, Classification};
pub use mint::{MintAttribute, MintMetadata, MintRequest};
pub use profile::build_chain_profile;
pub use prompt::{HoroscopePrompt, NarrativeGenerator, FALLBACK_HOROSCOPE, SYSTEM_PROMPT};
pub use source::{ChainDataSource, SourceError};
pub use types::{ChainConfig, ChainFetch, ChainProfile, RawTransaction, WalletProfile};
pub use zodiac::{
    builder_compatibility, cosmic_keywords, lucky_contract_address, map_score, GasEnergy,
    ZodiacReading, ZodiacSign, LUCKY_ADDRESS_MESSAGE, ONCHAIN_ZODIACS,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),
    #[error("Narrative generation failed: {0}")]
    Narrative(String),
    #[error("Metadata encoding failed: {0}")]
    Metadata(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
