use horoscope_core::CoreError;
use persistence_layer::PersistenceError;
use thiserror::Error;

pub mod mint;
pub mod profiler;
pub mod service;
pub mod sources;

pub use mint::{MintPreparation, MintPreparer};
pub use profiler::WalletProfiler;
pub use service::{HoroscopeResult, HoroscopeService};
pub use sources::select_source;

#[derive(Error, Debug, Clone)]
pub enum OrchestratorError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid wallet address: {0}")]
    InvalidWallet(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Narrative generation failed: {0}")]
    Narrative(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Mint preparation failed: {0}")]
    Mint(String),
}

impl From<config_manager::ConfigurationError> for OrchestratorError {
    fn from(err: config_manager::ConfigurationError) -> Self {
        OrchestratorError::Config(err.to_string())
    }
}

impl From<PersistenceError> for OrchestratorError {
    fn from(err: PersistenceError) -> Self {
        OrchestratorError::Persistence(err.to_string())
    }
}

impl From<CoreError> for OrchestratorError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidAddress(address) => OrchestratorError::InvalidWallet(address),
            CoreError::Narrative(message) => OrchestratorError::Narrative(message),
            CoreError::Metadata(e) => OrchestratorError::Mint(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
