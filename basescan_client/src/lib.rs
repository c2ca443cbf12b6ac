pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::BaseScanClient;
pub use error::BaseScanError;
pub use types::*;

/// Provider name used in logs and source errors
pub const PROVIDER_NAME: &str = "BaseScan";
