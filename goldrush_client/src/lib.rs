pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::GoldRushClient;
pub use error::GoldRushError;
pub use types::*;

/// Provider name used in logs and source errors
pub const PROVIDER_NAME: &str = "GoldRush";
