use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregator::ScoreFormula;

/// One chain tracked independently (e.g. Ethereum, Base)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Numeric EVM chain id (1 = Ethereum, 8453 = Base)
    pub id: u64,
    /// Display name used in profiles and prompts
    pub name: String,
}

impl ChainConfig {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn ethereum() -> Self {
        Self::new(1, "Ethereum")
    }

    pub fn base() -> Self {
        Self::new(8453, "Base")
    }
}

/// One on-chain transaction as returned by a data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: Option<String>,
    pub from: String,
    pub to: Option<String>,
    /// Transferred value in base units (wei), as an integer string
    pub value: String,
    pub gas_spent: Option<u64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub success: bool,
    /// Decoded function name, when the provider exposes one
    pub method_name: Option<String>,
    /// 4-byte method selector, when the provider exposes one
    pub method_id: Option<String>,
}

impl RawTransaction {
    /// Bare transaction with zero value and no optional metadata
    pub fn new(from: impl Into<String>, to: Option<String>) -> Self {
        Self {
            hash: None,
            from: from.into(),
            to,
            value: "0".to_string(),
            gas_spent: None,
            timestamp: None,
            success: true,
            method_name: None,
            method_id: None,
        }
    }
}

/// Raw output of one adapter call for one chain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainFetch {
    /// Most recent transactions, newest first, bounded by the provider page size
    pub transactions: Vec<RawTransaction>,
    /// Lifetime count from the provider's summary endpoint, `None` when it has none
    pub lifetime_count: Option<u64>,
}

/// Per-chain aggregate over the sampled window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainProfile {
    pub chain: String,
    pub chain_id: u64,
    /// Transactions examined (sample size, not lifetime)
    pub tx_count: u64,
    pub swap_count: u64,
    pub mint_count: u64,
    pub transfer_count: u64,
    pub total_gas_spent: u64,
    /// Percentage of successful transactions in the sample, in [0, 100]
    pub success_rate: f64,
    pub lifetime_count: Option<u64>,
    pub earliest_tx: Option<DateTime<Utc>>,
}

impl ChainProfile {
    /// Zero-activity profile substituted when a chain's fetch fails
    pub fn empty(chain: &ChainConfig) -> Self {
        Self {
            chain: chain.name.clone(),
            chain_id: chain.id,
            tx_count: 0,
            swap_count: 0,
            mint_count: 0,
            transfer_count: 0,
            total_gas_spent: 0,
            success_rate: 100.0,
            lifetime_count: None,
            earliest_tx: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.tx_count > 0
    }

    /// Lifetime count when the provider supplied one, else the sample count
    pub fn effective_lifetime_count(&self) -> u64 {
        self.lifetime_count.unwrap_or(self.tx_count)
    }

    /// One-line activity summary used in narrative prompts
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} txs ({} swaps, {} mints, {} transfers)",
            self.chain, self.tx_count, self.swap_count, self.mint_count, self.transfer_count
        )
    }
}

/// Finished wallet-level profile, one per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletProfile {
    pub address: String,
    /// In configured chain order
    pub chains: Vec<ChainProfile>,
    pub total_tx_count: u64,
    pub total_swap_count: u64,
    pub total_mint_count: u64,
    pub total_transfer_count: u64,
    pub most_active_chain: String,
    pub lifetime_tx_count: u64,
    pub first_tx_date: Option<DateTime<Utc>>,
    /// Whole days since the earliest sampled transaction
    pub account_age_days: u64,
    pub degen_score: u32,
    pub formula: ScoreFormula,
}

impl WalletProfile {
    pub fn total_gas_spent(&self) -> u64 {
        self.chains.iter().map(|c| c.total_gas_spent).sum()
    }

    pub fn active_chains(&self) -> impl Iterator<Item = &ChainProfile> {
        self.chains.iter().filter(|c| c.is_active())
    }

    /// `0x1234...abcd` form used wherever the full address is not needed
    pub fn short_address(&self) -> String {
        if self.address.len() <= 10 {
            return self.address.clone();
        }
        format!(
            "{}...{}",
            &self.address[..6],
            &self.address[self.address.len() - 4..]
        )
    }
}
