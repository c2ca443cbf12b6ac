use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::types::RawTransaction;

/// Gas above which a transaction counts as a complex interaction (swap)
pub const COMPLEX_INTERACTION_GAS: u64 = 100_000;

/// Which heuristic to apply. Providers differ in what they expose, so each
/// one picks the rule set its data supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationRules {
    /// Gas cost, transferred value and destination-address text
    GasAndDestination,
    /// Decoded function name or selector
    MethodName,
}

/// Category counts for one chain's sample. Categories may overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub total: u64,
    pub swap_count: u64,
    pub mint_count: u64,
    pub transfer_count: u64,
    pub success_count: u64,
    pub total_gas_spent: u64,
}

impl Classification {
    /// Successful / examined × 100, or 100 for an empty sample
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.success_count as f64 / self.total as f64 * 100.0
    }
}

/// Classify every transaction independently and fold the counts.
pub fn classify(transactions: &[RawTransaction], rules: ClassificationRules) -> Classification {
    let mut counts = Classification {
        total: transactions.len() as u64,
        ..Classification::default()
    };

    for tx in transactions {
        if tx.success {
            counts.success_count += 1;
        }
        counts.total_gas_spent += tx.gas_spent.unwrap_or(0);

        match rules {
            ClassificationRules::GasAndDestination => classify_by_gas(tx, &mut counts),
            ClassificationRules::MethodName => classify_by_method(tx, &mut counts),
        }
    }

    counts
}

fn classify_by_gas(tx: &RawTransaction, counts: &mut Classification) {
    match tx.gas_spent {
        Some(gas) if gas > COMPLEX_INTERACTION_GAS => counts.swap_count += 1,
        _ if has_positive_value(&tx.value) => counts.transfer_count += 1,
        _ => {}
    }

    // Destination text is checked regardless of the gas branch above
    let to = tx.to.as_deref().unwrap_or_default().to_lowercase();
    if to.contains("swap") || to.contains("router") {
        counts.swap_count += 1;
    } else if to.contains("mint") || to.contains("nft") {
        counts.mint_count += 1;
    }
}

fn classify_by_method(tx: &RawTransaction, counts: &mut Classification) {
    let method = match (&tx.method_name, &tx.method_id) {
        (Some(name), _) if !name.is_empty() => name.to_lowercase(),
        (_, Some(id)) => id.clone(),
        _ => String::new(),
    };

    if method.contains("swap") || method.contains("exchange") {
        counts.swap_count += 1;
    } else if method.contains("mint") || method.contains("claim") {
        counts.mint_count += 1;
    } else if tx.value != "0" {
        counts.transfer_count += 1;
    }
}

/// Unparseable values count as zero
fn has_positive_value(value: &str) -> bool {
    BigUint::parse_bytes(value.trim().as_bytes(), 10)
        .map(|v| v > BigUint::default())
        .unwrap_or(false)
}
