use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{ChainProfile, WalletProfile};

pub const MAX_DEGEN_SCORE: u32 = 100;

/// Weighting used to fold counts into the degen score. The two formulas are
/// not equivalent; the data source that produced the profiles decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFormula {
    /// swap×12 + mint×15 + transfer×8 + tx×4 + active chains×10 + min(20, lifetime/10)
    MultiChain,
    /// swap×15 + mint×20 + transfer×10 + tx×5
    SingleChain,
}

impl ScoreFormula {
    /// Weighted sum, clamped to [0, 100]
    pub fn score(
        &self,
        totals: &Totals,
        active_chains: u64,
        lifetime_tx_count: u64,
    ) -> u32 {
        let raw = match self {
            ScoreFormula::MultiChain => totals
                .swap
                .saturating_mul(12)
                .saturating_add(totals.mint.saturating_mul(15))
                .saturating_add(totals.transfer.saturating_mul(8))
                .saturating_add(totals.tx.saturating_mul(4))
                .saturating_add(active_chains.saturating_mul(10))
                .saturating_add((lifetime_tx_count / 10).min(20)),
            ScoreFormula::SingleChain => totals
                .swap
                .saturating_mul(15)
                .saturating_add(totals.mint.saturating_mul(20))
                .saturating_add(totals.transfer.saturating_mul(10))
                .saturating_add(totals.tx.saturating_mul(5)),
        };
        raw.min(MAX_DEGEN_SCORE as u64) as u32
    }
}

/// Element-wise sums across chains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub tx: u64,
    pub swap: u64,
    pub mint: u64,
    pub transfer: u64,
}

impl Totals {
    fn add(mut self, chain: &ChainProfile) -> Self {
        self.tx += chain.tx_count;
        self.swap += chain.swap_count;
        self.mint += chain.mint_count;
        self.transfer += chain.transfer_count;
        self
    }
}

/// Merge per-chain profiles into one wallet profile as of now.
pub fn aggregate(address: &str, chains: Vec<ChainProfile>, formula: ScoreFormula) -> WalletProfile {
    aggregate_at(address, chains, formula, Utc::now())
}

/// Merge per-chain profiles into one wallet profile with an explicit clock.
///
/// Never fails: callers hand in one profile per chain, fallbacks included.
pub fn aggregate_at(
    address: &str,
    chains: Vec<ChainProfile>,
    formula: ScoreFormula,
    now: DateTime<Utc>,
) -> WalletProfile {
    let totals = chains.iter().fold(Totals::default(), Totals::add);

    // Fold left, replacing only on a strictly greater count, so ties keep
    // the earliest chain in configured order
    let most_active_chain = chains
        .iter()
        .fold(None::<&ChainProfile>, |best, current| match best {
            Some(prev) if current.tx_count <= prev.tx_count => Some(prev),
            _ => Some(current),
        })
        .map(|c| c.chain.clone())
        .unwrap_or_default();

    let lifetime_tx_count: u64 = chains.iter().map(|c| c.effective_lifetime_count()).sum();
    let first_tx_date = chains.iter().filter_map(|c| c.earliest_tx).min();
    let account_age_days = first_tx_date
        .map(|first| (now - first).num_days().max(0) as u64)
        .unwrap_or(0);
    let active_chains = chains.iter().filter(|c| c.is_active()).count() as u64;
    let degen_score = formula.score(&totals, active_chains, lifetime_tx_count);

    debug!(
        "Aggregated {} chains for {}: txs={}, lifetime={}, score={}",
        chains.len(),
        address,
        totals.tx,
        lifetime_tx_count,
        degen_score
    );

    WalletProfile {
        address: address.to_string(),
        chains,
        total_tx_count: totals.tx,
        total_swap_count: totals.swap,
        total_mint_count: totals.mint,
        total_transfer_count: totals.transfer,
        most_active_chain,
        lifetime_tx_count,
        first_tx_date,
        account_age_days,
        degen_score,
        formula,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChainConfig;
    use chrono::{Duration, TimeZone};

    fn chain(name: &str, id: u64, tx: u64) -> ChainProfile {
        ChainProfile {
            tx_count: tx,
            ..ChainProfile::empty(&ChainConfig::new(id, name))
        }
    }

    #[test]
    fn test_score_is_clamped() {
        let mut eth = chain("Ethereum", 1, 20);
        eth.swap_count = 50;
        let profile = aggregate("0xabc", vec![eth], ScoreFormula::MultiChain);
        assert_eq!(profile.degen_score, 100);

        let mut base = chain("Base", 8453, 10);
        base.swap_count = 50;
        let profile = aggregate("0xabc", vec![base], ScoreFormula::SingleChain);
        assert_eq!(profile.degen_score, 100);
    }

    #[test]
    fn test_huge_counts_saturate_to_max_score() {
        let totals = Totals {
            tx: u64::MAX,
            swap: u64::MAX / 2,
            mint: u64::MAX,
            transfer: 1,
        };
        assert_eq!(ScoreFormula::MultiChain.score(&totals, u64::MAX, u64::MAX), 100);
        assert_eq!(ScoreFormula::SingleChain.score(&totals, 0, 0), 100);
    }

    #[test]
    fn test_multi_chain_formula_weights() {
        let mut eth = chain("Ethereum", 1, 2);
        eth.transfer_count = 1;
        eth.lifetime_count = Some(55);
        let base = chain("Base", 8453, 0);

        // transfer 8 + tx 2×4 + one active chain 10 + min(20, 55/10) 5
        let profile = aggregate("0xabc", vec![eth, base], ScoreFormula::MultiChain);
        assert_eq!(profile.degen_score, 31);
        assert_eq!(profile.lifetime_tx_count, 55);
    }

    #[test]
    fn test_lifetime_bonus_caps_at_twenty() {
        let mut eth = chain("Ethereum", 1, 0);
        eth.lifetime_count = Some(10_000);
        let profile = aggregate("0xabc", vec![eth], ScoreFormula::MultiChain);
        assert_eq!(profile.degen_score, 20);
    }

    #[test]
    fn test_single_chain_formula_weights() {
        let mut base = chain("Base", 8453, 3);
        base.swap_count = 1;
        base.mint_count = 1;
        // 15 + 20 + 3×5
        let profile = aggregate("0xabc", vec![base], ScoreFormula::SingleChain);
        assert_eq!(profile.degen_score, 50);
        // No summary endpoint: lifetime falls back to the sample
        assert_eq!(profile.lifetime_tx_count, 3);
    }

    #[test]
    fn test_most_active_tie_keeps_first_chain() {
        let profile = aggregate(
            "0xabc",
            vec![chain("Ethereum", 1, 5), chain("Base", 8453, 5)],
            ScoreFormula::MultiChain,
        );
        assert_eq!(profile.most_active_chain, "Ethereum");

        let profile = aggregate(
            "0xabc",
            vec![chain("Ethereum", 1, 4), chain("Base", 8453, 5)],
            ScoreFormula::MultiChain,
        );
        assert_eq!(profile.most_active_chain, "Base");
    }

    #[test]
    fn test_all_zero_picks_first_chain_and_zero_score() {
        let profile = aggregate(
            "0xabc",
            vec![chain("Ethereum", 1, 0), chain("Base", 8453, 0)],
            ScoreFormula::MultiChain,
        );
        assert_eq!(profile.most_active_chain, "Ethereum");
        assert_eq!(profile.degen_score, 0);
        assert_eq!(profile.account_age_days, 0);
        assert!(profile.first_tx_date.is_none());
    }

    #[test]
    fn test_account_age_uses_earliest_across_chains() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let mut eth = chain("Ethereum", 1, 1);
        eth.earliest_tx = Some(now - Duration::days(40) - Duration::hours(5));
        let mut base = chain("Base", 8453, 1);
        base.earliest_tx = Some(now - Duration::days(3));

        let profile = aggregate_at("0xabc", vec![eth, base], ScoreFormula::MultiChain, now);
        assert_eq!(profile.account_age_days, 40);
        assert_eq!(profile.first_tx_date, Some(now - Duration::days(40) - Duration::hours(5)));
    }

    #[test]
    fn test_future_timestamp_never_yields_negative_age() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let mut eth = chain("Ethereum", 1, 1);
        eth.earliest_tx = Some(now + Duration::days(2));
        let profile = aggregate_at("0xabc", vec![eth], ScoreFormula::MultiChain, now);
        assert_eq!(profile.account_age_days, 0);
    }

    #[test]
    fn test_totals_are_sums() {
        let mut eth = chain("Ethereum", 1, 20);
        eth.swap_count = 3;
        eth.mint_count = 1;
        let mut base = chain("Base", 8453, 7);
        base.swap_count = 2;
        base.transfer_count = 4;

        let profile = aggregate("0xabc", vec![eth, base], ScoreFormula::MultiChain);
        assert_eq!(profile.total_tx_count, 27);
        assert_eq!(profile.total_swap_count, 5);
        assert_eq!(profile.total_mint_count, 1);
        assert_eq!(profile.total_transfer_count, 4);
        assert_eq!(profile.chains[0].chain, "Ethereum");
        assert_eq!(profile.chains[1].chain, "Base");
    }
}
