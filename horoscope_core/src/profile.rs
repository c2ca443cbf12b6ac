use crate::classifier::{classify, ClassificationRules};
use crate::types::{ChainConfig, ChainFetch, ChainProfile};

/// Build the per-chain summary from one adapter result.
///
/// The earliest timestamp only covers the sampled window, so wallets with
/// history beyond it report a younger account age.
pub fn build_chain_profile(
    chain: &ChainConfig,
    fetch: &ChainFetch,
    rules: ClassificationRules,
) -> ChainProfile {
    let counts = classify(&fetch.transactions, rules);
    let earliest_tx = fetch
        .transactions
        .iter()
        .filter_map(|tx| tx.timestamp)
        .min();

    ChainProfile {
        chain: chain.name.clone(),
        chain_id: chain.id,
        tx_count: counts.total,
        swap_count: counts.swap_count,
        mint_count: counts.mint_count,
        transfer_count: counts.transfer_count,
        total_gas_spent: counts.total_gas_spent,
        success_rate: counts.success_rate(),
        lifetime_count: fetch.lifetime_count,
        earliest_tx,
    }
}
