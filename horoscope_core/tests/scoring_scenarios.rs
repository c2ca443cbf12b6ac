//! End-to-end scoring scenarios over the pure pipeline:
//! fetch result -> chain profile -> wallet profile -> zodiac reading

use chrono::{Duration, TimeZone, Utc};
use horoscope_core::{
    aggregate, aggregate_at, build_chain_profile, map_score, ChainConfig, ChainFetch,
    ChainProfile, ClassificationRules, GasEnergy, RawTransaction, ScoreFormula, ZodiacReading,
};

const WALLET: &str = "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3";

fn chains() -> Vec<ChainConfig> {
    vec![ChainConfig::ethereum(), ChainConfig::base()]
}

fn heavy_tx(i: u64) -> RawTransaction {
    RawTransaction {
        hash: Some(format!("0x{:064x}", i)),
        gas_spent: Some(150_000 + i),
        ..RawTransaction::new(WALLET, Some("0x00000000000000000000000000000000000000aa".to_string()))
    }
}

#[test]
fn test_zero_activity_wallet() {
    let profiles = chains()
        .iter()
        .map(|c| build_chain_profile(c, &ChainFetch::default(), ClassificationRules::GasAndDestination))
        .collect();

    let profile = aggregate(WALLET, profiles, ScoreFormula::MultiChain);

    assert_eq!(profile.degen_score, 0);
    assert_eq!(profile.most_active_chain, "Ethereum");
    assert_eq!(map_score(profile.degen_score).name, "SlowpokeLibra");
    assert!(profile.chains.iter().all(|c| c.success_rate == 100.0));
}

#[test]
fn test_ten_heavy_transactions_saturate_score() {
    let eth_fetch = ChainFetch {
        transactions: (0..10).map(heavy_tx).collect(),
        lifetime_count: Some(10),
    };
    let eth = build_chain_profile(&chains()[0], &eth_fetch, ClassificationRules::GasAndDestination);
    let base = build_chain_profile(&chains()[1], &ChainFetch::default(), ClassificationRules::GasAndDestination);

    assert_eq!(eth.swap_count, 10);

    let profile = aggregate(WALLET, vec![eth, base], ScoreFormula::MultiChain);
    assert_eq!(profile.degen_score, 100);
    assert_eq!(map_score(profile.degen_score).name, "DegenerateAries");
}

#[test]
fn test_nft_minter_transaction_is_mint_only() {
    let tx = RawTransaction {
        gas_spent: Some(50_000),
        value: "0".to_string(),
        success: true,
        ..RawTransaction::new(WALLET, Some("0xNFTMinter".to_string()))
    };
    let fetch = ChainFetch {
        transactions: vec![tx],
        lifetime_count: None,
    };
    let profile = build_chain_profile(&ChainConfig::base(), &fetch, ClassificationRules::GasAndDestination);

    assert_eq!(profile.mint_count, 1);
    assert_eq!(profile.swap_count, 0);
    assert_eq!(profile.transfer_count, 0);
    assert_eq!(profile.success_rate, 100.0);
}

#[test]
fn test_failed_chain_fallback_keeps_other_aggregates() {
    let eth_fetch = ChainFetch {
        transactions: vec![
            RawTransaction {
                value: "1000".to_string(),
                gas_spent: Some(21_000),
                ..RawTransaction::new(WALLET, Some("0xfriend".to_string()))
            },
            heavy_tx(1),
        ],
        lifetime_count: Some(80),
    };
    let eth = build_chain_profile(&chains()[0], &eth_fetch, ClassificationRules::GasAndDestination);
    let base = ChainProfile::empty(&chains()[1]);

    let profile = aggregate(WALLET, vec![eth, base], ScoreFormula::MultiChain);

    assert_eq!(profile.chains.len(), 2);
    let base = &profile.chains[1];
    assert_eq!(base.chain, "Base");
    assert_eq!(base.tx_count, 0);
    assert_eq!(base.success_rate, 100.0);

    assert_eq!(profile.total_tx_count, 2);
    assert_eq!(profile.total_swap_count, 1);
    assert_eq!(profile.total_transfer_count, 1);
    assert_eq!(profile.lifetime_tx_count, 80);
    // 12 + 8 + 2×4 + 10 + min(20, 8)
    assert_eq!(profile.degen_score, 46);
    assert_eq!(profile.most_active_chain, "Ethereum");
}

#[test]
fn test_reading_for_busy_young_wallet() {
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
    let mut txs: Vec<RawTransaction> = (0..6).map(heavy_tx).collect();
    for (i, tx) in txs.iter_mut().enumerate() {
        tx.timestamp = Some(now - Duration::days(i as i64));
    }
    let fetch = ChainFetch {
        transactions: txs,
        lifetime_count: Some(600),
    };
    let eth = build_chain_profile(&chains()[0], &fetch, ClassificationRules::GasAndDestination);
    let profile = aggregate_at(WALLET, vec![eth], ScoreFormula::MultiChain, now);

    assert_eq!(profile.account_age_days, 5);
    let reading = ZodiacReading::from_profile(&profile);
    // 600 lifetime txs over 5 days
    assert_eq!(reading.gas_energy, GasEnergy::High);
    assert_eq!(reading.sign.name, "DegenerateAries");
    assert!(reading.cosmic_keywords.contains(&"Mercury Retrograde Alert"));
    assert!(reading.compatibility.starts_with("Compatible with ChartistVirgo"));
}
