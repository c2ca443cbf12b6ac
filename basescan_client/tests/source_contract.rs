use basescan_client::BaseScanClient;
use config_manager::SystemConfig;
use horoscope_core::{ChainConfig, ChainDataSource, ClassificationRules, ScoreFormula, SourceError};

fn offline_client() -> BaseScanClient {
    let mut config = SystemConfig::default().basescan;
    config.api_key = "bs_test".to_string();
    config.api_base_url = "http://127.0.0.1:9/api".to_string();
    config.request_timeout_seconds = 2;
    BaseScanClient::new(config).unwrap()
}

#[test]
fn test_profiles_only_its_own_chain() {
    let client = offline_client();
    let configured = vec![ChainConfig::ethereum(), ChainConfig::new(10, "Optimism")];

    assert_eq!(client.chains(&configured), vec![ChainConfig::base()]);
    assert_eq!(client.rules(), ClassificationRules::MethodName);
    assert_eq!(client.formula(), ScoreFormula::SingleChain);
}

#[tokio::test]
async fn test_other_chain_is_rejected_without_a_request() {
    let client = offline_client();
    let result = client
        .fetch("0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3", &ChainConfig::ethereum())
        .await;

    assert_eq!(
        result,
        Err(SourceError::UnsupportedChain {
            provider: "BaseScan",
            chain: "Ethereum".to_string(),
        })
    );
}

#[tokio::test]
async fn test_unreachable_explorer_is_request_error() {
    let client = offline_client();
    let result = client
        .fetch("0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3", &ChainConfig::base())
        .await;

    assert!(matches!(result, Err(SourceError::Request { provider: "BaseScan", .. })));
}
