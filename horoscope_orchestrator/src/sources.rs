use std::sync::Arc;

use basescan_client::BaseScanClient;
use config_manager::SystemConfig;
use goldrush_client::GoldRushClient;
use horoscope_core::ChainDataSource;
use tracing::info;

use crate::{OrchestratorError, Result};

/// Pick the chain-data provider from the configured credentials.
/// GoldRush wins when its key is set, BaseScan is the fallback, and no
/// key at all is a configuration error.
pub fn select_source(config: &SystemConfig) -> Result<Arc<dyn ChainDataSource>> {
    if !config.has_chain_data_provider() {
        return Err(OrchestratorError::Config(
            "No API key configured (COVALENT_API_KEY or BASESCAN_API_KEY)".to_string(),
        ));
    }

    if config.goldrush.is_configured() {
        let client = GoldRushClient::new(config.goldrush.clone())
            .map_err(|e| OrchestratorError::Config(e.to_string()))?;
        info!("Using GoldRush multi-chain data across {} chains", config.chains.len());
        return Ok(Arc::new(client));
    }

    let client = BaseScanClient::new(config.basescan.clone())
        .map_err(|e| OrchestratorError::Config(e.to_string()))?;
    info!("Using BaseScan data for {}", config.basescan.chain_name);
    Ok(Arc::new(client))
}
