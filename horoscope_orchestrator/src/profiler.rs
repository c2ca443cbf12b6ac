use std::sync::Arc;

use config_manager::SystemConfig;
use futures::future::join_all;
use horoscope_core::{
    aggregate, build_chain_profile, validate_wallet_address, ChainConfig, ChainDataSource,
    ChainProfile, WalletProfile,
};
use tracing::{info, warn};

use crate::Result;

/// Fetches every chain concurrently and folds the results into one profile
#[derive(Clone)]
pub struct WalletProfiler {
    source: Arc<dyn ChainDataSource>,
    chains: Vec<ChainConfig>,
}

impl WalletProfiler {
    pub fn new(source: Arc<dyn ChainDataSource>, configured: &[ChainConfig]) -> Self {
        let chains = source.chains(configured);
        Self { source, chains }
    }

    pub fn from_config(source: Arc<dyn ChainDataSource>, config: &SystemConfig) -> Self {
        let configured: Vec<ChainConfig> = config
            .chains
            .iter()
            .map(|c| ChainConfig::new(c.id, c.name.clone()))
            .collect();
        Self::new(source, &configured)
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn chains(&self) -> &[ChainConfig] {
        &self.chains
    }

    /// One profile slot per chain, in chain order. A failed fetch leaves an
    /// all-zero profile in its slot, keeping any lifetime count the source
    /// already had, and never affects the other chains.
    pub async fn profile_wallet(&self, address: &str) -> Result<WalletProfile> {
        validate_wallet_address(address)?;

        info!(
            "Profiling {} on {} chain(s) via {}",
            address,
            self.chains.len(),
            self.source.name()
        );

        let rules = self.source.rules();
        let fetches = self.chains.iter().map(|chain| async move {
            match self.source.fetch(address, chain).await {
                Ok(fetch) => build_chain_profile(chain, &fetch, rules),
                Err(e) => {
                    warn!("Error fetching {} data for {}: {}", chain.name, address, e);
                    ChainProfile {
                        lifetime_count: e.lifetime_count(),
                        ..ChainProfile::empty(chain)
                    }
                }
            }
        });

        let profiles = join_all(fetches).await;
        let profile = aggregate(address, profiles, self.source.formula());

        info!(
            "Profile for {}: score {}, most active on {}",
            address, profile.degen_score, profile.most_active_chain
        );
        Ok(profile)
    }
}
