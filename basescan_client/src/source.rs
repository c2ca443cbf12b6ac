use async_trait::async_trait;
use horoscope_core::{
    ChainConfig, ChainDataSource, ChainFetch, ClassificationRules, ScoreFormula, SourceError,
};

use crate::{client::BaseScanClient, error::BaseScanError, PROVIDER_NAME};

#[async_trait]
impl ChainDataSource for BaseScanClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn rules(&self) -> ClassificationRules {
        ClassificationRules::MethodName
    }

    fn formula(&self) -> ScoreFormula {
        ScoreFormula::SingleChain
    }

    /// Always the explorer's own chain, whatever the configured list says
    fn chains(&self, _configured: &[ChainConfig]) -> Vec<ChainConfig> {
        vec![self.chain()]
    }

    async fn fetch(&self, address: &str, chain: &ChainConfig) -> Result<ChainFetch, SourceError> {
        if chain.id != self.chain().id {
            return Err(BaseScanError::UnsupportedChain(chain.name.clone()).into());
        }

        let rows = self.get_recent_transactions(address).await?;

        // The explorer has no summary endpoint
        Ok(ChainFetch {
            transactions: rows.iter().map(|tx| tx.to_raw_transaction()).collect(),
            lifetime_count: None,
        })
    }
}
