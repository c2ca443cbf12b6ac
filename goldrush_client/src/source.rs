use async_trait::async_trait;
use horoscope_core::{
    ChainConfig, ChainDataSource, ChainFetch, ClassificationRules, RawTransaction, ScoreFormula,
    SourceError,
};
use tracing::{debug, warn};

use crate::{client::GoldRushClient, types::TransactionRequest, PROVIDER_NAME};

#[async_trait]
impl ChainDataSource for GoldRushClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn rules(&self) -> ClassificationRules {
        ClassificationRules::GasAndDestination
    }

    fn formula(&self) -> ScoreFormula {
        ScoreFormula::MultiChain
    }

    async fn fetch(&self, address: &str, chain: &ChainConfig) -> Result<ChainFetch, SourceError> {
        // The summary is optional context; only the transaction list can fail a chain
        let summary = match self.get_transaction_count(address, chain.id).await {
            Ok(count) => Some(count),
            Err(e) => {
                debug!(
                    "Summary unavailable for {} on {}: {}",
                    address, chain.name, e
                );
                None
            }
        };

        let request = TransactionRequest {
            wallet_address: address.to_string(),
            chain_id: chain.id,
            page_size: self.page_size(),
            no_logs: true,
        };

        let items = self.get_recent_transactions(&request).await.map_err(|e| {
            warn!("Transaction list failed for {} on {}: {}", address, chain.name, e);
            match summary {
                Some(count) => SourceError::from(e).with_lifetime_count(count),
                None => SourceError::from(e),
            }
        })?;

        let transactions: Vec<RawTransaction> =
            items.iter().map(|tx| tx.to_raw_transaction()).collect();

        Ok(ChainFetch {
            transactions,
            lifetime_count: Some(summary.unwrap_or(0)),
        })
    }
}
