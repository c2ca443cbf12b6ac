use async_trait::async_trait;
use thiserror::Error;

use crate::aggregator::ScoreFormula;
use crate::classifier::ClassificationRules;
use crate::types::{ChainConfig, ChainFetch};

/// Failure of a single chain fetch. Recovered per chain by the profiler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("{provider} request failed: {message}")]
    Request {
        provider: &'static str,
        message: String,
    },
    #[error("{provider} API error: {message}")]
    Api {
        provider: &'static str,
        message: String,
    },
    #[error("{provider} response could not be parsed: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },
    #[error("{provider} does not serve chain {chain}")]
    UnsupportedChain {
        provider: &'static str,
        chain: String,
    },
    /// The transaction list failed after the lifetime summary answered
    #[error("{error} (lifetime count {lifetime_count} kept)")]
    ListFailed {
        lifetime_count: u64,
        error: Box<SourceError>,
    },
}

impl SourceError {
    /// Attach a lifetime count fetched before this error occurred
    pub fn with_lifetime_count(self, lifetime_count: u64) -> Self {
        SourceError::ListFailed {
            lifetime_count,
            error: Box::new(self),
        }
    }

    /// Lifetime count that survived the failure, if the summary answered
    pub fn lifetime_count(&self) -> Option<u64> {
        match self {
            SourceError::ListFailed { lifetime_count, .. } => Some(*lifetime_count),
            _ => None,
        }
    }
}

/// A blockchain-indexing provider able to return a wallet's recent
/// transactions on one chain.
///
/// Implementations issue at most two calls per fetch (an optional lifetime
/// summary, then the bounded transaction list) and never retry. A summary
/// failure must be absorbed as a lifetime count of 0; only a list failure
/// is reported as an error, carrying any lifetime count already fetched
/// through [`SourceError::with_lifetime_count`].
#[async_trait]
pub trait ChainDataSource: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Classification rule set matching the data this provider exposes
    fn rules(&self) -> ClassificationRules;

    /// Score formula applied to profiles built from this provider
    fn formula(&self) -> ScoreFormula;

    /// Chains this provider will profile, given the configured list
    fn chains(&self, configured: &[ChainConfig]) -> Vec<ChainConfig> {
        configured.to_vec()
    }

    async fn fetch(&self, address: &str, chain: &ChainConfig) -> Result<ChainFetch, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_count_survives_list_failure() {
        let list_error = SourceError::Api {
            provider: "GoldRush",
            message: "HTTP 500".to_string(),
        };
        assert_eq!(list_error.lifetime_count(), None);

        let error = list_error.with_lifetime_count(500);
        assert_eq!(error.lifetime_count(), Some(500));
        assert!(error.to_string().starts_with("GoldRush API error: HTTP 500"));
    }
}
