use horoscope_core::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaseScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Chain {0} is not served by this explorer")]
    UnsupportedChain(String),
}

impl From<BaseScanError> for SourceError {
    fn from(err: BaseScanError) -> Self {
        let provider = crate::PROVIDER_NAME;
        match err {
            BaseScanError::HttpError(e) => SourceError::Request {
                provider,
                message: e.to_string(),
            },
            BaseScanError::ParseError { message } => SourceError::Parse { provider, message },
            BaseScanError::UnsupportedChain(chain) => SourceError::UnsupportedChain { provider, chain },
            other => SourceError::Api {
                provider,
                message: other.to_string(),
            },
        }
    }
}
