use horoscope_core::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoldRushError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Authentication failed")]
    AuthError,
}

impl From<GoldRushError> for SourceError {
    fn from(err: GoldRushError) -> Self {
        let provider = crate::PROVIDER_NAME;
        match err {
            GoldRushError::HttpError(e) => SourceError::Request {
                provider,
                message: e.to_string(),
            },
            GoldRushError::JsonError(e) => SourceError::Parse {
                provider,
                message: e.to_string(),
            },
            GoldRushError::ParseError { message } => SourceError::Parse { provider, message },
            other => SourceError::Api {
                provider,
                message: other.to_string(),
            },
        }
    }
}
