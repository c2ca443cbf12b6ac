use horoscope_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {message}")]
    ApiError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Authentication failed")]
    AuthError,

    #[error("Rate limit exceeded")]
    RateLimit,
}

impl From<OpenAiError> for CoreError {
    fn from(err: OpenAiError) -> Self {
        CoreError::Narrative(err.to_string())
    }
}
