use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggError {
    #[error("Provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected provider payload: {message}")]
    ResponseFormat { message: String },

    #[error("No stored vacancies for keyword: {keyword}")]
    NotFound { keyword: String },

    #[error("Position {index} is out of range (stored set holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AggError {
    pub fn response_format(message: impl Into<String>) -> Self {
        AggError::ResponseFormat {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AggError>;
