use thiserror::Error;

#[derive(Error, Debug)]
pub enum DinoError {
    #[error("Dinosaur catalog is still loading")]
    CatalogNotReady,

    #[error("Dinosaur catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Malformed dinosaur record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Invalid value for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DinoError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        DinoError::InvalidInput {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DinoError>;
