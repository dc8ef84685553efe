use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset:{0} not found")]
    NotFound(String),

    #[error("Malformed asset document: {0}")]
    Malformed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Certificate error: {0}")]
    Certificate(#[from] openssl::error::ErrorStack),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;
