use thiserror::Error;

#[derive(Debug, Error)]
pub enum BilayerError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, BilayerError>;
