use thiserror::Error;

#[derive(Error, Debug)]
pub enum PendulumError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Argument outside numerical domain: {0}")]
    Domain(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PendulumError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

pub type PendulumResult<T> = Result<T, PendulumError>;
