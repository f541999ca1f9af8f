use thiserror::Error;

use crate::crew::CrewError;

#[derive(Error, Debug)]
pub enum BotaError {
    #[error(transparent)]
    Crew(#[from] CrewError),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BotaError>;
