use thiserror::Error;

use crate::configs::ConfigError;

#[derive(Debug, Error)]
pub enum FlairsError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
