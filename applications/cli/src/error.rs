/// Application error types
use thiserror::Error;
use tunebox_core::TuneboxError;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Tunebox(#[from] TuneboxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tunebox_storage::StorageError> for AppError {
    fn from(err: tunebox_storage::StorageError) -> Self {
        // StorageError -> TuneboxError -> AppError
        AppError::Tunebox(err.into())
    }
}

impl From<tunebox_catalog::CatalogError> for AppError {
    fn from(err: tunebox_catalog::CatalogError) -> Self {
        AppError::Tunebox(err.into())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
