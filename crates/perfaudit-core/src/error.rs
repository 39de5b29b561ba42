//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerfAuditError {
    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("EXTRACT/{0}")]
    ExtractError(String),

    #[error("STORE/{0}")]
    StoreError(String),
}
