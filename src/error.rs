use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid ISA override: {0}")]
    InvalidIsaOverride(String),
    #[error("ISA {0} is not supported on this host")]
    UnsupportedIsa(&'static str),
    #[error("invalid vector length: {0}")]
    InvalidVl(String),
    #[error("invalid mask operand: {0}")]
    InvalidMask(String),
}

pub type BackendResult<T> = Result<T, BackendError>;
