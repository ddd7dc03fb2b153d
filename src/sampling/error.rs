use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
