use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Epi(#[from] EpiError),
}

pub type SimResult<T> = Result<T, SimError>;
