use thiserror::Error;

use pn_core::PnError;

#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("facility table parse error: {0}")]
    Parse(String),

    #[error("duplicate facility name {0:?}")]
    DuplicateName(String),

    #[error("facility table is empty")]
    Empty,

    #[error(transparent)]
    Core(#[from] PnError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FacilityResult<T> = Result<T, FacilityError>;
