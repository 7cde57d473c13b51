use thiserror::Error;

use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::ports::ActivityStoreError;

pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

impl ApplicationError {
    /// Text shown to callers. Only domain rejections are passed through.
    pub fn public_detail(&self) -> String {
        match self {
            ApplicationError::Domain(reason) => reason.to_string(),
            ApplicationError::Store(_) => INTERNAL_ERROR_DETAIL.to_string(),
        }
    }
}
