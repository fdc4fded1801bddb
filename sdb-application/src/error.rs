use sdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use sdb_core::repositories;

// The uniform error type at the application boundary. Callers distinguish
// parameter/validation failures from missing records and from storage
// failures via the nested business error; everything else is internal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        // Storage errors that bubbled up through a usecase are unwrapped so
        // that a missing record is always classified the same way, no
        // matter which layer noticed it.
        match err {
            ParameterError::Repo(err) => AppError::Business(BError::Repo(err)),
            err => AppError::Business(BError::Parameter(err)),
        }
    }
}

impl AppError {
    // Missing records get their own response handling in the web layer.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Business(BError::Repo(RepoError::NotFound))
        )
    }
}
