use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    InternalServerError,
}
