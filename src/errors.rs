use thiserror::Error;

/// Errors surfaced by the rating workflow.
///
/// `NotFound` and `Validation` are terminal from the caller's point of view:
/// no retry helps and no partial write has happened. Storage failures carry
/// the underlying database error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("app not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
