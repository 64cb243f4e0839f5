//! Error type for `cafes-store-sqlite`.

use cafes_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] cafes_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl Error {
  /// Route constraint failures raised at commit time to
  /// [`cafes_core::Error::IntegrityViolation`]; everything else stays a
  /// database error.
  pub(crate) fn from_call(err: tokio_rusqlite::Error) -> Self {
    match err {
      tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(
        failure,
        message,
      )) if failure.code == rusqlite::ErrorCode::ConstraintViolation => {
        Error::Core(cafes_core::Error::IntegrityViolation(
          message.unwrap_or_else(|| failure.to_string()),
        ))
      }
      other => Error::Database(other),
    }
  }
}

impl StoreError for Error {
  fn as_core(&self) -> Option<&cafes_core::Error> {
    match self {
      Error::Core(e) => Some(e),
      Error::Database(_) => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
