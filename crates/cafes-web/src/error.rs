//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use cafes_core::store::StoreError;
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum Error {
  #[error("not found")]
  NotFound,
  #[error("conflict: {0}")]
  Conflict(String),
  #[error("bad request: {0}")]
  BadRequest(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Classify a backend error by the core error kind it carries.
  pub fn from_store<E: StoreError>(err: E) -> Self {
    match err.as_core() {
      Some(cafes_core::Error::NotFound(_)) => Error::NotFound,
      Some(cafes_core::Error::DuplicateName(name)) => {
        Error::Conflict(format!("A cafe named {name:?} already exists."))
      }
      Some(cafes_core::Error::IntegrityViolation(_)) => {
        tracing::warn!(error = %err, "write rejected by the database");
        Error::Conflict("The cafe could not be saved. Please try again.".into())
      }
      None => Error::Store(Box::new(err)),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::NotFound => (
        StatusCode::NOT_FOUND,
        views::message("Not Found", "No cafe with that id exists."),
      )
        .into_response(),
      Error::Conflict(msg) => {
        (StatusCode::CONFLICT, views::message("Conflict", &msg)).into_response()
      }
      Error::BadRequest(msg) => {
        (StatusCode::BAD_REQUEST, views::message("Bad Request", &msg))
          .into_response()
      }
      Error::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          views::message("Error", "Something went wrong. Please try again."),
        )
          .into_response()
      }
    }
  }
}
