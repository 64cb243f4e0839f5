pub mod add;
pub mod delete;
pub mod edit;
pub mod list;

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use cafes_core::{
  CafeId,
  form::{RawFields, ValidationErrors},
  store::StoreError,
};
use serde::Deserialize;

use crate::{error::Error, views};

/// `?id=<n>` as used by the edit and delete pages.
#[derive(Debug, Deserialize)]
pub struct IdParams {
  pub id: Option<String>,
}

impl IdParams {
  pub(crate) fn id(&self) -> Result<CafeId, Error> {
    let raw = self
      .id
      .as_deref()
      .ok_or_else(|| Error::BadRequest("missing cafe id".to_string()))?;
    raw
      .trim()
      .parse()
      .map_err(|_| Error::BadRequest(format!("invalid cafe id: {raw:?}")))
  }
}

/// `GET /`
pub async fn home() -> Html<String> { views::home() }

/// Redisplay the add/edit form after a refused submission.
pub(crate) fn refused(
  status: StatusCode,
  title: &str,
  action: &str,
  values: &RawFields,
  errors: Option<&ValidationErrors>,
  notice: Option<&str>,
) -> Response {
  (status, views::cafe_form(title, action, values, errors, notice)).into_response()
}

/// Turn a failed create/update into a response. A duplicate name keeps the
/// user on the form; anything else becomes an [`Error`].
pub(crate) fn write_failed<E: StoreError>(
  err: E,
  title: &str,
  action: &str,
  values: &RawFields,
) -> Result<Response, Error> {
  if let Some(cafes_core::Error::DuplicateName(name)) = err.as_core() {
    tracing::warn!(name = %name, "cafe name already taken");
    let notice = format!("A cafe named {name:?} already exists.");
    return Ok(refused(StatusCode::CONFLICT, title, action, values, None, Some(&notice)));
  }
  Err(Error::from_store(err))
}
