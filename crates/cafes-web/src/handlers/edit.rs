//! `GET|POST /edit?id=<n>` — change every field of an existing café.

use std::sync::Arc;

use axum::{
  Form,
  extract::{Query, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use cafes_core::{
  CafeId,
  form::{RawFields, validate_and_normalize},
  store::CafeStore,
};

use crate::{
  error::Error,
  handlers::{IdParams, refused, write_failed},
  views,
};

const TITLE: &str = "Edit cafe";

fn action(id: CafeId) -> String { format!("/edit?id={id}") }

/// `GET /edit?id=<n>` — the form pre-filled with the stored values.
pub async fn form<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<IdParams>,
) -> Result<Html<String>, Error>
where
  S: CafeStore,
{
  let id = params.id()?;
  let cafe = store.get_by_id(id).await.map_err(Error::from_store)?;
  Ok(views::cafe_form(TITLE, &action(id), &views::fields_of(&cafe), None, None))
}

/// `POST /edit?id=<n>`
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<IdParams>,
  Form(raw): Form<RawFields>,
) -> Result<Response, Error>
where
  S: CafeStore,
{
  let id = params.id()?;
  let action = action(id);

  let cafe = match validate_and_normalize(&raw) {
    Ok(cafe) => cafe,
    Err(errors) => {
      tracing::warn!(id, %errors, "rejected cafe edit");
      return Ok(refused(
        StatusCode::UNPROCESSABLE_ENTITY,
        TITLE,
        &action,
        &raw,
        Some(&errors),
        None,
      ));
    }
  };

  match store.update(id, cafe).await {
    Ok(updated) => {
      tracing::info!(id, name = %updated.name, "cafe updated");
      Ok(Redirect::to("/cafes").into_response())
    }
    Err(e) => write_failed(e, TITLE, &action, &raw),
  }
}
