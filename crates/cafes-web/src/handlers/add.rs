//! `GET|POST /add` — create a café.

use std::sync::Arc;

use axum::{
  Form,
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
};
use cafes_core::{
  form::{RawFields, validate_and_normalize},
  store::CafeStore,
};

use crate::{
  error::Error,
  handlers::{refused, write_failed},
  views,
};

const TITLE: &str = "Add a new cafe";
const ACTION: &str = "/add";

/// `GET /add`
pub async fn form() -> Html<String> {
  views::cafe_form(TITLE, ACTION, &RawFields::new(), None, None)
}

/// `POST /add`
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Form(raw): Form<RawFields>,
) -> Result<Response, Error>
where
  S: CafeStore,
{
  let cafe = match validate_and_normalize(&raw) {
    Ok(cafe) => cafe,
    Err(errors) => {
      tracing::warn!(%errors, "rejected new cafe");
      return Ok(refused(
        StatusCode::UNPROCESSABLE_ENTITY,
        TITLE,
        ACTION,
        &raw,
        Some(&errors),
        None,
      ));
    }
  };

  match store.create(cafe).await {
    Ok(created) => {
      tracing::info!(id = created.id, name = %created.name, "cafe added");
      Ok(Redirect::to("/cafes").into_response())
    }
    Err(e) => write_failed(e, TITLE, ACTION, &raw),
  }
}
