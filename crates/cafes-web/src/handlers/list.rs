//! `GET /cafes` — every café, ordered by name.

use std::sync::Arc;

use axum::{extract::State, response::Html};
use cafes_core::store::CafeStore;

use crate::{error::Error, views};

pub async fn handler<S>(State(store): State<Arc<S>>) -> Result<Html<String>, Error>
where
  S: CafeStore,
{
  let cafes = store.list_all().await.map_err(Error::from_store)?;
  Ok(views::cafe_list(&cafes))
}
