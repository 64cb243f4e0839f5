//! `GET|POST /delete?id=<n>` — remove a café permanently.

use std::sync::Arc;

use axum::{
  extract::{Query, State},
  response::Redirect,
};
use cafes_core::store::CafeStore;

use crate::{error::Error, handlers::IdParams};

pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<IdParams>,
) -> Result<Redirect, Error>
where
  S: CafeStore,
{
  let id = params.id()?;
  store.delete(id).await.map_err(Error::from_store)?;
  tracing::info!(id, "cafe deleted");
  Ok(Redirect::to("/cafes"))
}
