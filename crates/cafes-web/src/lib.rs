//! HTML front end for the café directory.
//!
//! Exposes an axum [`Router`] serving server-rendered forms, backed by any
//! [`CafeStore`].

pub mod error;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use cafes_core::store::CafeStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{add, delete, edit, list};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CAFES_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "127.0.0.1";
  pub const DEFAULT_PORT: u16 = 5000;
  pub const DEFAULT_DATABASE_PATH: &'static str = "cafes.db";
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`] for `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: CafeStore + 'static,
{
  Router::new()
    .route("/", get(handlers::home))
    .route("/cafes", get(list::handler::<S>))
    .route("/add", get(add::form).post(add::submit::<S>))
    .route("/edit", get(edit::form::<S>).post(edit::submit::<S>))
    .route("/delete", get(delete::handler::<S>).post(delete::handler::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
