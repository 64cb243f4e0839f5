//! The `CafeStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `cafes-store-sqlite`).
//! The web layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Error,
  cafe::{Cafe, CafeId, NewCafe},
};

/// Backend errors expose the core error kind they carry, if any, so callers
/// can tell `NotFound` and `DuplicateName` apart from driver failures.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn as_core(&self) -> Option<&Error>;
}

/// Abstraction over a café store backend.
///
/// Every mutating method is atomic: either the whole write lands or none of
/// it does. All methods return `Send` futures so the trait can be used from
/// axum handlers on a multi-threaded runtime.
pub trait CafeStore: Send + Sync {
  type Error: StoreError;

  /// Every café, ordered by `name` ascending.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Cafe>, Self::Error>> + Send + '_;

  /// Fails with [`Error::NotFound`] when no café has `id`.
  fn get_by_id(
    &self,
    id: CafeId,
  ) -> impl Future<Output = Result<Cafe, Self::Error>> + Send + '_;

  /// Persist a new café and return it with its freshly assigned id.
  ///
  /// Fails with [`Error::DuplicateName`] if the name is taken, or
  /// [`Error::IntegrityViolation`] if the commit hits a constraint.
  fn create(
    &self,
    cafe: NewCafe,
  ) -> impl Future<Output = Result<Cafe, Self::Error>> + Send + '_;

  /// Overwrite every field of the café with `id`.
  ///
  /// Fails with [`Error::NotFound`] if absent, or [`Error::DuplicateName`] if
  /// another café already uses the new name.
  fn update(
    &self,
    id: CafeId,
    cafe: NewCafe,
  ) -> impl Future<Output = Result<Cafe, Self::Error>> + Send + '_;

  /// Permanently remove the café with `id`. Fails with [`Error::NotFound`].
  fn delete(
    &self,
    id: CafeId,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
