//! Error types for `cafes-core`.

use thiserror::Error;

use crate::cafe::CafeId;

/// Store-level failures. Per-field validation failures are reported
/// separately as [`crate::form::ValidationErrors`].
#[derive(Debug, Error)]
pub enum Error {
  #[error("a cafe named {0:?} already exists")]
  DuplicateName(String),

  #[error("cafe not found: {0}")]
  NotFound(CafeId),

  /// The backing store rejected a commit on a constraint, e.g. two writers
  /// racing past the duplicate-name pre-check.
  #[error("integrity violation: {0}")]
  IntegrityViolation(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
