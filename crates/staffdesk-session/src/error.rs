//! Error type for `staffdesk-session`.
//!
//! Bad credentials and duplicate signups are not errors; they come back as
//! `Ok(false)`. These variants cover the session store's own failures and a
//! request that a logout overtook.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Another login or signup is still waiting on its round trip.
  #[error("a login or signup is already in progress")]
  Busy,

  /// A logout landed while the request was in flight; its result was
  /// discarded.
  #[error("the session was signed out while the request was in flight")]
  Superseded,

  #[error("core error: {0}")]
  Core(#[from] staffdesk_core::Error),

  #[error("password hashing failed: {0}")]
  Hash(String),

  #[error("session slot error: {0}")]
  Slot(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn slot(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Slot(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
