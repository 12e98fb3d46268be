//! Error types for `staffdesk-core`.
//!
//! Domain outcomes (unknown ids, failed validation) are not errors here:
//! store operations report them through their return values and
//! [`crate::validate`] has its own [`ValidationError`].
//!
//! [`ValidationError`]: crate::validate::ValidationError

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
