//! Session handling for Staffdesk: the credential table and the
//! [`SessionStore`] that signs users in and out.
//!
//! The store persists the signed-in user through any
//! [`staffdesk_core::slot::SessionSlot`] so a session survives a restart.
//! The credential table itself is process-lifetime only.

mod session;

pub mod credentials;
pub mod error;

pub use credentials::CredentialTable;
pub use error::{Error, Result};
pub use session::{SessionConfig, SessionStore};

#[cfg(test)]
mod tests;
