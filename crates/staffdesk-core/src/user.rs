//! Users and the authentication state they live in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, role::Role};

/// An authenticated identity. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:         Uuid,
  /// Unique within the credential table; compared case-sensitively.
  pub email:      String,
  pub first_name: String,
  pub last_name:  String,
  pub role:       Role,
}

impl User {
  /// Encode for the session slot.
  pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string(self)?) }

  /// Decode a session slot payload.
  pub fn from_json(raw: &str) -> Result<Self> { Ok(serde_json::from_str(raw)?) }

  pub fn display_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

// ─── Session state ───────────────────────────────────────────────────────────

/// Where the session lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
  Anonymous,
  /// A login or signup is in flight.
  Authenticating,
  Authenticated,
}

/// Snapshot of the session. A user is present exactly when authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
  pub user:    Option<User>,
  /// True only while a login or signup is waiting on its round trip.
  pub loading: bool,
}

impl AuthState {
  pub fn anonymous() -> Self { Self::default() }

  pub fn authenticated(user: User) -> Self {
    Self { user: Some(user), loading: false }
  }

  pub fn is_authenticated(&self) -> bool { self.user.is_some() }

  pub fn phase(&self) -> SessionPhase {
    match (self.loading, &self.user) {
      (true, _) => SessionPhase::Authenticating,
      (false, Some(_)) => SessionPhase::Authenticated,
      (false, None) => SessionPhase::Anonymous,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn user() -> User {
    User {
      id:         Uuid::new_v4(),
      email:      "jo@company.com".into(),
      first_name: "Jo".into(),
      last_name:  "March".into(),
      role:       Role::Manager,
    }
  }

  #[test]
  fn slot_payload_round_trips() {
    let u = user();
    let back = User::from_json(&u.to_json().unwrap()).unwrap();
    assert_eq!(back, u);
  }

  #[test]
  fn slot_payload_has_no_password_field() {
    let json = user().to_json().unwrap();
    assert!(!json.contains("password"));
  }

  #[test]
  fn garbage_payload_is_an_error() {
    assert!(User::from_json("{not json").is_err());
    assert!(User::from_json("{\"email\":\"x\"}").is_err());
  }

  #[test]
  fn phase_follows_state() {
    assert_eq!(AuthState::anonymous().phase(), SessionPhase::Anonymous);
    let mut s = AuthState::authenticated(user());
    assert!(s.is_authenticated());
    assert_eq!(s.phase(), SessionPhase::Authenticated);
    s.loading = true;
    assert_eq!(s.phase(), SessionPhase::Authenticating);
  }
}
