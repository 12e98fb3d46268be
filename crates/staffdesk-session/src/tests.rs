//! Behavioural tests for `SessionStore` against an in-memory slot.

use std::{io, sync::Arc, time::Duration};

use staffdesk_core::{
  role::Role,
  slot::{MemorySlot, SessionSlot},
  user::{SessionPhase, User},
};
use uuid::Uuid;

use crate::{CredentialTable, Error, SessionConfig, SessionStore};

fn instant() -> SessionConfig { SessionConfig { latency: Duration::ZERO } }

async fn store_with(slot: MemorySlot, config: SessionConfig) -> SessionStore<MemorySlot> {
  SessionStore::restore(slot, CredentialTable::demo().expect("demo table"), config)
    .await
    .expect("restore")
}

async fn store() -> (SessionStore<MemorySlot>, MemorySlot) {
  let slot = MemorySlot::new();
  (store_with(slot.clone(), instant()).await, slot)
}

fn stored_user(slot: &MemorySlot) -> Option<User> {
  slot.peek().and_then(|raw| User::from_json(&raw).ok())
}

// ─── Startup ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_slot_starts_anonymous() {
  let (s, _) = store().await;
  let state = s.state();
  assert_eq!(state.phase(), SessionPhase::Anonymous);
  assert!(state.user.is_none());
  assert!(!state.loading);
}

#[tokio::test]
async fn stored_user_is_resumed() {
  let user = User {
    id:         Uuid::new_v4(),
    email:      "kept@company.com".into(),
    first_name: "Kept".into(),
    last_name:  "Session".into(),
    role:       Role::Developer,
  };
  let slot = MemorySlot::with_value(user.to_json().unwrap());
  let s = store_with(slot, instant()).await;

  let state = s.state();
  assert_eq!(state.phase(), SessionPhase::Authenticated);
  assert_eq!(state.user, Some(user));
}

#[tokio::test]
async fn corrupt_slot_is_cleared() {
  let slot = MemorySlot::with_value("{\"id\": 12, oops");
  let s = store_with(slot.clone(), instant()).await;

  assert_eq!(s.state().phase(), SessionPhase::Anonymous);
  assert!(slot.peek().is_none());
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_with_demo_admin() {
  let (s, slot) = store().await;

  assert!(s.login("admin@company.com", "admin123").await.unwrap());

  let state = s.state();
  assert!(state.is_authenticated());
  assert!(!state.loading);
  assert_eq!(state.user.as_ref().unwrap().email, "admin@company.com");

  let persisted = stored_user(&slot).expect("slot holds the user");
  assert_eq!(persisted.email, "admin@company.com");
  assert!(!slot.peek().unwrap().contains("admin123"));
}

#[tokio::test]
async fn wrong_password_leaves_anonymous() {
  let (s, slot) = store().await;

  assert!(!s.login("admin@company.com", "wrong").await.unwrap());

  let state = s.state();
  assert!(!state.is_authenticated());
  assert!(!state.loading);
  assert!(slot.peek().is_none());
}

#[tokio::test]
async fn wrong_password_keeps_existing_session() {
  let (s, _) = store().await;
  assert!(s.login("manager@company.com", "manager123").await.unwrap());

  assert!(!s.login("admin@company.com", "nope").await.unwrap());

  let state = s.state();
  assert!(state.is_authenticated());
  assert_eq!(state.user.unwrap().email, "manager@company.com");
}

#[tokio::test]
async fn email_match_is_case_sensitive() {
  let (s, _) = store().await;
  assert!(!s.login("ADMIN@company.com", "admin123").await.unwrap());
}

// ─── Signup ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn signup_duplicate_email_is_rejected() {
  let (s, slot) = store().await;
  let before = s.credential_count();

  let ok = s
    .signup("admin@company.com", "Another1pass", "Copy", "Cat")
    .await
    .unwrap();

  assert!(!ok);
  assert_eq!(s.credential_count(), before);
  assert!(!s.state().is_authenticated());
  assert!(!s.state().loading);
  assert!(slot.peek().is_none());
}

#[tokio::test]
async fn signup_creates_employee_and_signs_in() {
  let (s, slot) = store().await;

  assert!(s.signup("new@company.com", "Fresh1pass", "New", "Hire").await.unwrap());

  let user = s.state().user.expect("signed in");
  assert_eq!(user.role, Role::Employee);
  assert_eq!(user.first_name, "New");
  assert_eq!(s.credential_count(), 3);
  assert_eq!(stored_user(&slot), Some(user));

  // The new account can sign in again after logging out.
  s.logout().await.unwrap();
  assert!(s.login("new@company.com", "Fresh1pass").await.unwrap());
}

// ─── Logout ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn logout_clears_slot_and_restart_is_anonymous() {
  let (s, slot) = store().await;
  s.login("admin@company.com", "admin123").await.unwrap();

  s.logout().await.unwrap();

  assert_eq!(s.state().phase(), SessionPhase::Anonymous);
  assert!(stored_user(&slot).is_none());

  let restarted = store_with(slot, instant()).await;
  assert_eq!(restarted.state().phase(), SessionPhase::Anonymous);
}

#[tokio::test]
async fn logout_when_anonymous_is_harmless() {
  let (s, _) = store().await;
  s.logout().await.unwrap();
  assert!(!s.state().is_authenticated());
}

// ─── In-flight behaviour ─────────────────────────────────────────────────────

fn slow() -> SessionConfig {
  SessionConfig { latency: Duration::from_millis(200) }
}

#[tokio::test]
async fn second_login_while_in_flight_is_busy() {
  let s = Arc::new(store_with(MemorySlot::new(), slow()).await);

  let first = {
    let s = Arc::clone(&s);
    tokio::spawn(async move { s.login("admin@company.com", "admin123").await })
  };
  tokio::time::sleep(Duration::from_millis(20)).await;

  assert!(s.is_loading());
  assert_eq!(s.state().phase(), SessionPhase::Authenticating);
  assert!(matches!(
    s.login("manager@company.com", "manager123").await,
    Err(Error::Busy)
  ));
  assert!(matches!(
    s.signup("x@company.com", "Passw0rdX", "X", "Y").await,
    Err(Error::Busy)
  ));

  assert!(first.await.unwrap().unwrap());
  let state = s.state();
  assert!(!state.loading);
  assert_eq!(state.user.unwrap().email, "admin@company.com");
}

#[tokio::test]
async fn logout_during_login_wins() {
  let slot = MemorySlot::new();
  let s = Arc::new(store_with(slot.clone(), slow()).await);

  let pending = {
    let s = Arc::clone(&s);
    tokio::spawn(async move { s.login("admin@company.com", "admin123").await })
  };
  tokio::time::sleep(Duration::from_millis(20)).await;
  s.logout().await.unwrap();

  assert!(matches!(pending.await.unwrap(), Err(Error::Superseded)));
  assert_eq!(s.state().phase(), SessionPhase::Anonymous);
  assert!(slot.peek().is_none());
}

#[tokio::test]
async fn logout_during_signup_drops_the_new_account() {
  let slot = MemorySlot::new();
  let s = Arc::new(store_with(slot.clone(), slow()).await);

  let pending = {
    let s = Arc::clone(&s);
    tokio::spawn(async move {
      s.signup("racer@company.com", "Passw0rdX", "Race", "Condition").await
    })
  };
  tokio::time::sleep(Duration::from_millis(20)).await;
  s.logout().await.unwrap();

  assert!(matches!(pending.await.unwrap(), Err(Error::Superseded)));
  assert_eq!(s.state().phase(), SessionPhase::Anonymous);
  assert!(slot.peek().is_none());
  assert_eq!(s.credential_count(), 2);

  // The email is free again.
  assert!(!s.login("racer@company.com", "Passw0rdX").await.unwrap());
  assert!(
    s.signup("racer@company.com", "Passw0rdX", "Race", "Condition")
      .await
      .unwrap()
  );
  assert_eq!(s.credential_count(), 3);
}

// ─── Slot failures ───────────────────────────────────────────────────────────

/// Reads as empty, refuses every write.
struct ReadOnlySlot;

impl SessionSlot for ReadOnlySlot {
  type Error = io::Error;

  async fn read(&self) -> Result<Option<String>, Self::Error> { Ok(None) }

  async fn write(&self, _value: String) -> Result<(), Self::Error> {
    Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
  }

  async fn clear(&self) -> Result<(), Self::Error> { Ok(()) }
}

#[tokio::test]
async fn failed_slot_write_rolls_back_signup() {
  let s = SessionStore::restore(
    ReadOnlySlot,
    CredentialTable::demo().expect("demo table"),
    instant(),
  )
  .await
  .expect("restore");

  let err = s
    .signup("new@company.com", "Passw0rdX", "New", "Hire")
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Slot(_)));
  assert_eq!(s.credential_count(), 2);
  assert!(!s.is_loading());
  assert_eq!(s.state().phase(), SessionPhase::Anonymous);
}
