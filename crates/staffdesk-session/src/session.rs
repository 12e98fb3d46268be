//! [`SessionStore`]: who is signed in, persisted through a [`SessionSlot`].
//!
//! Lifecycle: `Anonymous → Authenticating → Authenticated | Anonymous`, and
//! `Authenticated → Anonymous` on logout. The store starts in `Anonymous` or
//! `Authenticated` depending on what the slot holds; never `Authenticating`.

use std::{
  sync::{Mutex, MutexGuard, PoisonError},
  time::Duration,
};

use staffdesk_core::{
  role::Role,
  slot::SessionSlot,
  user::{AuthState, User},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
  Error, Result,
  credentials::{CredentialTable, hash_password},
};

// ─── Configuration ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SessionConfig {
  /// Simulated round-trip time for login and signup.
  pub latency: Duration,
}

impl Default for SessionConfig {
  fn default() -> Self { Self { latency: Duration::from_millis(1000) } }
}

// ─── State ───────────────────────────────────────────────────────────────────

struct Inner {
  auth:  AuthState,
  /// Bumped by logout so an in-flight login cannot resurrect the session.
  epoch: u64,
}

/// Marks a login/signup in flight. Dropping it clears `loading` unless a
/// logout has already moved the session on.
struct InFlight<'a> {
  inner: &'a Mutex<Inner>,
  epoch: u64,
}

impl InFlight<'_> {
  fn is_current(&self) -> bool { lock(self.inner).epoch == self.epoch }
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    let mut inner = lock(self.inner);
    if inner.epoch == self.epoch {
      inner.auth.loading = false;
    }
  }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
  m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Owns the authentication state and the credential table.
///
/// Share it behind an `Arc`; every method takes `&self`.
pub struct SessionStore<S: SessionSlot> {
  slot:        S,
  credentials: Mutex<CredentialTable>,
  inner:       Mutex<Inner>,
  config:      SessionConfig,
}

impl<S: SessionSlot> SessionStore<S> {
  /// Build a store, resuming whatever session `slot` holds.
  ///
  /// A payload that does not decode as a user is removed from the slot and
  /// the store starts anonymous.
  pub async fn restore(
    slot: S,
    credentials: CredentialTable,
    config: SessionConfig,
  ) -> Result<Self> {
    let auth = match slot.read().await.map_err(Error::slot)? {
      None => AuthState::anonymous(),
      Some(raw) => match User::from_json(&raw) {
        Ok(user) => {
          info!(email = %user.email, "resumed stored session");
          AuthState::authenticated(user)
        }
        Err(e) => {
          warn!(error = %e, "discarding unreadable stored session");
          slot.clear().await.map_err(Error::slot)?;
          AuthState::anonymous()
        }
      },
    };

    Ok(Self {
      slot,
      credentials: Mutex::new(credentials),
      inner: Mutex::new(Inner { auth, epoch: 0 }),
      config,
    })
  }

  /// A snapshot of the current state.
  pub fn state(&self) -> AuthState { lock(&self.inner).auth.clone() }

  pub fn is_loading(&self) -> bool { lock(&self.inner).auth.loading }

  pub fn credential_count(&self) -> usize { lock(&self.credentials).len() }

  fn begin(&self) -> Result<InFlight<'_>> {
    let mut inner = lock(&self.inner);
    if inner.auth.loading {
      return Err(Error::Busy);
    }
    inner.auth.loading = true;
    Ok(InFlight { inner: &self.inner, epoch: inner.epoch })
  }

  /// Persist `user` and mark the session authenticated.
  ///
  /// Fails with [`Error::Superseded`] if a logout happened while the request
  /// was in flight; nothing is left in the slot in that case.
  async fn establish(&self, flight: &InFlight<'_>, user: User) -> Result<()> {
    if !flight.is_current() {
      debug!("session changed while request was in flight; dropping result");
      return Err(Error::Superseded);
    }
    self.slot.write(user.to_json()?).await.map_err(Error::slot)?;

    let current = {
      let mut inner = lock(&self.inner);
      let current = inner.epoch == flight.epoch;
      if current {
        inner.auth = AuthState::authenticated(user);
      }
      current
    };
    if !current {
      // Logout ran during the write; undo it.
      debug!("logout raced the slot write; clearing");
      self.slot.clear().await.map_err(Error::slot)?;
      return Err(Error::Superseded);
    }
    Ok(())
  }

  /// Sign in with an email and password.
  ///
  /// Returns `Ok(false)` for unknown emails and wrong passwords, leaving the
  /// authentication state as it was. Returns [`Error::Busy`] if another
  /// login or signup is in flight, and [`Error::Superseded`] if a logout
  /// overtook this one.
  pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
    let flight = self.begin()?;
    debug!(email, "login started");
    tokio::time::sleep(self.config.latency).await;

    let matched = lock(&self.credentials).verify(email, password);
    let Some(user) = matched else {
      info!(email, "login rejected");
      return Ok(false);
    };
    self.establish(&flight, user).await?;
    info!(email, "login succeeded");
    Ok(true)
  }

  /// Register a new `employee`-role user and sign them in.
  ///
  /// Returns `Ok(false)` if the email is already registered. The credential
  /// table only keeps the new entry if the session was established; any
  /// error leaves it as it was.
  pub async fn signup(
    &self,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
  ) -> Result<bool> {
    let flight = self.begin()?;
    debug!(email, "signup started");
    tokio::time::sleep(self.config.latency).await;

    if lock(&self.credentials).contains_email(email) {
      info!(email, "signup rejected: email already registered");
      return Ok(false);
    }

    let password_hash = hash_password(password)?;
    let user = User {
      id:         Uuid::new_v4(),
      email:      email.to_owned(),
      first_name: first_name.to_owned(),
      last_name:  last_name.to_owned(),
      role:       Role::Employee,
    };
    let id = user.id;
    if !lock(&self.credentials).insert_hashed(user.clone(), password_hash) {
      return Ok(false);
    }

    if let Err(e) = self.establish(&flight, user).await {
      lock(&self.credentials).remove(id);
      debug!(email, error = %e, "signup rolled back");
      return Err(e);
    }
    info!(email, "signup succeeded");
    Ok(true)
  }

  /// Sign out and empty the slot. Always leaves the store anonymous, even if
  /// clearing the slot fails.
  pub async fn logout(&self) -> Result<()> {
    {
      let mut inner = lock(&self.inner);
      inner.auth = AuthState::anonymous();
      inner.epoch += 1;
    }
    info!("logged out");
    self.slot.clear().await.map_err(Error::slot)
  }
}
