//! The credential table: known users and their argon2 password hashes.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use rand_core::OsRng;
use staffdesk_core::{role::Role, user::User};
use uuid::Uuid;

use crate::{Error, Result};

/// A user together with the PHC string of their password.
#[derive(Clone)]
struct Credential {
  user:          User,
  password_hash: String,
}

/// Users who can sign in. Lives for the process only; signups are not
/// written anywhere durable.
#[derive(Clone, Default)]
pub struct CredentialTable {
  entries: Vec<Credential>,
}

impl CredentialTable {
  pub fn new() -> Self { Self::default() }

  /// The two demo accounts:
  /// `admin@company.com / admin123` and `manager@company.com / manager123`.
  pub fn demo() -> Result<Self> {
    let mut table = Self::new();
    table.insert(
      User {
        id:         Uuid::from_u128(1),
        email:      "admin@company.com".into(),
        first_name: "Admin".into(),
        last_name:  "User".into(),
        role:       Role::Admin,
      },
      "admin123",
    )?;
    table.insert(
      User {
        id:         Uuid::from_u128(2),
        email:      "manager@company.com".into(),
        first_name: "Manager".into(),
        last_name:  "User".into(),
        role:       Role::Manager,
      },
      "manager123",
    )?;
    Ok(table)
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  /// Exact, case-sensitive email lookup.
  pub fn contains_email(&self, email: &str) -> bool {
    self.entries.iter().any(|c| c.user.email == email)
  }

  /// Add a user. Returns `Ok(false)` without hashing if the email is taken.
  pub fn insert(&mut self, user: User, password: &str) -> Result<bool> {
    if self.contains_email(&user.email) {
      return Ok(false);
    }
    let password_hash = hash_password(password)?;
    self.entries.push(Credential { user, password_hash });
    Ok(true)
  }

  /// Insert a user whose password is already hashed.
  pub(crate) fn insert_hashed(&mut self, user: User, password_hash: String) -> bool {
    if self.contains_email(&user.email) {
      return false;
    }
    self.entries.push(Credential { user, password_hash });
    true
  }

  /// Drop the entry for `id`. Returns `false` if there was none.
  pub(crate) fn remove(&mut self, id: Uuid) -> bool {
    let before = self.entries.len();
    self.entries.retain(|c| c.user.id != id);
    self.entries.len() != before
  }

  /// The user for `email` if `password` matches their stored hash.
  pub fn verify(&self, email: &str, password: &str) -> Option<User> {
    let entry = self.entries.iter().find(|c| c.user.email == email)?;
    let parsed = PasswordHash::new(&entry.password_hash).ok()?;
    Argon2::default()
      .verify_password(password.as_bytes(), &parsed)
      .ok()
      .map(|()| entry.user.clone())
  }
}

/// Produce an argon2id PHC string for `password` with a fresh salt.
pub fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::Hash(e.to_string()))
}
