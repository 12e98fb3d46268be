//! The `SessionSlot` trait: a single durable key/value entry that carries
//! the signed-in user across restarts.
//!
//! The slot stores an opaque string; decoding it (and discarding it when it
//! is corrupt) is the session store's job. Backends live in other crates
//! (e.g. `staffdesk-store-sqlite`); [`MemorySlot`] is provided for tests and
//! for running without persistence.

use std::{
  convert::Infallible,
  future::Future,
  sync::{Arc, Mutex},
};

pub trait SessionSlot: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The stored payload, or `None` if the slot is empty.
  fn read(
    &self,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + '_;

  /// Replace the stored payload.
  fn write(
    &self,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Empty the slot. Clearing an empty slot is not an error.
  fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

/// A process-local slot. Clones share the same entry, so a test can keep a
/// handle to inspect what the session store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
  value: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
  pub fn new() -> Self { Self::default() }

  /// A slot that already holds `value`.
  pub fn with_value(value: impl Into<String>) -> Self {
    Self { value: Arc::new(Mutex::new(Some(value.into()))) }
  }

  /// Current contents without going through the async API.
  pub fn peek(&self) -> Option<String> {
    self.value.lock().map(|v| v.clone()).unwrap_or_default()
  }

  fn set(&self, value: Option<String>) {
    if let Ok(mut guard) = self.value.lock() {
      *guard = value;
    }
  }
}

impl SessionSlot for MemorySlot {
  type Error = Infallible;

  async fn read(&self) -> Result<Option<String>, Self::Error> { Ok(self.peek()) }

  async fn write(&self, value: String) -> Result<(), Self::Error> {
    self.set(Some(value));
    Ok(())
  }

  async fn clear(&self) -> Result<(), Self::Error> {
    self.set(None);
    Ok(())
  }
}
