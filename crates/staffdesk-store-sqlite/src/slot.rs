//! [`SqliteSlot`]: the SQLite implementation of [`SessionSlot`].

use std::{path::Path, sync::Arc};

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use staffdesk_core::slot::SessionSlot;
use tracing::debug;

use crate::{Error, Result, schema::SCHEMA};

/// The key the session is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "user";

/// A session slot stored as one row of a SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteSlot {
  conn: tokio_rusqlite::Connection,
  key:  Arc<str>,
}

impl SqliteSlot {
  /// Open (or create) the file at `path` and use the row named `key`.
  pub async fn open(path: impl AsRef<Path>, key: &str) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn, key).await
  }

  /// Open an in-memory database, useful for testing.
  pub async fn open_in_memory(key: &str) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn, key).await
  }

  async fn init(conn: tokio_rusqlite::Connection, key: &str) -> Result<Self> {
    conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn, key: Arc::from(key) })
  }

  /// A second handle on the same database under a different key.
  pub fn with_key(&self, key: &str) -> Self {
    Self { conn: self.conn.clone(), key: Arc::from(key) }
  }

  pub fn key(&self) -> &str { &self.key }
}

impl SessionSlot for SqliteSlot {
  type Error = Error;

  async fn read(&self) -> Result<Option<String>> {
    let key = self.key.to_string();
    let value = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM session_slots WHERE key = ?1",
              rusqlite::params![key],
              |row| row.get::<_, String>(0),
            )
            .optional()?,
        )
      })
      .await?;
    Ok(value)
  }

  async fn write(&self, value: String) -> Result<()> {
    let key = self.key.to_string();
    let written_at = Utc::now().to_rfc3339();
    debug!(key = %self.key, "writing session slot");
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO session_slots (key, value, written_at)
           VALUES (?1, ?2, ?3)
           ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             written_at = excluded.written_at",
          rusqlite::params![key, value, written_at],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn clear(&self) -> Result<()> {
    let key = self.key.to_string();
    debug!(key = %self.key, "clearing session slot");
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "DELETE FROM session_slots WHERE key = ?1",
          rusqlite::params![key],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
