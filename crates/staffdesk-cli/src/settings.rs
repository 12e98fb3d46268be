//! Runtime settings: defaults, then an optional TOML file, then `STAFFDESK_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::Args;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite file holding the session slot. A leading `~/` is expanded.
  pub session_db:       PathBuf,
  /// Row key of the session slot.
  pub session_key:      String,
  /// Simulated login/signup round trip, in milliseconds.
  pub login_latency_ms: u64,
  /// Where tracing output goes; the terminal belongs to the UI.
  pub log_file:         PathBuf,
}

impl Settings {
  pub fn load(args: &Args) -> anyhow::Result<Self> {
    let default_log = std::env::temp_dir().join("staffdesk.log");

    let settings = config::Config::builder()
      .set_default("session_db", "~/.local/share/staffdesk/session.db")?
      .set_default("session_key", staffdesk_store_sqlite::DEFAULT_KEY)?
      .set_default("login_latency_ms", 1000)?
      .set_default("log_file", default_log.to_string_lossy().into_owned())?
      .add_source(config::File::from(args.config.clone()).required(false))
      .add_source(config::Environment::with_prefix("STAFFDESK"))
      .build()
      .context("failed to read configuration")?;

    let mut cfg: Settings = settings
      .try_deserialize()
      .context("failed to deserialise settings")?;

    if let Some(db) = &args.session_db {
      cfg.session_db = db.clone();
    }
    if let Some(ms) = args.latency_ms {
      cfg.login_latency_ms = ms;
    }
    if let Some(log) = &args.log_file {
      cfg.log_file = log.clone();
    }

    cfg.session_db = expand_tilde(&cfg.session_db);
    cfg.log_file = expand_tilde(&cfg.log_file);
    Ok(cfg)
  }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tilde_only_expands_at_start() {
    let plain = Path::new("/var/lib/staffdesk.db");
    assert_eq!(expand_tilde(plain), plain);
    let inner = Path::new("data/~/x.db");
    assert_eq!(expand_tilde(inner), inner);
  }
}
