//! `staffdesk`: terminal UI for the employee directory.
//!
//! # Usage
//!
//! ```
//! staffdesk
//! staffdesk --config ~/.config/staffdesk/staffdesk.toml
//! staffdesk --latency-ms 0 --session-db /tmp/session.db
//! staffdesk --logout
//! ```

mod app;
mod form;
mod settings;
mod ui;

use std::{
  io,
  path::PathBuf,
  sync::{Arc, Mutex},
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use staffdesk_core::{directory::Directory, slot::SessionSlot};
use staffdesk_session::{CredentialTable, SessionConfig, SessionStore};
use staffdesk_store_sqlite::SqliteSlot;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "staffdesk", about = "Terminal UI for the employee directory")]
pub struct Args {
  /// Path to a TOML config file. Missing is fine.
  #[arg(short, long, value_name = "FILE", default_value = "staffdesk.toml")]
  pub config: PathBuf,

  /// SQLite file holding the stored session.
  #[arg(long, value_name = "FILE")]
  pub session_db: Option<PathBuf>,

  /// Simulated login/signup delay in milliseconds.
  #[arg(long, value_name = "MS")]
  pub latency_ms: Option<u64>,

  /// File that receives log output.
  #[arg(long, value_name = "FILE")]
  pub log_file: Option<PathBuf>,

  /// Clear the stored session and exit.
  #[arg(long)]
  pub logout: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  let settings = Settings::load(&args)?;

  init_tracing(&settings)?;
  tracing::info!(db = %settings.session_db.display(), "starting staffdesk");

  if let Some(parent) = settings.session_db.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating {}", parent.display()))?;
  }
  let slot = SqliteSlot::open(&settings.session_db, &settings.session_key)
    .await
    .context("opening session database")?;

  if args.logout {
    slot.clear().await.context("clearing stored session")?;
    println!("Signed out.");
    return Ok(());
  }

  let config = SessionConfig {
    latency: Duration::from_millis(settings.login_latency_ms),
  };
  let credentials = CredentialTable::demo().context("hashing demo credentials")?;
  let session = SessionStore::restore(slot, credentials, config)
    .await
    .context("restoring session")?;

  let mut app = App::new(Arc::new(session), Directory::seeded());

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Log to a file; the terminal is owned by the UI.
fn init_tracing(settings: &Settings) -> Result<()> {
  if let Some(parent) = settings.log_file.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("creating {}", parent.display()))?;
  }
  let file = std::fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(&settings.log_file)
    .with_context(|| format!("opening log file {}", settings.log_file.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    app.tick().await;
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event
      && key.kind == KeyEventKind::Press
    {
      let cont = app.handle_key(key).await?;
      if !cont {
        break;
      }
    }
  }

  Ok(())
}
