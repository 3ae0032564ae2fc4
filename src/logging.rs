//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log to a daily rolling file
//! under the data dir. Headless `--list` runs log to stderr.
//!
//! Filter priority: `MINITUBE_LOG`, then `RUST_LOG`, then `info`.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

fn build_env_filter() -> EnvFilter {
  if let Ok(directives) = std::env::var("MINITUBE_LOG")
    && let Ok(filter) = EnvFilter::try_new(&directives)
  {
    return filter;
  }
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a rolling file. Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_file() -> Result<Option<WorkerGuard>> {
  let Some(dir) = config::log_dir() else {
    return Ok(None);
  };
  std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create log dir {}", dir.display()))?;

  let appender = tracing_appender::rolling::daily(dir, "minitube.log");
  let (writer, guard) = tracing_appender::non_blocking(appender);

  tracing_subscriber::registry()
    .with(build_env_filter())
    .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(false))
    .try_init()
    .context("Failed to install tracing subscriber")?;
  Ok(Some(guard))
}

pub fn init_stderr() -> Result<()> {
  tracing_subscriber::registry()
    .with(build_env_filter())
    .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
    .try_init()
    .context("Failed to install tracing subscriber")
}
