use anyhow::{Context, Result};
use std::process::Stdio;
use tokio::process::{Child as TokioChild, Command};
use tracing::{debug, info, warn};

use crate::catalog::VideoRecord;
use crate::constants::constants;

/// Fire-and-forget external media player for the open video.
///
/// Starting playback never fails from the caller's point of view: a missing
/// binary or a spawn error is logged and the modal stays usable.
pub struct Player {
  command: String,
  enabled: bool,
  current_process: Option<TokioChild>,
}

/// The URL handed to the player: the record's own source, or the demo clip.
pub fn media_url(video: &VideoRecord) -> &str {
  video.media_source.as_deref().unwrap_or(&constants().fallback_media_url)
}

impl Player {
  pub fn new(command: impl Into<String>, enabled: bool) -> Self {
    Self { command: command.into(), enabled, current_process: None }
  }

  pub fn is_playing(&self) -> bool {
    self.current_process.is_some()
  }

  /// Forget a player process that has exited on its own.
  pub fn check_status(&mut self) {
    let Some(child) = &mut self.current_process else {
      return;
    };
    match child.try_wait() {
      Ok(Some(status)) => {
        debug!(%status, "player: exited");
        self.current_process = None;
      }
      Ok(None) => {}
      Err(e) => {
        warn!(err = %e, "player: failed to poll process");
        self.current_process = None;
      }
    }
  }

  /// Start playback of `video`, replacing whatever was playing.
  pub async fn play(&mut self, video: &VideoRecord) {
    if let Err(e) = self.stop().await {
      warn!(err = %e, "player: failed to stop previous playback");
    }
    if !self.enabled {
      debug!(id = %video.id, "player: disabled, not spawning");
      return;
    }

    let url = media_url(video);
    let mut cmd = Command::new(&self.command);
    cmd.args(["--really-quiet", &format!("--title={}", video.title), url]);
    cmd.stdin(Stdio::null());
    // Piped but undrained output would eventually block the player.
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());
    cmd.kill_on_drop(true);

    match cmd.spawn() {
      Ok(child) => {
        info!(id = %video.id, url, "player: started");
        self.current_process = Some(child);
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        warn!(command = %self.command, "player: binary not found, playback skipped");
      }
      Err(e) => {
        warn!(err = %e, "player: failed to spawn, playback skipped");
      }
    }
  }

  pub async fn stop(&mut self) -> Result<()> {
    if let Some(mut child) = self.current_process.take() {
      // Already exited on its own is fine.
      if child.try_wait().context("Failed to poll player process")?.is_none() {
        child.kill().await.context("Failed to kill player process")?;
      }
      let _ = child.wait().await;
      debug!("player: stopped");
    }
    Ok(())
  }
}
