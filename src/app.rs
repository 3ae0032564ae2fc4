use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::browser::Browser;
use crate::config::Config;
use crate::constants::constants;
use crate::player::Player;
use crate::theme::{self, THEMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  /// Typing in the search box.
  Input,
  /// Moving through the revealed cards.
  Grid,
  /// The player modal is open over the grid.
  Player,
}

pub struct App {
  pub input: String,
  pub cursor_position: usize,
  pub input_scroll: usize,
  pub mode: AppMode,
  pub theme_index: usize,
  pub browser: Browser,
  /// Selection within `browser.visible()`.
  pub list_state: ListState,
  pub player: Player,
  pub last_error: Option<String>,
  pub status_message: Option<String>,
  pub should_quit: bool,
  /// Channel pane toggled from the menu key.
  pub sidebar_visible: bool,
  config: Config,
  /// When the last error was set, for auto-dismiss.
  error_time: Option<Instant>,
}

impl App {
  pub fn new(browser: Browser, player: Player, config: Config, initial_query: Option<&str>) -> Self {
    let theme_index = theme::index_of(config.theme_name.as_deref());
    let input = initial_query.unwrap_or_default().to_string();
    let mut app = Self {
      cursor_position: input.chars().count(),
      input,
      input_scroll: 0,
      mode: AppMode::Input,
      theme_index,
      browser,
      list_state: ListState::default(),
      player,
      last_error: None,
      status_message: None,
      should_quit: false,
      sidebar_visible: false,
      config,
      error_time: None,
    };
    if !app.input.trim().is_empty() {
      app.trigger_search();
    } else {
      app.clamp_selection();
    }
    app
  }

  pub fn theme(&self) -> &'static theme::Theme {
    // Safety: theme_index only ever comes from theme::index_of() or the modular step in next_theme().
    &THEMES[self.theme_index]
  }

  /// Set an error message with auto-dismiss tracking.
  pub fn set_error(&mut self, msg: String) {
    self.last_error = Some(msg);
    self.error_time = Some(Instant::now());
  }

  pub fn clear_error(&mut self) {
    self.last_error = None;
    self.error_time = None;
  }

  /// Clear stale error messages once they have been on screen long enough.
  pub fn expire_error(&mut self) {
    if let Some(t) = self.error_time
      && t.elapsed() >= Duration::from_secs(constants().error_dismiss_secs)
    {
      self.clear_error();
    }
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.config.theme_name = Some(self.theme().name.to_string());
    self.config.save();
    debug!(theme = self.theme().name, "theme changed");
  }

  pub fn toggle_sidebar(&mut self) {
    self.sidebar_visible = !self.sidebar_visible;
  }

  /// Run the search box contents as the active query. An empty box shows the whole catalog.
  pub fn trigger_search(&mut self) {
    self.clear_error();
    self.browser.set_query(&self.input);
    info!(query = %self.input.trim(), matches = self.browser.result_len(), "search");
    self.list_state.select(None);
    self.clamp_selection();

    if self.browser.result_len() == 0 {
      self.set_error(format!("No videos match '{}'.", self.input.trim()));
      self.status_message = None;
    } else {
      self.status_message = Some(self.summary());
      self.mode = AppMode::Grid;
    }
  }

  /// Reveal the next page and report it on the status line.
  pub fn load_more(&mut self) {
    let added = self.browser.load_more().len();
    if added == 0 {
      self.status_message = Some("No more videos.".to_string());
    } else {
      self.status_message = Some(self.summary());
    }
  }

  fn summary(&self) -> String {
    format!(
      "Showing {} of {} videos, {} per page",
      self.browser.shown(),
      self.browser.result_len(),
      self.browser.page_size().get()
    )
  }

  fn clamp_selection(&mut self) {
    let count = self.browser.shown();
    if count == 0 {
      self.list_state.select(None);
    } else {
      let sel = self.list_state.selected().unwrap_or(0);
      self.list_state.select(Some(sel.min(count - 1)));
    }
  }

  /// Move down one card. Stepping past the last revealed card reveals the next page.
  pub fn select_next(&mut self) {
    let count = self.browser.shown();
    if count == 0 {
      return;
    }
    let current = self.list_state.selected().unwrap_or(0);
    if current + 1 < count {
      self.list_state.select(Some(current + 1));
    } else if !self.browser.is_exhausted() {
      self.load_more();
      self.list_state.select(Some((current + 1).min(self.browser.shown() - 1)));
    } else {
      self.list_state.select(Some(0));
    }
  }

  pub fn select_prev(&mut self) {
    let count = self.browser.shown();
    if count == 0 {
      return;
    }
    let i = self.list_state.selected().map_or(0, |i| if i == 0 { count - 1 } else { i - 1 });
    self.list_state.select(Some(i));
  }

  pub fn selected_id(&self) -> Option<String> {
    let selected = self.list_state.selected()?;
    self.browser.visible().get(selected).map(|v| v.id.clone())
  }

  /// Open the selected card in the modal and start playback in the background.
  pub async fn open_selected(&mut self) {
    let Some(id) = self.selected_id() else { return };
    let Some(video) = self.browser.open_video(&id).cloned() else { return };
    info!(id = %video.id, "video opened");
    self.mode = AppMode::Player;
    self.player.play(&video).await;
  }

  pub async fn close_player(&mut self) {
    if let Err(e) = self.player.stop().await {
      warn!(err = %e, "player: stop failed");
    }
    self.browser.close_video();
    self.mode = AppMode::Grid;
  }

  pub fn toggle_like(&mut self) {
    if let Some(liked) = self.browser.toggle_like_active() {
      debug!(liked, "like toggled");
    }
  }

  pub fn toggle_subscribe(&mut self) {
    if let Some(subscribed) = self.browser.toggle_subscribe_active() {
      debug!(subscribed, "subscribe toggled");
    }
  }

  pub async fn shutdown(&mut self) {
    if let Err(e) = self.player.stop().await {
      warn!(err = %e, "player: stop on exit failed");
    }
  }
}
