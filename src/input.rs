use ratatui::crossterm::event::{self, KeyCode, KeyModifiers};

use crate::app::{App, AppMode};

// --- Helpers ---

/// Convert a char index to a byte offset within the string.
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
  s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

// --- Event Handling ---

pub async fn handle_key_event(app: &mut App, key: event::KeyEvent) {
  if key.modifiers.contains(KeyModifiers::CONTROL) {
    match key.code {
      KeyCode::Char('c') => {
        app.should_quit = true;
        return;
      }
      KeyCode::Char('t') => {
        app.next_theme();
        return;
      }
      KeyCode::Char('b') => {
        app.toggle_sidebar();
        return;
      }
      _ => {}
    }
  }

  match app.mode {
    AppMode::Input => handle_input_key(app, key),
    AppMode::Grid => handle_grid_key(app, key).await,
    AppMode::Player => handle_player_key(app, key).await,
  }
}

fn handle_input_key(app: &mut App, key: event::KeyEvent) {
  app.clear_error();
  match key.code {
    KeyCode::Enter => {
      app.trigger_search();
    }
    KeyCode::Char(c) => {
      let byte_idx = char_to_byte_index(&app.input, app.cursor_position);
      app.input.insert(byte_idx, c);
      app.cursor_position += 1;
    }
    KeyCode::Backspace => {
      if app.cursor_position > 0 {
        app.cursor_position -= 1;
        let byte_idx = char_to_byte_index(&app.input, app.cursor_position);
        app.input.remove(byte_idx);
      }
    }
    KeyCode::Delete => {
      if app.cursor_position < app.input.chars().count() {
        let byte_idx = char_to_byte_index(&app.input, app.cursor_position);
        app.input.remove(byte_idx);
      }
    }
    KeyCode::Left => {
      app.cursor_position = app.cursor_position.saturating_sub(1);
    }
    KeyCode::Right => {
      if app.cursor_position < app.input.chars().count() {
        app.cursor_position += 1;
      }
    }
    KeyCode::Home => {
      app.cursor_position = 0;
    }
    KeyCode::End => {
      app.cursor_position = app.input.chars().count();
    }
    KeyCode::Esc => {
      if !app.input.is_empty() {
        app.input.clear();
        app.cursor_position = 0;
        app.input_scroll = 0;
      } else {
        app.should_quit = true;
      }
    }
    KeyCode::Down | KeyCode::Tab => {
      if app.browser.shown() > 0 {
        app.mode = AppMode::Grid;
      }
    }
    _ => {}
  }
}

async fn handle_grid_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Enter => {
      app.open_selected().await;
    }
    KeyCode::Char('m') => {
      app.load_more();
    }
    KeyCode::Char('/') | KeyCode::Tab => {
      app.mode = AppMode::Input;
    }
    KeyCode::Down | KeyCode::Char('j') => {
      app.select_next();
    }
    KeyCode::Up | KeyCode::Char('k') => {
      app.select_prev();
    }
    KeyCode::Esc => {
      app.mode = AppMode::Input;
    }
    KeyCode::Char('q') => {
      app.should_quit = true;
    }
    _ => {}
  }
}

async fn handle_player_key(app: &mut App, key: event::KeyEvent) {
  match key.code {
    KeyCode::Char('l') => {
      app.toggle_like();
    }
    KeyCode::Char('s') => {
      app.toggle_subscribe();
    }
    KeyCode::Esc | KeyCode::Char('q') => {
      app.close_player().await;
    }
    _ => {}
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::app::tests::app_with;
  use ratatui::crossterm::event::KeyEvent;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  async fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
      handle_key_event(app, press(KeyCode::Char(c))).await;
    }
  }

  // --- char_to_byte_index ---

  #[test]
  fn char_to_byte_ascii() {
    assert_eq!(char_to_byte_index("hello", 0), 0);
    assert_eq!(char_to_byte_index("hello", 3), 3);
    assert_eq!(char_to_byte_index("hello", 5), 5); // past end
  }

  #[test]
  fn char_to_byte_multibyte() {
    let s = "aé日"; // a=1 byte, é=2 bytes, 日=3 bytes
    assert_eq!(char_to_byte_index(s, 0), 0);
    assert_eq!(char_to_byte_index(s, 1), 1);
    assert_eq!(char_to_byte_index(s, 2), 3);
    assert_eq!(char_to_byte_index(s, 3), 6);
  }

  // --- key flow ---

  #[tokio::test]
  async fn enter_in_input_runs_search() {
    let mut app = app_with(8);
    type_str(&mut app, "Channel 3").await;
    assert_eq!(app.input, "Channel 3");
    handle_key_event(&mut app, press(KeyCode::Enter)).await;
    assert_eq!(app.mode, AppMode::Grid);
    assert_eq!(app.browser.result_len(), 3);
    assert_eq!(app.browser.shown(), 3);
  }

  #[tokio::test]
  async fn editing_keys_move_cursor() {
    let mut app = app_with(8);
    type_str(&mut app, "dmo").await;
    handle_key_event(&mut app, press(KeyCode::Left)).await;
    handle_key_event(&mut app, press(KeyCode::Left)).await;
    type_str(&mut app, "e").await;
    assert_eq!(app.input, "demo");
    handle_key_event(&mut app, press(KeyCode::End)).await;
    handle_key_event(&mut app, press(KeyCode::Backspace)).await;
    assert_eq!(app.input, "dem");
    handle_key_event(&mut app, press(KeyCode::Esc)).await;
    assert!(app.input.is_empty());
    assert!(!app.should_quit);
  }

  #[tokio::test]
  async fn esc_on_empty_input_quits() {
    let mut app = app_with(8);
    assert!(app.browser.shown() > 0);
    handle_key_event(&mut app, press(KeyCode::Esc)).await;
    assert!(app.should_quit);
    assert_eq!(app.mode, AppMode::Input);
  }

  #[tokio::test]
  async fn grid_esc_returns_to_input_without_quitting() {
    let mut app = app_with(8);
    handle_key_event(&mut app, press(KeyCode::Tab)).await;
    assert_eq!(app.mode, AppMode::Grid);
    handle_key_event(&mut app, press(KeyCode::Esc)).await;
    assert_eq!(app.mode, AppMode::Input);
    assert!(!app.should_quit);
  }

  #[tokio::test]
  async fn modal_keys_toggle_like_and_subscribe() {
    let mut app = app_with(8);
    handle_key_event(&mut app, press(KeyCode::Down)).await;
    assert_eq!(app.mode, AppMode::Grid);
    handle_key_event(&mut app, press(KeyCode::Enter)).await;
    assert_eq!(app.mode, AppMode::Player);

    handle_key_event(&mut app, press(KeyCode::Char('l'))).await;
    assert!(app.browser.is_liked("vid-1"));
    handle_key_event(&mut app, press(KeyCode::Char('l'))).await;
    assert!(!app.browser.is_liked("vid-1"));

    handle_key_event(&mut app, press(KeyCode::Char('s'))).await;
    assert!(app.browser.is_subscribed("Channel 2"));

    handle_key_event(&mut app, press(KeyCode::Esc)).await;
    assert_eq!(app.mode, AppMode::Grid);
    assert!(app.browser.active_video().is_none());
  }

  #[tokio::test]
  async fn m_loads_more() {
    let mut app = app_with(8);
    handle_key_event(&mut app, press(KeyCode::Down)).await;
    handle_key_event(&mut app, press(KeyCode::Char('m'))).await;
    assert_eq!(app.browser.shown(), 12);
    assert!(app.browser.is_exhausted());
  }

  #[tokio::test]
  async fn ctrl_c_quits_from_any_mode() {
    let mut app = app_with(8);
    app.mode = AppMode::Player;
    handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).await;
    assert!(app.should_quit);
  }

  #[tokio::test]
  async fn ctrl_b_toggles_sidebar() {
    let mut app = app_with(8);
    handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL)).await;
    assert!(app.sidebar_visible);
  }
}
