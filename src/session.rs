use std::collections::HashSet;

use crate::catalog::VideoRecord;

/// Per-UI-session toggles plus the currently open video.
///
/// Lives only as long as its owner; nothing here is ever written to disk.
#[derive(Debug, Default)]
pub struct Session {
  liked_video_ids: HashSet<String>,
  subscribed_channels: HashSet<String>,
  active_video: Option<VideoRecord>,
}

/// Flip membership of `key` in `set`. Returns whether it is a member afterwards.
fn toggle(set: &mut HashSet<String>, key: &str) -> bool {
  if set.remove(key) {
    false
  } else {
    set.insert(key.to_string());
    true
  }
}

impl Session {
  pub fn open_video(&mut self, video: VideoRecord) {
    self.active_video = Some(video);
  }

  pub fn close_video(&mut self) {
    self.active_video = None;
  }

  pub fn active_video(&self) -> Option<&VideoRecord> {
    self.active_video.as_ref()
  }

  /// Like or unlike. Works whether or not a video is open.
  pub fn toggle_like(&mut self, video_id: &str) -> bool {
    toggle(&mut self.liked_video_ids, video_id)
  }

  pub fn toggle_subscribe(&mut self, channel: &str) -> bool {
    toggle(&mut self.subscribed_channels, channel)
  }

  pub fn is_liked(&self, video_id: &str) -> bool {
    self.liked_video_ids.contains(video_id)
  }

  pub fn is_subscribed(&self, channel: &str) -> bool {
    self.subscribed_channels.contains(channel)
  }

  /// Count shown next to the like button: this session's own like only.
  pub fn like_count(&self, video_id: &str) -> u32 {
    u32::from(self.is_liked(video_id))
  }

  pub fn liked_count(&self) -> usize {
    self.liked_video_ids.len()
  }

  pub fn subscription_count(&self) -> usize {
    self.subscribed_channels.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::generate_catalog;

  #[test]
  fn initial_state_is_empty() {
    let s = Session::default();
    assert!(s.active_video().is_none());
    assert!(!s.is_liked("vid-1"));
    assert!(!s.is_subscribed("Channel 1"));
    assert_eq!(s.liked_count(), 0);
  }

  #[test]
  fn toggle_like_twice_restores() {
    let mut s = Session::default();
    assert!(!s.is_liked("vid-1"));
    assert!(s.toggle_like("vid-1"));
    assert!(s.is_liked("vid-1"));
    assert!(!s.toggle_like("vid-1"));
    assert!(!s.is_liked("vid-1"));
    assert_eq!(s.liked_count(), 0);
  }

  #[test]
  fn likes_are_independent_per_id() {
    let mut s = Session::default();
    s.toggle_like("vid-1");
    s.toggle_like("vid-2");
    s.toggle_like("vid-1");
    assert!(!s.is_liked("vid-1"));
    assert!(s.is_liked("vid-2"));
  }

  #[test]
  fn toggle_subscribe_symmetric() {
    let mut s = Session::default();
    assert!(s.toggle_subscribe("Channel 3"));
    assert!(s.is_subscribed("Channel 3"));
    assert!(!s.is_subscribed("Channel 4"));
    assert_eq!(s.subscription_count(), 1);
    assert!(!s.toggle_subscribe("Channel 3"));
    assert!(!s.is_subscribed("Channel 3"));
  }

  #[test]
  fn like_works_without_open_video() {
    let mut s = Session::default();
    assert!(s.active_video().is_none());
    assert!(s.toggle_like("vid-9"));
  }

  #[test]
  fn open_and_close() {
    let catalog = generate_catalog(2, 1, "t");
    let mut s = Session::default();
    s.open_video(catalog[0].clone());
    assert_eq!(s.active_video().map(|v| v.id.as_str()), Some("vid-1"));
    s.open_video(catalog[1].clone());
    assert_eq!(s.active_video().map(|v| v.id.as_str()), Some("vid-2"));
    s.close_video();
    assert!(s.active_video().is_none());
    s.close_video();
    assert!(s.active_video().is_none());
  }

  #[test]
  fn like_count_reflects_membership() {
    let mut s = Session::default();
    assert_eq!(s.like_count("vid-3"), 0);
    s.toggle_like("vid-3");
    assert_eq!(s.like_count("vid-3"), 1);
  }
}
