//! The browsing core: one catalog, the active query, its reveal cursor and the session.
//!
//! The presentation layer calls the intent methods here and re-renders from
//! [`Browser::visible`] and the session reads. Nothing in this module blocks,
//! spawns or fails.

use tracing::debug;

use crate::catalog::VideoRecord;
use crate::pagination::{Cursor, PageSize};
use crate::query;
use crate::session::Session;

pub struct Browser {
  catalog: Vec<VideoRecord>,
  page_size: PageSize,
  query: String,
  /// Catalog positions matching `query`, in catalog order.
  results: Vec<usize>,
  cursor: Cursor,
  session: Session,
}

impl Browser {
  /// Build the core and reveal the first page of the unfiltered catalog.
  pub fn new(catalog: Vec<VideoRecord>, page_size: PageSize) -> Self {
    let mut browser = Self {
      catalog,
      page_size,
      query: String::new(),
      results: Vec::new(),
      cursor: Cursor::default(),
      session: Session::default(),
    };
    browser.set_query("");
    browser
  }

  pub fn catalog(&self) -> &[VideoRecord] {
    &self.catalog
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn page_size(&self) -> PageSize {
    self.page_size
  }

  /// Total matches for the active query.
  pub fn result_len(&self) -> usize {
    self.results.len()
  }

  pub fn shown(&self) -> usize {
    self.cursor.shown()
  }

  pub fn is_exhausted(&self) -> bool {
    self.cursor.is_exhausted(self.results.len())
  }

  /// Every card revealed so far for the active query.
  pub fn visible(&self) -> Vec<&VideoRecord> {
    self.results[..self.cursor.shown()].iter().map(|&i| &self.catalog[i]).collect()
  }

  /// Re-filter, reset the cursor and reveal the first page.
  pub fn set_query(&mut self, q: &str) {
    self.query = q.to_string();
    self.results = query::search_indices(&self.catalog, q);
    self.cursor.reset();
    debug!(query = %self.query.trim(), matches = self.results.len(), "query applied");
    self.load_more();
  }

  /// Reveal the next page. Returns only the newly revealed records.
  pub fn load_more(&mut self) -> Vec<&VideoRecord> {
    let step = self.cursor.advance(&self.results, self.page_size);
    debug!(revealed = step.items.len(), shown = step.shown, exhausted = step.exhausted, "load more");
    step.items.iter().map(|&i| &self.catalog[i]).collect()
  }

  pub fn find(&self, id: &str) -> Option<&VideoRecord> {
    self.catalog.iter().find(|v| v.id == id)
  }

  /// Open the video with `id`. Unknown ids leave the session untouched.
  pub fn open_video(&mut self, id: &str) -> Option<&VideoRecord> {
    let Some(video) = self.find(id).cloned() else {
      debug!(id, "open_video: unknown id");
      return None;
    };
    self.session.open_video(video);
    self.session.active_video()
  }

  pub fn close_video(&mut self) {
    self.session.close_video();
  }

  pub fn active_video(&self) -> Option<&VideoRecord> {
    self.session.active_video()
  }

  pub fn toggle_like(&mut self, id: &str) -> bool {
    self.session.toggle_like(id)
  }

  pub fn toggle_subscribe(&mut self, channel: &str) -> bool {
    self.session.toggle_subscribe(channel)
  }

  /// The modal's like button. `None` when no video is open.
  pub fn toggle_like_active(&mut self) -> Option<bool> {
    let id = self.session.active_video()?.id.clone();
    Some(self.toggle_like(&id))
  }

  /// The modal's subscribe button. `None` when no video is open.
  pub fn toggle_subscribe_active(&mut self) -> Option<bool> {
    let channel = self.session.active_video()?.channel.clone();
    Some(self.toggle_subscribe(&channel))
  }

  pub fn is_liked(&self, id: &str) -> bool {
    self.session.is_liked(id)
  }

  pub fn is_subscribed(&self, channel: &str) -> bool {
    self.session.is_subscribed(channel)
  }

  pub fn session(&self) -> &Session {
    &self.session
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::generate_catalog;

  fn browser(page: usize) -> Browser {
    Browser::new(generate_catalog(12, 1, "t-{i}"), PageSize::new(page).unwrap())
  }

  fn ids(records: Vec<&VideoRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.id.clone()).collect()
  }

  #[test]
  fn starts_with_first_page_of_everything() {
    let b = browser(8);
    assert_eq!(b.query(), "");
    assert_eq!(b.result_len(), 12);
    assert_eq!(b.shown(), 8);
    assert!(!b.is_exhausted());
    assert_eq!(b.visible().len(), 8);
  }

  #[test]
  fn load_more_reveals_the_rest_then_nothing() {
    let mut b = browser(8);
    let more = ids(b.load_more());
    assert_eq!(more, vec!["vid-9", "vid-10", "vid-11", "vid-12"]);
    assert_eq!(b.shown(), 12);
    assert!(b.is_exhausted());
    assert!(b.load_more().is_empty());
    assert_eq!(b.shown(), 12);
    assert_eq!(ids(b.visible()), ids(b.catalog().iter().collect()));
  }

  #[test]
  fn set_query_resets_cursor() {
    let mut b = browser(2);
    b.load_more();
    b.load_more();
    assert_eq!(b.shown(), 6);

    b.set_query("channel 3");
    assert_eq!(b.result_len(), 3);
    assert_eq!(b.shown(), 2);
    assert_eq!(ids(b.visible()), vec!["vid-2", "vid-7"]);
    assert_eq!(ids(b.load_more()), vec!["vid-12"]);
    assert!(b.is_exhausted());
  }

  #[test]
  fn unmatched_query_is_empty_and_exhausted() {
    let mut b = browser(8);
    b.set_query("nothing like this");
    assert_eq!(b.result_len(), 0);
    assert!(b.visible().is_empty());
    assert!(b.is_exhausted());
  }

  #[test]
  fn clearing_query_restores_catalog() {
    let mut b = browser(20);
    b.set_query("Channel 1");
    b.set_query("   ");
    assert_eq!(b.result_len(), 12);
    assert!(b.is_exhausted());
  }

  #[test]
  fn open_close_and_unknown_id() {
    let mut b = browser(8);
    assert_eq!(b.open_video("vid-4").map(|v| v.channel.clone()), Some("Channel 5".to_string()));
    assert_eq!(b.active_video().map(|v| v.id.as_str()), Some("vid-4"));
    assert!(b.open_video("vid-404").is_none());
    assert_eq!(b.active_video().map(|v| v.id.as_str()), Some("vid-4"));
    b.close_video();
    assert!(b.active_video().is_none());
  }

  #[test]
  fn active_toggles_need_open_video() {
    let mut b = browser(8);
    assert_eq!(b.toggle_like_active(), None);
    assert_eq!(b.toggle_subscribe_active(), None);

    b.open_video("vid-2");
    assert_eq!(b.toggle_like_active(), Some(true));
    assert!(b.is_liked("vid-2"));
    assert_eq!(b.toggle_subscribe_active(), Some(true));
    assert!(b.is_subscribed("Channel 3"));
    assert_eq!(b.toggle_like_active(), Some(false));
    assert!(!b.is_liked("vid-2"));
  }

  #[test]
  fn direct_toggles_do_not_need_open_video() {
    let mut b = browser(8);
    assert!(b.toggle_like("vid-1"));
    assert!(!b.toggle_like("vid-1"));
    assert!(!b.is_liked("vid-1"));
    assert!(b.toggle_subscribe("Channel 2"));
    assert!(b.is_subscribed("Channel 2"));
  }

  #[test]
  fn session_survives_query_changes() {
    let mut b = browser(8);
    b.toggle_like("vid-5");
    b.open_video("vid-5");
    b.set_query("demo");
    assert!(b.is_liked("vid-5"));
    assert!(b.active_video().is_some());
  }
}
