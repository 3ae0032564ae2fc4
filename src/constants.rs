//! Application constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!`, so there is no runtime file I/O.
//! Parsed once on first access via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// Built-in defaults. User prefs and CLI flags override the tuneable ones.
#[derive(Debug, Deserialize)]
pub struct Constants {
  // Catalog
  pub catalog_size: usize,
  pub catalog_seed: u64,
  /// Thumbnail URL with `{i}` replaced by the record number.
  pub thumbnail_template: String,

  // Grid
  pub page_size: usize,

  // Player
  pub fallback_media_url: String,
  pub player_command: String,

  // Status line
  pub error_dismiss_secs: u64,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; a malformed file fails on first access in every test run.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed application constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_constants_parse() {
    let c = constants();
    assert_eq!(c.catalog_size, 12);
    assert_eq!(c.page_size, 8);
    assert!(c.thumbnail_template.contains("{i}"));
    assert!(!c.fallback_media_url.is_empty());
  }
}
