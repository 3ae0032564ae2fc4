use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::constants;
use crate::pagination::PageSize;

/// User preferences persisted in `prefs.toml`. Every field is optional; missing ones fall back to `constants.ron`.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct Config {
  pub theme_name: Option<String>,
  pub page_size: Option<usize>,
  pub catalog_size: Option<usize>,
  pub seed: Option<u64>,
  /// Spawn the external player when a video opens.
  pub autoplay: Option<bool>,
}

fn project_dirs() -> Option<ProjectDirs> {
  ProjectDirs::from("", "", "minitube")
}

impl Config {
  pub fn load() -> Self {
    if let Some(proj_dirs) = project_dirs() {
      let config_file = proj_dirs.config_dir().join("prefs.toml");
      if let Ok(content) = std::fs::read_to_string(&config_file) {
        match Self::parse(&content) {
          Ok(config) => return config,
          Err(e) => warn!(path = %config_file.display(), err = %e, "ignoring malformed prefs"),
        }
      }
    }
    Self::default()
  }

  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }

  pub fn save(&self) {
    if let Some(proj_dirs) = project_dirs() {
      let config_dir = proj_dirs.config_dir();
      if std::fs::create_dir_all(config_dir).is_ok() {
        let config_file = config_dir.join("prefs.toml");
        if let Ok(content) = toml::to_string(self) {
          let _ = std::fs::write(config_file, content);
        }
      }
    }
  }

  /// Page size from prefs, or the built-in default when absent or zero.
  pub fn page_size(&self) -> PageSize {
    let fallback = constants().page_size;
    match self.page_size {
      Some(0) => {
        warn!(default = fallback, "prefs page_size must be positive, using default");
        default_page_size()
      }
      Some(n) => PageSize::new(n).unwrap_or_else(default_page_size),
      None => default_page_size(),
    }
  }

  /// Catalog size from prefs, or the built-in default when absent or zero.
  pub fn catalog_size(&self) -> usize {
    match self.catalog_size {
      Some(0) => {
        warn!(default = constants().catalog_size, "prefs catalog_size must be positive, using default");
        constants().catalog_size
      }
      Some(n) => n,
      None => constants().catalog_size,
    }
  }

  pub fn seed(&self) -> u64 {
    self.seed.unwrap_or(constants().catalog_seed)
  }

  pub fn autoplay(&self) -> bool {
    self.autoplay.unwrap_or(true)
  }
}

/// Directory for the rolling log file.
pub fn log_dir() -> Option<std::path::PathBuf> {
  project_dirs().map(|d| d.data_local_dir().join("logs"))
}

fn default_page_size() -> PageSize {
  // Safety: constants.ron ships a positive page size; the constants test pins it.
  PageSize::new(constants().page_size).expect("constants.ron page_size must be positive")
}
