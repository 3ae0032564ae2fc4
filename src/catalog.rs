use serde::Serialize;

/// Number of distinct channels the generator cycles through.
const CHANNEL_COUNT: usize = 5;

const MIN_VIEWS: u64 = 1_200;
const VIEW_SPREAD: u64 = 900_000;

/// A single video card. Immutable once the catalog is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
  pub id: String,
  pub title: String,
  pub channel: String,
  pub views: u64,
  /// Display string such as `7:04`. Never parsed.
  pub duration: String,
  pub description: String,
  pub thumbnail_url: String,
  /// `None` means the player falls back to the demo clip.
  pub media_source: Option<String>,
}

/// SplitMix64. Deterministic so a seed reproduces the same catalog.
struct SplitMix64(u64);

impl SplitMix64 {
  fn next_u64(&mut self) -> u64 {
    self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = self.0;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
  }

  /// Uniform-enough value in `0..bound` for cosmetic data.
  fn below(&mut self, bound: u64) -> u64 {
    self.next_u64() % bound
  }
}

/// Generate `count` demo records. Record numbers start at 1 and map to ids `vid-1`, `vid-2`, ...
pub fn generate_catalog(count: usize, seed: u64, thumbnail_template: &str) -> Vec<VideoRecord> {
  let mut rng = SplitMix64(seed);
  (1..=count)
    .map(|i| {
      let views = rng.below(VIEW_SPREAD) + MIN_VIEWS;
      let minutes = rng.below(20) + 1;
      let seconds = rng.below(60);
      VideoRecord {
        id: format!("vid-{}", i),
        title: format!("Demo Video {} — Building a YouTube-like UI", i),
        channel: format!("Channel {}", (i % CHANNEL_COUNT) + 1),
        views,
        duration: format!("{}:{:02}", minutes, seconds),
        description: format!(
          "This is a demo description for Demo Video {}. It explains how to design a modern video platform UI.",
          i
        ),
        thumbnail_url: thumbnail_template.replace("{i}", &i.to_string()),
        media_source: None,
      }
    })
    .collect()
}

/// Distinct channel names in first-seen catalog order.
pub fn channels(catalog: &[VideoRecord]) -> Vec<&str> {
  let mut seen: Vec<&str> = Vec::new();
  for record in catalog {
    if !seen.contains(&record.channel.as_str()) {
      seen.push(&record.channel);
    }
  }
  seen
}

/// Human-readable view count, e.g. `1.2M views`.
pub fn format_views(n: u64) -> String {
  if n >= 1_000_000 {
    format!("{:.1}M views", n as f64 / 1e6)
  } else if n >= 1_000 {
    format!("{:.1}K views", n as f64 / 1e3)
  } else {
    format!("{} views", n)
  }
}
