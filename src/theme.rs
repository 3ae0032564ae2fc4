use ratatui::style::Color;

pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub accent: Color,
  pub muted: Color,
  pub border: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub status: Color,
  pub error: Color,
  pub key_fg: Color,
  pub key_bg: Color,
  /// Like / Subscribed badges.
  pub active: Color,
}

pub static THEMES: [Theme; 3] = [
  Theme {
    name: "Night",
    bg: Color::Rgb(15, 15, 15),
    fg: Color::Rgb(241, 241, 241),
    accent: Color::Rgb(255, 0, 51),
    muted: Color::Rgb(170, 170, 170),
    border: Color::Rgb(63, 63, 63),
    highlight_fg: Color::Rgb(255, 255, 255),
    highlight_bg: Color::Rgb(39, 39, 39),
    stripe_bg: Color::Rgb(24, 24, 24),
    status: Color::Rgb(62, 166, 255),
    error: Color::Rgb(255, 78, 69),
    key_fg: Color::Rgb(15, 15, 15),
    key_bg: Color::Rgb(170, 170, 170),
    active: Color::Rgb(62, 166, 255),
  },
  Theme {
    name: "Paper",
    bg: Color::Rgb(249, 249, 249),
    fg: Color::Rgb(15, 15, 15),
    accent: Color::Rgb(204, 0, 0),
    muted: Color::Rgb(96, 96, 96),
    border: Color::Rgb(204, 204, 204),
    highlight_fg: Color::Rgb(15, 15, 15),
    highlight_bg: Color::Rgb(229, 229, 229),
    stripe_bg: Color::Rgb(240, 240, 240),
    status: Color::Rgb(6, 95, 212),
    error: Color::Rgb(204, 0, 0),
    key_fg: Color::Rgb(249, 249, 249),
    key_bg: Color::Rgb(96, 96, 96),
    active: Color::Rgb(6, 95, 212),
  },
  Theme {
    name: "Terminal",
    bg: Color::Reset,
    fg: Color::White,
    accent: Color::Red,
    muted: Color::DarkGray,
    border: Color::Gray,
    highlight_fg: Color::Black,
    highlight_bg: Color::White,
    stripe_bg: Color::Reset,
    status: Color::Cyan,
    error: Color::LightRed,
    key_fg: Color::Black,
    key_bg: Color::Gray,
    active: Color::Cyan,
  },
];

/// Index of the theme called `name`, or the first theme.
pub fn index_of(name: Option<&str>) -> usize {
  name.and_then(|n| THEMES.iter().position(|t| t.name.eq_ignore_ascii_case(n))).unwrap_or(0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_of_known_unknown_and_missing() {
    assert_eq!(index_of(Some("Paper")), 1);
    assert_eq!(index_of(Some("terminal")), 2);
    assert_eq!(index_of(Some("neon")), 0);
    assert_eq!(index_of(None), 0);
  }

  #[test]
  fn theme_names_unique() {
    for (i, a) in THEMES.iter().enumerate() {
      for b in &THEMES[i + 1..] {
        assert_ne!(a.name, b.name);
      }
    }
  }
}
