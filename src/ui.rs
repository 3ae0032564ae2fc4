use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, BorderType, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, AppMode};
use crate::catalog::{self, VideoRecord, format_views};
use crate::player::media_url;
use crate::theme::Theme;

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

pub fn subscribe_label(subscribed: bool) -> &'static str {
  if subscribed { "Subscribed" } else { "Subscribe" }
}

/// A `width`×`height` rect centered in `area`, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let w = width.min(area.width);
  let h = height.min(area.height);
  Rect { x: area.x + (area.width - w) / 2, y: area.y + (area.height - h) / 2, width: w, height: h }
}

fn rounded(theme: &Theme) -> Block<'static> {
  Block::bordered().border_type(BorderType::Rounded).border_style(Style::default().fg(theme.border))
}

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();

  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, input_area, main_area, status_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Min(3),
    Constraint::Length(1),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, theme, header_area);
  render_input(frame, app, input_area);
  render_main(frame, app, main_area);
  render_status(frame, app, status_area);
  render_footer(frame, app, footer_area);

  if app.mode == AppMode::Player
    && let Some(video) = app.browser.active_video()
  {
    render_modal(frame, app, video, main_area);
  }
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
  let left = Line::from(vec![
    Span::styled(" ☰ ", Style::default().fg(theme.muted)),
    Span::styled("▶ MiniTube ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
  ]);
  frame.render_widget(left, area);

  let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let version_w = area.width.min(version.len() as u16);
  let right_area = Rect { x: area.x + area.width - version_w, width: version_w, ..area };
  frame.render_widget(right, right_area);
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
  if app.sidebar_visible {
    let [side_area, grid_area] = Layout::horizontal([Constraint::Length(24), Constraint::Min(20)]).areas(area);
    render_sidebar(frame, app, side_area);
    render_grid(frame, app, grid_area);
  } else {
    render_grid(frame, app, area);
  }
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let session = app.browser.session();
  let mut lines = vec![
    Line::from(Span::styled("Home", Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))),
    Line::from(Span::styled(format!("Liked videos ({})", session.liked_count()), Style::default().fg(theme.fg))),
    Line::from(""),
    Line::from(Span::styled(
      format!("Subscriptions ({})", session.subscription_count()),
      Style::default().fg(theme.muted),
    )),
  ];
  for channel in catalog::channels(app.browser.catalog()) {
    let subscribed = app.browser.is_subscribed(channel);
    let mark = if subscribed { "● " } else { "○ " };
    let color = if subscribed { theme.active } else { theme.fg };
    lines.push(Line::from(vec![
      Span::styled(mark, Style::default().fg(color)),
      Span::styled(channel.to_string(), Style::default().fg(theme.fg)),
    ]));
  }
  let block = rounded(theme).title(" Menu ").padding(Padding::horizontal(1));
  frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();

  if app.browser.result_len() == 0 {
    let text = vec![
      Line::from(""),
      Line::from(Span::styled("No videos found", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))),
      Line::from(""),
      Line::from(Span::styled(
        "Try another search, or clear the box to see everything.",
        Style::default().fg(theme.muted),
      )),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(rounded(theme));
    frame.render_widget(paragraph, area);
    return;
  }

  // Inner width: area minus 2 borders minus 2 chars for highlight symbol ("▶ ")
  let inner_w = area.width.saturating_sub(4) as usize;
  let selected = app.list_state.selected();

  let items: Vec<ListItem> = app
    .browser
    .visible()
    .into_iter()
    .enumerate()
    .map(|(i, video)| {
      let is_selected = Some(i) == selected;
      let fg = if is_selected { theme.highlight_fg } else { theme.fg };
      let bg = if is_selected {
        theme.highlight_bg
      } else if i % 2 == 1 {
        theme.stripe_bg
      } else {
        theme.bg
      };

      let liked = app.browser.is_liked(&video.id);
      let badge = if liked { " ♥" } else { "" };
      let title_max = inner_w.saturating_sub(badge.chars().count());
      let title = Line::from(vec![
        Span::styled(truncate_str(&video.title, title_max), Style::default().fg(fg).add_modifier(Modifier::BOLD)),
        Span::styled(badge, Style::default().fg(theme.active)),
      ]);

      let channel_color = if app.browser.is_subscribed(&video.channel) { theme.active } else { theme.muted };
      let meta = Line::from(vec![
        Span::styled(video.channel.clone(), Style::default().fg(channel_color)),
        Span::styled(
          format!("  {} • {}", format_views(video.views), video.duration),
          Style::default().fg(theme.muted),
        ),
      ]);

      ListItem::new(vec![title, meta]).bg(bg)
    })
    .collect();

  let title = format!(" Videos — {} of {} ", app.browser.shown(), app.browser.result_len());
  let mut block = rounded(theme)
    .title(title)
    .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD));
  if !app.browser.is_exhausted() {
    block =
      block.title_bottom(Line::from(Span::styled(" m: Load more ", Style::default().fg(theme.status))).centered());
  }

  let border_color = if app.mode == AppMode::Grid { theme.accent } else { theme.border };
  let list = List::new(items)
    .block(block.border_style(Style::default().fg(border_color)))
    .highlight_symbol("▶ ")
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD));

  frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_modal(frame: &mut Frame, app: &App, video: &VideoRecord, area: Rect) {
  let theme = app.theme();
  let popup = centered(area, 72, 16);
  frame.render_widget(Clear, popup);

  let inner_w = popup.width.saturating_sub(4) as usize;
  let liked = app.browser.is_liked(&video.id);
  let subscribed = app.browser.is_subscribed(&video.channel);
  let like_style =
    if liked { Style::default().fg(theme.key_fg).bg(theme.active) } else { Style::default().fg(theme.fg) };
  let sub_style =
    if subscribed { Style::default().fg(theme.muted) } else { Style::default().fg(theme.key_fg).bg(theme.accent) };

  let playback = if app.player.is_playing() { "♪ playing in external player" } else { "player idle" };

  let lines = vec![
    Line::from(Span::styled(
      truncate_str(&video.title, inner_w),
      Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(
      format!("{} • {}", format_views(video.views), video.duration),
      Style::default().fg(theme.muted),
    )),
    Line::from(""),
    Line::from(vec![
      Span::styled(video.channel.clone(), Style::default().fg(theme.fg)),
      Span::raw("  "),
      Span::styled(format!(" {} ", subscribe_label(subscribed)), sub_style),
      Span::raw("  "),
      Span::styled(format!(" ♥ {} ", app.browser.session().like_count(&video.id)), like_style),
    ]),
    Line::from(""),
    Line::from(Span::styled(video.description.clone(), Style::default().fg(theme.fg))),
    Line::from(""),
    Line::from(vec![
      Span::styled("Thumbnail  ", Style::default().fg(theme.muted)),
      Span::styled(truncate_str(&video.thumbnail_url, inner_w.saturating_sub(11)), Style::default().fg(theme.fg)),
    ]),
    Line::from(vec![
      Span::styled("Source     ", Style::default().fg(theme.muted)),
      Span::styled(
        truncate_str(media_url(video), inner_w.saturating_sub(11)),
        Style::default().fg(theme.accent).underlined(),
      ),
    ]),
    Line::from(Span::styled(playback, Style::default().fg(theme.status))),
  ];

  let block = rounded(theme)
    .title(Line::from(Span::styled(" Now Playing ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))))
    .border_style(Style::default().fg(theme.accent))
    .padding(Padding::horizontal(1))
    .style(Style::default().bg(theme.bg));
  frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), popup);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = if let Some(err) = &app.last_error {
    (format!(" ⚠  {}", err), Style::default().fg(theme.error))
  } else if let Some(msg) = &app.status_message {
    (format!(" {}", msg), Style::default().fg(theme.status))
  } else {
    (" Ready".to_string(), Style::default().fg(theme.muted))
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let border_color = if app.mode == AppMode::Input { theme.accent } else { theme.border };
  let input_block = Block::bordered()
    .title(" Search ")
    .title_style(Style::default().fg(border_color))
    .border_type(BorderType::Rounded)
    .border_style(Style::default().fg(border_color))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let cursor_col = display_width(&app.input, app.cursor_position);

  // No room for text inside the borders: keep the scroll and skip the cursor.
  if inner_w == 0 {
    frame.render_widget(input_block, area);
    return;
  }

  if cursor_col < app.input_scroll {
    app.input_scroll = cursor_col;
  } else if cursor_col >= app.input_scroll + inner_w {
    app.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }

  let visible: String = app
    .input
    .chars()
    .scan(0usize, |col, c| {
      let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(_, end, _)| *end <= app.input_scroll)
    .take_while(|(start, _, _)| *start < app.input_scroll + inner_w)
    .map(|(_, _, c)| c)
    .collect();

  let paragraph = Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block);
  frame.render_widget(paragraph, area);

  if app.mode == AppMode::Input {
    let cursor_x = area.x + 2 + cursor_col.saturating_sub(app.input_scroll) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
  }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let has_cards = app.browser.shown() > 0;
  let mut keys: Vec<(&str, &str)> = match app.mode {
    AppMode::Input => {
      let mut k = vec![("Enter", "Search")];
      if has_cards {
        k.push(("↓", "Videos"));
      }
      k.push(("Esc", if app.input.is_empty() { "Quit" } else { "Clear" }));
      k
    }
    AppMode::Grid => {
      let mut k = vec![("Enter", "Open"), ("j/k", "Navigate")];
      if !app.browser.is_exhausted() {
        k.push(("m", "More"));
      }
      k.push(("/", "Search"));
      k.push(("q", "Quit"));
      k
    }
    AppMode::Player => {
      let like =
        if app.browser.active_video().is_some_and(|v| app.browser.is_liked(&v.id)) { "Unlike" } else { "Like" };
      let sub = if app.browser.active_video().is_some_and(|v| app.browser.is_subscribed(&v.channel)) {
        "Unsubscribe"
      } else {
        "Subscribe"
      };
      vec![("l", like), ("s", sub), ("Esc", "Close")]
    }
  };
  keys.push(("^b", "Menu"));
  keys.push(("^t", "Theme"));

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw("  "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let label_w = area.width.min(theme_label.len() as u16);
  let right_area = Rect { x: area.x + area.width - label_w, width: label_w, ..area };
  frame.render_widget(right, right_area);
}
