mod app;
mod browser;
mod catalog;
mod config;
mod constants;
mod input;
mod logging;
mod pagination;
mod player;
mod query;
mod session;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use ratatui::{
  DefaultTerminal,
  crossterm::event::{self, Event, KeyEventKind},
};
use std::io::Write;
use std::time::Duration;
use tracing::info;

use app::App;
use browser::Browser;
use catalog::{format_views, generate_catalog};
use config::Config;
use constants::constants;
use pagination::PageSize;
use player::Player;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(
  author,
  version = env!("CARGO_PKG_VERSION"),
  about = "A demo video browser over generated sample data",
  long_about = None
)]
struct Args {
  /// Cards revealed per "load more"
  #[arg(long, value_parser = parse_positive)]
  page_size: Option<usize>,

  /// Number of generated videos
  #[arg(long, value_parser = parse_positive)]
  catalog_size: Option<usize>,

  /// Seed for the generated view counts and durations
  #[arg(long)]
  seed: Option<u64>,

  /// Initial search query
  #[arg(short, long)]
  query: Option<String>,

  /// Print matching videos and exit instead of starting the UI
  #[arg(long)]
  list: bool,

  /// With --list: print every match instead of the first page
  #[arg(long, requires = "list")]
  all: bool,

  /// With --list: print JSON
  #[arg(long, requires = "list")]
  json: bool,

  /// Never start the external media player
  #[arg(long)]
  no_player: bool,

  /// Print shell completions and exit
  #[arg(long, value_name = "SHELL")]
  completions: Option<Shell>,
}

fn parse_positive(s: &str) -> Result<usize, String> {
  match s.parse::<usize>() {
    Ok(0) => Err("must be greater than zero".to_string()),
    Ok(n) => Ok(n),
    Err(e) => Err(e.to_string()),
  }
}

/// Merge CLI overrides over prefs and build the browsing core.
fn build_browser(args: &Args, config: &Config) -> Browser {
  let page_size = args.page_size.and_then(PageSize::new).unwrap_or_else(|| config.page_size());
  let catalog_size = args.catalog_size.unwrap_or_else(|| config.catalog_size());
  let seed = args.seed.unwrap_or_else(|| config.seed());
  let catalog = generate_catalog(catalog_size, seed, &constants().thumbnail_template);
  info!(catalog_size, seed, page_size = page_size.get(), "catalog generated");
  Browser::new(catalog, page_size)
}

// --- Headless listing ---

fn print_listing(browser: &Browser, all: bool, json: bool) -> Result<()> {
  let records = if all { query::search(browser.catalog(), browser.query()) } else { browser.visible() };
  let mut out = std::io::stdout().lock();
  if json {
    serde_json::to_writer_pretty(&mut out, &records).context("Failed to serialize listing")?;
    writeln!(out)?;
  } else {
    for v in &records {
      writeln!(out, "{}\t{}\t{}\t{}\t{}", v.id, v.title, v.channel, format_views(v.views), v.duration)?;
    }
    if !all && !browser.is_exhausted() {
      writeln!(out, "… {} of {} shown (use --all)", browser.shown(), browser.result_len())?;
    }
  }
  Ok(())
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(shell) = args.completions {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    return Ok(());
  }

  if args.list {
    logging::init_stderr()?;
    let config = Config::load();
    let mut browser = build_browser(&args, &config);
    if let Some(q) = &args.query {
      browser.set_query(q);
    }
    return print_listing(&browser, args.all, args.json);
  }

  let _log_guard = logging::init_file()?;
  let config = Config::load();
  let browser = build_browser(&args, &config);
  let player = Player::new(constants().player_command.clone(), config.autoplay() && !args.no_player);
  let mut app = App::new(browser, player, config, args.query.as_deref());

  let default_hook = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    ratatui::restore();
    default_hook(info);
  }));

  let mut terminal = ratatui::init();
  let result = run(&mut terminal, &mut app).await;
  ratatui::restore();
  app.shutdown().await;
  info!("exit");
  result
}

async fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
  loop {
    app.expire_error();
    app.player.check_status();

    terminal.draw(|frame| ui::ui(frame, app)).context("Failed to draw frame")?;

    if event::poll(Duration::from_millis(100)).context("Failed to poll terminal events")? {
      match event::read().context("Failed to read terminal event")? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
          input::handle_key_event(app, key).await;
        }
        _ => {}
      }
    }

    if app.should_quit {
      break;
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cli_definition_is_valid() {
    Args::command().debug_assert();
  }

  #[test]
  fn parse_positive_rejects_zero_and_garbage() {
    assert_eq!(parse_positive("8"), Ok(8));
    assert!(parse_positive("0").is_err());
    assert!(parse_positive("-1").is_err());
    assert!(parse_positive("eight").is_err());
  }

  #[test]
  fn cli_overrides_prefs() {
    let args = Args::parse_from(["minitube", "--page-size", "5", "--catalog-size", "20", "--seed", "3"]);
    let browser = build_browser(&args, &Config::default());
    assert_eq!(browser.catalog().len(), 20);
    assert_eq!(browser.shown(), 5);
  }

  #[test]
  fn cli_rejects_zero_page_size() {
    assert!(Args::try_parse_from(["minitube", "--page-size", "0"]).is_err());
  }

  #[test]
  fn listing_flags_require_list() {
    assert!(Args::try_parse_from(["minitube", "--json"]).is_err());
    assert!(Args::try_parse_from(["minitube", "--list", "--json", "--all"]).is_ok());
  }
}
