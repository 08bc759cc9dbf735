use {
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::Arguments,
  async_trait::async_trait,
  chrono::{Datelike, Local, TimeZone},
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  crossterm::{
    event as crossterm_event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  display_story::DisplayStory,
  effect::Effect,
  event::Event,
  fetch_scheduler::FetchScheduler,
  futures::stream::{self, StreamExt},
  help_view::HelpView,
  key_binding::KeyBinding,
  notice::Notice,
  pager::Pager,
  pipeline::Pipeline,
  plain_page::PlainPage,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  raw_story::RawStory,
  serde::{Deserialize, de::DeserializeOwned},
  source::Source,
  source_unavailable::SourceUnavailable,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  top_stories::TopStories,
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{format_comments, format_date, format_points, truncate},
};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod display_story;
mod effect;
mod event;
#[cfg(test)]
mod fake_source;
mod fetch_scheduler;
mod help_view;
mod key_binding;
mod logging;
mod notice;
mod pager;
mod pipeline;
mod plain_page;
mod raw_story;
mod source;
mod source_unavailable;
mod state;
mod top_stories;
mod utils;

const DEFAULT_CONCURRENCY: usize = 50;
const DEFAULT_LIMIT: usize = 50;
const DEFAULT_PAGE_SIZE: usize = 10;

const LIST_STATUS: &str = "←/→ page • ↑/↓ select • enter open • r refresh • ? help • q quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_STATUS: &str = "Loading...";
const LOADING_STORIES_STATUS: &str = "Loading top stories...";

const LOAD_FAILED_MESSAGE: &str = "Failed to load stories. Please refresh.";

const BASE_INDENT: &str = " ";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

type StoryId = u64;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

async fn print(arguments: &Arguments, pipeline: Pipeline<Client>) -> Result {
  let TopStories { error, stories } = pipeline.load_top_stories().await;

  if let Some(error) = error {
    bail!(error);
  }

  let mut pager = Pager::new(stories, arguments.page_size);

  pager.go_to(arguments.page);

  println!("{}", PlainPage(&pager));

  Ok(())
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  logging::init(arguments.log_file.as_deref(), arguments.print)?;

  let pipeline = arguments.pipeline();

  if arguments.print {
    return print(&arguments, pipeline).await;
  }

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(pipeline, arguments.page_size);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal).context("could not restore terminal")?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
