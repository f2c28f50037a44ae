//! folio: a terminal portfolio page with scroll-tracked section navigation.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use folio::{app_state, config, formats, input, report, ui};
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const IDLE_POLL: Duration = Duration::from_millis(250);
const WHEEL_ROWS: i64 = 3;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio page with scroll-tracked section navigation", long_about = None)]
struct Args {
    /// Portfolio markdown document
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Rows before a heading reaches the top at which its section becomes active
    #[arg(long, allow_hyphen_values = true)]
    margin: Option<i64>,

    /// Frames a smooth scroll takes
    #[arg(long)]
    frames: Option<u32>,

    /// Maximum text width
    #[arg(long, short = 'w')]
    wrap_width: Option<usize>,

    /// Print section layout as JSON instead of starting the viewer
    #[arg(long)]
    layout: bool,

    /// Column width for --layout
    #[arg(long, default_value_t = 100, requires = "layout")]
    width: u16,

    /// Scroll offset to resolve the active section at, for --layout
    #[arg(long, requires = "layout", allow_hyphen_values = true)]
    at: Option<i64>,

    /// Write logs here (the terminal belongs to the viewer)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> folio::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(margin) = args.margin {
        cfg.activation_margin = margin;
    }
    if let Some(frames) = args.frames {
        cfg.scroll_frames = frames;
    }
    if let Some(wrap_width) = args.wrap_width {
        cfg.wrap_width = wrap_width;
    }

    let document = input::load_document(&args.path, &formats::markdown::MarkdownFormat)?;

    if args.layout {
        let page = folio::page::Page::new(
            document,
            app_state::page_width(args.width, cfg.wrap_width),
        );
        let report = report::LayoutReport::new(&page, cfg.activation_margin, args.at);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    run_tui(document, &cfg)?;
    Ok(())
}

fn init_logging(path: Option<&PathBuf>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_tui(document: input::Document, cfg: &config::Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = app_state::AppState::new(document, cfg, size.width, size.height);
    tracing::info!(
        width = size.width,
        height = size.height,
        sections = app.page.sections().len(),
        "viewer started"
    );

    let result = run_app(&mut terminal, &mut app, cfg);
    app.close();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "viewer failed");
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
    cfg: &config::Config,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(cfg.frame_millis.max(1));

    loop {
        app.frame();
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = if app.is_animating() {
            frame_interval
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.message = None;
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc => {
                        if app.menu_open {
                            app.menu_open = false;
                        } else {
                            return Ok(());
                        }
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                    KeyCode::PageUp => app.page_up(),
                    KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
                    KeyCode::Home | KeyCode::Char('g') => app.scroll_home(),
                    KeyCode::End | KeyCode::Char('G') => app.scroll_end(),
                    KeyCode::Tab => app.next_section(),
                    KeyCode::BackTab => app.prev_section(),
                    KeyCode::Char('m') => {
                        app.toggle_menu();
                        if !app.is_compact() {
                            app.message = Some("Menu is only used in narrow terminals".to_string());
                        }
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        let index = c
                            .to_digit(10)
                            .and_then(|d| usize::try_from(d).ok())
                            .map_or(0, |d| d - 1);
                        if index < app.page.sections().len() {
                            app.scroll_to_index(index);
                        } else {
                            app.message = Some(format!("No section {c}"));
                        }
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_ROWS),
                MouseEventKind::ScrollDown => app.scroll_by(WHEEL_ROWS),
                _ => {}
            },
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }
    }
}
