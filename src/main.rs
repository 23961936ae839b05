//! WORDSHOP - a daily word-building tile game for the terminal
//!
//! Buy letters from the shop, lay them on the grid, spell words across
//! and down. Every letter costs a coin; the shop costs more.

mod app;
mod config;
mod game;
mod tui;

use anyhow::Context;
use app::App;
use config::Config;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use game::{seeded_rng, today_seed, GameSession, WordList};
use tracing::info;
use tui::Tui;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = config::load_config().context("failed to load configuration")?;
    let words = load_words(&config)?;
    info!(words = words.len(), "dictionary ready");

    let seed = config.seed.clone().unwrap_or_else(today_seed);
    info!(%seed, "seeding shop");
    let session = GameSession::new(config.rules(), words, seeded_rng(&seed));
    let mut app = App::new(session, seed);

    let mut terminal = Tui::new()?;
    terminal.enter()?;

    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                handle_key(&mut app, key);
            }
        }
    }

    info!(
        score = app.session().score(),
        balance = app.session().balance(),
        "game over"
    );
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.on_drop(),
        KeyCode::Char('r') => app.on_refresh(),
        KeyCode::Char('s') => app.on_shuffle(),
        KeyCode::Char('u') => app.on_undo(),
        KeyCode::Char(c @ '1'..='7') => app.select_slot(c as usize - '1' as usize),
        _ => {}
    }
}

fn load_words(config: &Config) -> anyhow::Result<WordList> {
    match &config.dictionary {
        Some(path) => WordList::load(path)
            .with_context(|| format!("failed to load dictionary {}", path.display())),
        None => Ok(WordList::embedded().clone()),
    }
}

/// Log to a file in the data directory; the terminal belongs to the UI.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = config::project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .context("could not determine data directory")?;
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("wordshop.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordshop=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
