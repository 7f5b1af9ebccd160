//! BLOCKFALL - a terminal falling-block puzzle game

mod board;
mod game;
mod generator;
mod input;
mod piece;
mod settings;
mod tetromino;
mod ui;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use game::Game;
use input::InputHandler;
use ratatui::{backend::CrosstermBackend, Terminal};
use settings::Settings;
use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

/// Target frame rate for input polling and rendering
const TARGET_FPS: u64 = 30;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

fn main() -> io::Result<()> {
    // Log to a file; the terminal belongs to the UI
    let log_dir = std::env::temp_dir().join("blockfall");
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::never(&log_dir, "blockfall.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blockfall=debug".parse().unwrap()),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "blockfall starting up, log={}",
        log_dir.join("blockfall.log").display()
    );

    let settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    if let Err(e) = settings.save() {
        eprintln!("Warning: could not save settings: {}", e);
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
) -> io::Result<()> {
    let mut game = Game::new();
    let input = InputHandler::from_settings(settings);
    let gravity = Duration::from_millis(settings.gameplay.gravity_ms);
    let mut last_fall = Instant::now();

    loop {
        terminal.draw(|frame| ui::render_game(frame, &game))?;

        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if game.is_game_over() {
                        // Any key leaves the game-over screen
                        return Ok(());
                    }
                    if let Some(action) = input.map_key(key) {
                        game.process_action(action);
                    }
                }
            }
        }

        // The piece falls on its own even without input
        if !game.is_game_over() && last_fall.elapsed() >= gravity {
            game.tick();
            last_fall = Instant::now();
        }
    }
}
