//! Picto Guess - timed picture-to-word guessing game
//!
//! Look at the emoji. Spell the word. Beat the clock.

mod app;
mod config;
mod error;
mod game;
mod logging;
mod tui;

use app::{AppCoordinator, Screen};
use clap::Parser;
use config::Args;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use std::time::{Duration, Instant};
use tui::Tui;

/// Longest the loop blocks on input when no clock needs service
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> error::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_path()?)?;
    info!(
        "starting (seed: {:?}, first question: {})",
        args.seed, args.start_at
    );

    let mut terminal = Tui::new()?;
    let mut coordinator = AppCoordinator::new(args.seed, args.start_index());

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        // Poll for input, waking up in time for the next countdown tick
        let timeout = coordinator.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut coordinator, key);
                }
            }
        }

        coordinator.tick(Instant::now());

        if coordinator.should_quit {
            break;
        }
    }

    info!("quitting");
    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Route a key press to the current screen
fn handle_key(coordinator: &mut AppCoordinator, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        coordinator.quit();
        return;
    }

    match &mut coordinator.screen {
        Screen::Welcome { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => coordinator.menu_up(),
            KeyCode::Down | KeyCode::Char('j') => coordinator.menu_down(),
            KeyCode::Enter => coordinator.menu_select(),
            KeyCode::Esc | KeyCode::Char('q') => coordinator.quit(),
            _ => {}
        },
        Screen::Instructions => match key.code {
            KeyCode::Enter => coordinator.start_game(),
            KeyCode::Esc => coordinator.go_to_welcome(),
            _ => {}
        },
        Screen::Playing { app } if app.is_round_over() => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.toggle_dialog(),
            KeyCode::Enter => app.on_confirm(),
            KeyCode::Char('n') | KeyCode::Char('N') => app.on_new_game(),
            KeyCode::Esc => coordinator.go_to_welcome(),
            _ => {}
        },
        Screen::Playing { app } => match key.code {
            KeyCode::Esc => coordinator.go_to_welcome(),
            KeyCode::Left => app.cursor_left(),
            KeyCode::Right => app.cursor_right(),
            KeyCode::Enter | KeyCode::Char(' ') => app.on_select(),
            KeyCode::Backspace => app.on_backspace(),
            KeyCode::Char('?') => app.on_hint(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => app.on_char(c),
            _ => {}
        },
    }
}
