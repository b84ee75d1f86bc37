//! UI rendering using ratatui
//!
//! Screens:
//! - Welcome: logo and menu
//! - Instructions: rules, scoring and hints
//! - Playing: glyph, countdown, answer slots, letter grid, and the
//!   game-over dialog once the round ends

use crate::app::{App, AppCoordinator, DialogChoice, MenuOption, Screen, Tone};
use crate::game::round::{PoolTile, BASE_WIN_POINTS};
use crate::game::{Outcome, SessionSnapshot, HINT_COST, ROUND_SECONDS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Seconds left at which the countdown turns red
const URGENT_SECONDS: u32 = 5;

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Welcome { selected } => render_welcome(frame, *selected),
        Screen::Instructions => render_instructions(frame),
        Screen::Playing { app } => render_game(frame, app),
    }
}

/// Render the welcome menu
fn render_welcome(frame: &mut Frame, selected: usize) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Logo
            Constraint::Length(2),  // Tagline
            Constraint::Min(5),     // Menu options
            Constraint::Length(2),  // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 ___ ___ ___ _____ ___     ___ _   _ ___ ___ ___
| _ \_ _/ __|_   _/ _ \   / __| | | | __/ __/ __|
|  _/| | (__  | || (_) | | (_ | |_| | _|\__ \__ \
|_| |___\___| |_| \___/   \___|\___/|___|___/___/
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let tagline = Paragraph::new("Look at the picture. Spell the word. Beat the clock.")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(Line::from(format!("{}{}", prefix, opt.label())).centered()).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), layout[2]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Render the how-to-play screen
fn render_instructions(frame: &mut Frame) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(2), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new("How To Play")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let heading = Style::default().fg(Color::Yellow).bold();
    let body = vec![
        Line::styled("Goal", heading),
        Line::from(format!(
            "  Name the English word behind the emoji within {} seconds.",
            ROUND_SECONDS
        )),
        Line::from(""),
        Line::styled("Playing", heading),
        Line::from("  Type letters, or move with ←→ and press Space, to fill the slots."),
        Line::from("  Each letter in the grid can be used once per attempt."),
        Line::from("  A wrong word is cleared and you can try again while time remains."),
        Line::from("  Backspace clears the letters you have picked."),
        Line::from(""),
        Line::styled("Scoring", heading),
        Line::from(format!("  Correct answer: {} points", BASE_WIN_POINTS)),
        Line::from("  Time bonus: +1 point per second left on the clock"),
        Line::from(format!(
            "  Example: correct with 8 seconds left = {} points",
            BASE_WIN_POINTS + 8
        )),
        Line::from(""),
        Line::styled("Hints", heading),
        Line::from(format!("  Press ? to reveal a clue for {} points.", HINT_COST)),
    ];
    let body = Paragraph::new(body).wrap(Wrap { trim: false });
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new("Enter Start  Esc Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Render the in-game screen
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let snapshot = app.session().snapshot();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + score
            Constraint::Length(1), // Timer text
            Constraint::Length(1), // Timer gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Glyph
            Constraint::Length(1), // Question number
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Answer slots
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Letter grid
            Constraint::Length(1), // Feedback
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    render_header(frame, layout[0], &snapshot);
    render_timer(frame, layout[1], layout[2], snapshot.round.time_remaining);

    let glyph = Paragraph::new(snapshot.round.glyph).alignment(Alignment::Center);
    frame.render_widget(glyph, layout[4]);

    let number = Paragraph::new(format!(
        "Question {}/{}",
        snapshot.question_number, snapshot.total_questions
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(number, layout[5]);

    let slots = Paragraph::new(format_slots(&snapshot.round.slots))
        .style(Style::default().fg(Color::White).bold())
        .alignment(Alignment::Center);
    frame.render_widget(slots, layout[7]);

    if let Some(hint) = app.hint {
        let hint = Paragraph::new(format!("Hint: {}", hint))
            .style(Style::default().fg(Color::Cyan).italic())
            .alignment(Alignment::Center);
        frame.render_widget(hint, layout[8]);
    }

    render_letter_grid(frame, layout[10], &snapshot.round.pool, app.cursor);

    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(tone_color(app.tone)))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[11]);

    let footer = Paragraph::new(format!(
        "A-Z/Space Pick  ←→ Move  Backspace Clear  ? Hint (-{})  Esc Menu",
        HINT_COST
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout[12]);

    if snapshot.round.outcome != Outcome::Playing {
        render_game_over(frame, area, app, &snapshot);
    }
}

/// Render the title bar with the running score
fn render_header(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(inner);

    let title = Paragraph::new("PICTO GUESS")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let score = Paragraph::new(format!("Score: {}", snapshot.score))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score, header_layout[1]);
}

/// Render the countdown text and progress bar
fn render_timer(frame: &mut Frame, text_area: Rect, gauge_area: Rect, seconds: u32) {
    let color = if seconds <= URGENT_SECONDS {
        Color::Red
    } else {
        Color::Blue
    };

    let text = Paragraph::new(format!("Time: {}s", seconds))
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(text, text_area);

    let ratio = f64::from(seconds.min(ROUND_SECONDS)) / f64::from(ROUND_SECONDS);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label("");
    frame.render_widget(gauge, centered_rect(40, 1, gauge_area));
}

/// Render the pool as a row of tiles; used letters are dimmed
fn render_letter_grid(frame: &mut Frame, area: Rect, tiles: &[PoolTile], cursor: usize) {
    let spans: Vec<Span> = tiles
        .iter()
        .enumerate()
        .flat_map(|(i, tile)| {
            let mut style = if tile.used {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan).bold()
            };
            if i == cursor {
                style = style.reversed();
            }
            [Span::styled(format!(" {} ", tile.letter), style), Span::raw(" ")]
        })
        .collect();

    let grid = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Letters"),
        );
    frame.render_widget(grid, area);
}

/// Render the end-of-round dialog over the game screen
fn render_game_over(frame: &mut Frame, area: Rect, app: &App, snapshot: &SessionSnapshot) {
    let won = snapshot.round.outcome == Outcome::Won;
    let dialog_area = centered_rect(44, 10, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if won { Color::Green } else { Color::Red }));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Score
            Constraint::Length(1), // Answer (loss only)
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

    let title_color = if won { Color::Green } else { Color::Red };
    let title = Paragraph::new(app.dialog_title().unwrap_or_default())
        .style(Style::default().fg(title_color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let score = Paragraph::new(format!("Score: {}", snapshot.score))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, layout[2]);

    if !won {
        let answer = Paragraph::new(format!(
            "Answer: {}",
            app.session().round().question().answer
        ))
        .style(Style::default().fg(Color::Blue))
        .alignment(Alignment::Center);
        frame.render_widget(answer, layout[3]);
    }

    let message = if won {
        "You got it! Keep going?"
    } else {
        "Don't worry, give it another go!"
    };
    let message = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(message, layout[4]);

    let again_label = if won { "Continue" } else { "Try Again" };
    let button = |label: &str, choice: DialogChoice| {
        let style = if app.dialog == choice {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("[ {} ]", label), style)
    };
    let buttons = Line::from(vec![
        button(again_label, DialogChoice::PlayAgain),
        Span::raw("   "),
        button("New Game", DialogChoice::NewGame),
    ]);
    frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), layout[6]);
}

/// Format answer slots: picked letters, `_` for the rest
fn format_slots(slots: &[Option<char>]) -> String {
    slots
        .iter()
        .map(|slot| slot.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::White,
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn draw(coordinator: &AppCoordinator) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| render(frame, coordinator)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_format_slots() {
        assert_eq!(format_slots(&[Some('C'), None, None]), "C _ _");
        assert_eq!(format_slots(&[]), "");
    }

    #[test]
    fn test_centered_rect_shrinks_to_fit() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(44, 10, area), area);
        assert_eq!(centered_rect(10, 3, area), Rect::new(5, 1, 10, 3));
    }

    #[test]
    fn test_welcome_lists_menu() {
        let coordinator = AppCoordinator::new(None, 0);
        let screen = draw(&coordinator);
        assert!(screen.contains("Start Game"));
        assert!(screen.contains("How To Play"));
    }

    #[test]
    fn test_instructions_show_scoring() {
        let mut coordinator = AppCoordinator::new(None, 0);
        coordinator.show_instructions();
        let screen = draw(&coordinator);
        assert!(screen.contains("Scoring"));
        assert!(screen.contains("18 points"));
    }

    #[test]
    fn test_game_screen_shows_progress_and_timer() {
        let mut coordinator = AppCoordinator::new(Some(4), 0);
        coordinator.start_game();
        let screen = draw(&coordinator);
        assert!(screen.contains("Question 1/35"));
        assert!(screen.contains("Time: 15s"));
        assert!(screen.contains("Score: 0"));
    }

    #[test]
    fn test_game_over_dialog_reveals_answer() {
        let mut coordinator = AppCoordinator::new(Some(4), 0);
        coordinator.start_game();
        let t0 = Instant::now();
        coordinator.tick(t0);
        coordinator.tick(t0 + Duration::from_secs(ROUND_SECONDS as u64));

        let screen = draw(&coordinator);
        assert!(screen.contains("TIME'S UP!"));
        assert!(screen.contains("Answer: BUTTERFLY"));
        assert!(screen.contains("Try Again"));
    }
}
