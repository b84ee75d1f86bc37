//! In-game presentation state
//!
//! `App` wraps a game `Session` and keeps the bits only the screen cares
//! about: the feedback line, the revealed hint, the letter-grid cursor and
//! the choice highlighted in the game-over dialog.

use crate::game::{GameEvent, Outcome, Session, HINT_COST};
use std::time::{Duration, Instant};

/// How the feedback line should be colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Good,
    Bad,
}

/// Buttons of the game-over dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    PlayAgain,
    NewGame,
}

impl DialogChoice {
    pub fn toggled(self) -> Self {
        match self {
            DialogChoice::PlayAgain => DialogChoice::NewGame,
            DialogChoice::NewGame => DialogChoice::PlayAgain,
        }
    }
}

/// Main in-game state
pub struct App {
    session: Session,
    /// Feedback message from the last action
    pub feedback: String,
    pub tone: Tone,
    /// Hint text bought for the current question
    pub hint: Option<&'static str>,
    /// Index into the letter pool
    pub cursor: usize,
    /// Highlighted dialog button once the round is over
    pub dialog: DialogChoice,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            feedback: String::new(),
            tone: Tone::Neutral,
            hint: None,
            cursor: 0,
            dialog: DialogChoice::PlayAgain,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_round_over(&self) -> bool {
        self.session.round().is_over()
    }

    /// Handle a typed letter (locked when round is over)
    pub fn on_char(&mut self, c: char) {
        if self.is_round_over() || !c.is_ascii_alphabetic() {
            return;
        }
        let letter = c.to_ascii_uppercase();
        if let Some(idx) = self.session.round().pool().position(letter) {
            self.cursor = idx;
        }
        self.select(letter);
    }

    /// Select the letter under the cursor
    pub fn on_select(&mut self) {
        if self.is_round_over() {
            return;
        }
        if let Some(&letter) = self.session.round().pool().letters().get(self.cursor) {
            self.select(letter);
        }
    }

    fn select(&mut self, letter: char) {
        self.feedback.clear();
        self.tone = Tone::Neutral;
        if let Some(event) = self.session.select_letter(letter) {
            self.apply(event);
        }
    }

    /// Clear the letters picked so far
    pub fn on_backspace(&mut self) {
        if self.session.clear_guess() {
            self.feedback.clear();
            self.tone = Tone::Neutral;
        }
    }

    pub fn on_hint(&mut self) {
        if self.is_round_over() {
            return;
        }
        let event = self.session.request_hint();
        self.apply(event);
    }

    pub fn cursor_left(&mut self) {
        let len = self.session.round().pool().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn cursor_right(&mut self) {
        let len = self.session.round().pool().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn toggle_dialog(&mut self) {
        if self.is_round_over() {
            self.dialog = self.dialog.toggled();
        }
    }

    /// Enter: select under the cursor while playing, confirm the dialog after
    pub fn on_confirm(&mut self) {
        if !self.is_round_over() {
            self.on_select();
            return;
        }
        match self.dialog {
            DialogChoice::PlayAgain => {
                self.session.play_again();
                self.reset_view();
            }
            DialogChoice::NewGame => self.on_new_game(),
        }
    }

    pub fn on_new_game(&mut self) {
        self.session.new_game();
        self.reset_view();
    }

    /// Advance the countdown to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(event) = self.session.advance_clock(now) {
            self.apply(event);
        }
    }

    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.session.until_next_tick(now)
    }

    /// Title for the game-over dialog
    pub fn dialog_title(&self) -> Option<&'static str> {
        match self.session.last_outcome()? {
            Outcome::Won => Some("CORRECT!"),
            Outcome::Lost => Some("TIME'S UP!"),
            Outcome::Playing => None,
        }
    }

    fn apply(&mut self, event: GameEvent) {
        let (text, tone) = match event {
            GameEvent::RoundWon { score_delta } => (format!("OK +{}", score_delta), Tone::Good),
            GameEvent::RoundLost => ("TIME'S UP!".to_string(), Tone::Bad),
            GameEvent::GuessRejected { guess } => {
                (format!("NOPE: {} - try again", guess), Tone::Bad)
            }
            GameEvent::HintGranted(text) => {
                self.hint = Some(text);
                (format!("HINT -{}", HINT_COST), Tone::Neutral)
            }
            GameEvent::HintDenied => (
                format!("Need at least {} points for a hint", HINT_COST),
                Tone::Bad,
            ),
        };
        self.feedback = text;
        self.tone = tone;
        if self.is_round_over() {
            self.dialog = DialogChoice::PlayAgain;
        }
    }

    fn reset_view(&mut self) {
        self.feedback.clear();
        self.tone = Tone::Neutral;
        self.hint = None;
        self.cursor = 0;
        self.dialog = DialogChoice::PlayAgain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROUND_SECONDS;

    /// Starts on CRYSTAL, followed by CAROUSEL; both can be spelled
    fn app() -> App {
        App::new(Session::seeded_at(Some(9), 15))
    }

    fn answer(app: &App) -> &'static str {
        app.session().round().question().answer
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.on_char(c);
        }
    }

    fn run_out_clock(app: &mut App) {
        let t0 = Instant::now();
        app.tick(t0);
        app.tick(t0 + Duration::from_secs(ROUND_SECONDS as u64));
    }

    fn distractor(app: &App) -> char {
        let round = app.session().round();
        *round
            .pool()
            .letters()
            .iter()
            .find(|c| !round.question().answer.contains(**c))
            .unwrap()
    }

    #[test]
    fn test_typing_answer_wins() {
        let mut app = app();
        let word = answer(&app);
        type_word(&mut app, &word.to_lowercase());
        assert!(app.is_round_over());
        assert_eq!(app.feedback, format!("OK +{}", 10 + ROUND_SECONDS));
        assert_eq!(app.tone, Tone::Good);
        assert_eq!(app.dialog_title(), Some("CORRECT!"));
    }

    #[test]
    fn test_typing_moves_cursor() {
        let mut app = app();
        let first = answer(&app).chars().next().unwrap();
        app.on_char(first);
        assert_eq!(app.session().round().pool().letters()[app.cursor], first);
    }

    #[test]
    fn test_wrong_guess_feedback() {
        let mut app = app();
        let word = answer(&app);
        let x = distractor(&app);
        type_word(&mut app, &word[..word.len() - 1]);
        app.on_char(x);

        assert!(app.session().round().guess().is_empty());
        assert!(app.feedback.starts_with("NOPE"));
        assert_eq!(app.tone, Tone::Bad);
        assert!(!app.is_round_over());
    }

    #[test]
    fn test_select_under_cursor() {
        let mut app = app();
        app.cursor_right();
        app.cursor_right();
        let letter = app.session().round().pool().letters()[2];
        app.on_confirm();
        assert_eq!(app.session().round().guess(), &[letter]);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        let len = app.session().round().pool().len();
        app.cursor_left();
        assert_eq!(app.cursor, len - 1);
        app.cursor_right();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_backspace_clears_guess() {
        let mut app = app();
        let first = answer(&app).chars().next().unwrap();
        app.on_char(first);
        app.on_backspace();
        assert!(app.session().round().guess().is_empty());
    }

    #[test]
    fn test_hint_denied_without_points() {
        let mut app = app();
        app.on_hint();
        assert_eq!(app.hint, None);
        assert_eq!(app.tone, Tone::Bad);
        assert_eq!(app.feedback, "Need at least 5 points for a hint");
    }

    #[test]
    fn test_hint_granted_after_win() {
        let mut app = app();
        let word = answer(&app);
        type_word(&mut app, word);
        app.on_confirm();
        assert!(!app.is_round_over());

        let score = app.session().score();
        app.on_hint();
        assert_eq!(app.hint, Some(app.session().round().question().hint));
        assert_eq!(app.session().score(), score - HINT_COST);
    }

    #[test]
    fn test_timeout_then_play_again_same_question() {
        let mut app = app();
        let index = app.session().question_index();
        run_out_clock(&mut app);
        assert!(app.is_round_over());
        assert_eq!(app.feedback, "TIME'S UP!");
        assert_eq!(app.dialog_title(), Some("TIME'S UP!"));

        app.on_confirm();
        assert!(!app.is_round_over());
        assert_eq!(app.session().question_index(), index);
        assert!(app.feedback.is_empty());
    }

    #[test]
    fn test_win_advances_to_next_question() {
        let mut app = app();
        let word = answer(&app);
        type_word(&mut app, word);
        app.on_confirm();
        assert_eq!(answer(&app), "CAROUSEL");
        assert_eq!(app.session().score(), 10 + ROUND_SECONDS);
        assert!(app.feedback.is_empty());
    }

    #[test]
    fn test_dialog_new_game() {
        let mut app = app();
        let word = answer(&app);
        type_word(&mut app, word);
        app.on_confirm();
        assert_eq!(app.session().question_index(), 16);

        let word = answer(&app);
        type_word(&mut app, word);
        app.toggle_dialog();
        assert_eq!(app.dialog, DialogChoice::NewGame);
        app.on_confirm();

        assert_eq!(app.session().question_index(), 0);
        assert_eq!(app.session().score(), 0);
        assert_eq!(app.hint, None);
    }

    #[test]
    fn test_input_locked_when_round_over() {
        let mut app = app();
        run_out_clock(&mut app);
        let x = distractor(&app);
        app.on_char(x);
        assert!(app.session().round().guess().is_empty());
        app.on_hint();
        assert_eq!(app.feedback, "TIME'S UP!");
    }

    #[test]
    fn test_dialog_toggle_ignored_mid_round() {
        let mut app = app();
        app.toggle_dialog();
        assert_eq!(app.dialog, DialogChoice::PlayAgain);
    }
}
