#![allow(dead_code)]
//! Session controller
//!
//! Owns the running score and the position in the question bank, applies
//! scoring and hint costs, and decides what "play again" means once a round
//! is over.

use super::bank::{self, Question};
use super::round::{Outcome, Round, RoundSnapshot, Selection, Tick};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Score deducted for revealing a hint
pub const HINT_COST: u32 = 5;

/// Discrete events reported to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    RoundWon { score_delta: u32 },
    RoundLost,
    GuessRejected { guess: String },
    HintGranted(&'static str),
    HintDenied,
}

/// Read-only view of the whole session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub score: u32,
    /// 1-based question number
    pub question_number: usize,
    pub total_questions: usize,
    pub round: RoundSnapshot,
}

pub struct Session<R = StdRng> {
    bank: &'static [Question],
    rng: R,
    score: u32,
    question_index: usize,
    round: Round,
}

impl Session<StdRng> {
    /// New game over the built-in bank with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::seeded(None)
    }

    /// New game over the built-in bank; a seed makes every pool reproducible.
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::seeded_at(seed, 0)
    }

    /// Like `seeded`, but the first round is question `index` (clamped to
    /// the bank). Later calls to `new_game` still begin at question one.
    pub fn seeded_at(seed: Option<u64>, index: usize) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let bank = bank::questions();
        let question_index = index.min(bank.len() - 1);
        let round = Round::start(bank[question_index], &mut rng);
        Self {
            bank,
            rng,
            score: 0,
            question_index,
            round,
        }
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// New game over a custom bank. Returns `None` for an empty bank.
    pub fn with_bank(bank: &'static [Question], rng: R) -> Option<Self> {
        Self::starting_at(bank, 0, rng)
    }

    /// New game whose first round is `bank[index]`. Returns `None` when the
    /// index is outside the bank.
    pub fn starting_at(bank: &'static [Question], index: usize, mut rng: R) -> Option<Self> {
        let question = *bank.get(index)?;
        let round = Round::start(question, &mut rng);
        Some(Self {
            bank,
            rng,
            score: 0,
            question_index: index,
            round,
        })
    }

    /// Select a letter in the current round.
    pub fn select_letter(&mut self, letter: char) -> Option<GameEvent> {
        match self.round.select_letter(letter) {
            Selection::Won { .. } => {
                let score_delta = self.round.score_delta();
                self.score += score_delta;
                info!("round won: +{} (score {})", score_delta, self.score);
                Some(GameEvent::RoundWon { score_delta })
            }
            Selection::Rejected { guess } => Some(GameEvent::GuessRejected { guess }),
            Selection::Placed | Selection::Ignored(_) => None,
        }
    }

    /// Deliver one countdown tick to the current round.
    pub fn tick(&mut self) -> Option<GameEvent> {
        let tick = self.round.tick();
        self.on_tick(tick)
    }

    /// Drive the round's own clock up to `now`.
    pub fn advance_clock(&mut self, now: Instant) -> Option<GameEvent> {
        let tick = self.round.advance_clock(now)?;
        self.on_tick(tick)
    }

    fn on_tick(&mut self, tick: Tick) -> Option<GameEvent> {
        match tick {
            Tick::Expired => {
                info!("round lost on question {} (score {})", self.question_number(), self.score);
                Some(GameEvent::RoundLost)
            }
            Tick::Counted { .. } | Tick::Stale => None,
        }
    }

    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.round.until_next_tick(now)
    }

    pub fn clear_guess(&mut self) -> bool {
        self.round.clear_guess()
    }

    /// Spend score on the current question's hint.
    pub fn request_hint(&mut self) -> GameEvent {
        if self.score >= HINT_COST {
            self.score -= HINT_COST;
            debug!("hint granted (score {})", self.score);
            GameEvent::HintGranted(self.round.question().hint)
        } else {
            debug!("hint denied (score {})", self.score);
            GameEvent::HintDenied
        }
    }

    /// Continue after a finished round: the next question after a win if
    /// one remains, otherwise the same question again. Returns false while
    /// the round is still being played.
    pub fn play_again(&mut self) -> bool {
        match self.round.outcome() {
            Outcome::Playing => false,
            Outcome::Won if self.question_index + 1 < self.bank.len() => {
                self.question_index += 1;
                self.round = Round::start(self.bank[self.question_index], &mut self.rng);
                true
            }
            Outcome::Won | Outcome::Lost => {
                self.reset_round();
                true
            }
        }
    }

    /// Restart the current question with a fresh pool and full time.
    pub fn reset_round(&mut self) {
        self.round.reset(&mut self.rng);
    }

    /// Back to question one with a zero score.
    pub fn new_game(&mut self) {
        info!("new game (previous score {})", self.score);
        self.score = 0;
        self.question_index = 0;
        self.round = Round::start(self.bank[0], &mut self.rng);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn question_number(&self) -> usize {
        self.question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Outcome of the current round, if it has finished.
    pub fn last_outcome(&self) -> Option<Outcome> {
        match self.round.outcome() {
            Outcome::Playing => None,
            outcome => Some(outcome),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            question_number: self.question_number(),
            total_questions: self.total_questions(),
            round: self.round.snapshot(),
        }
    }
}
