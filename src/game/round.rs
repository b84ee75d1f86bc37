#![allow(dead_code)]
//! Round state machine
//!
//! A round is one timed attempt at a single question. It starts `Playing`
//! and ends either `Won` (the guess spells the answer) or `Lost` (the
//! countdown reached zero). Nothing leaves a terminal state except a fresh
//! start of the round.

use super::bank::Question;
use super::pool::LetterPool;
use super::timer::Ticker;
use log::{debug, info, warn};
use rand::Rng;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Seconds on the clock at the start of every round
pub const ROUND_SECONDS: u32 = 15;

/// Points for a correct answer, before the time bonus
pub const BASE_WIN_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

/// Result of a letter selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Letter appended; the guess is not full yet
    Placed,
    /// The guess spelled the answer
    Won { time_remaining: u32 },
    /// A full-length guess was wrong and has been cleared
    Rejected { guess: String },
    /// Nothing changed
    Ignored(Ignored),
}

/// Why a selection was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    RoundOver,
    NotInPool,
    AlreadySelected,
}

/// Result of a single countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Counted { time_remaining: u32 },
    /// The clock hit zero and the round is lost
    Expired,
    /// The round had already ended; nothing changed
    Stale,
}

/// A letter tile in the pool as the player sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolTile {
    pub letter: char,
    pub used: bool,
}

/// Read-only view of a round for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub glyph: &'static str,
    /// One entry per answer letter; `None` for unfilled slots
    pub slots: Vec<Option<char>>,
    pub pool: Vec<PoolTile>,
    pub time_remaining: u32,
    pub outcome: Outcome,
}

pub struct Round {
    question: Question,
    pool: LetterPool,
    guess: Vec<char>,
    selected: HashSet<char>,
    time_remaining: u32,
    outcome: Outcome,
    clock: Ticker,
}

impl Round {
    /// Begin a round on `question` with a freshly generated pool.
    pub fn start<R: Rng>(question: Question, rng: &mut R) -> Self {
        let mut round = Self {
            question,
            pool: LetterPool::generate_with_rng(question.answer, rng),
            guess: Vec::with_capacity(question.answer_len()),
            selected: HashSet::new(),
            time_remaining: ROUND_SECONDS,
            outcome: Outcome::Playing,
            clock: Ticker::default(),
        };
        round.clock.arm();
        if !question.is_completable() {
            warn!(
                "question {} ({}) repeats a letter and cannot be completed",
                question.id, question.answer
            );
        }
        info!(
            "round started: question {} ({} letters, pool {})",
            question.id,
            question.answer_len(),
            round.pool.as_string()
        );
        round
    }

    /// Restart the same question: new pool, empty guess, full clock.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::start(self.question, rng);
    }

    /// Select a letter from the pool.
    pub fn select_letter(&mut self, letter: char) -> Selection {
        let letter = letter.to_ascii_uppercase();

        if self.outcome != Outcome::Playing {
            return Selection::Ignored(Ignored::RoundOver);
        }
        if self.selected.contains(&letter) {
            return Selection::Ignored(Ignored::AlreadySelected);
        }
        if !self.pool.contains(letter) {
            return Selection::Ignored(Ignored::NotInPool);
        }

        self.guess.push(letter);
        self.selected.insert(letter);
        debug!("selected {} -> {}", letter, self.guess_string());

        if self.guess.len() < self.question.answer_len() {
            return Selection::Placed;
        }

        let guess = self.guess_string();
        if guess == self.question.answer {
            self.finish(Outcome::Won);
            info!(
                "question {} solved with {}s left",
                self.question.id, self.time_remaining
            );
            Selection::Won {
                time_remaining: self.time_remaining,
            }
        } else {
            self.guess.clear();
            self.selected.clear();
            debug!("rejected {} for question {}", guess, self.question.id);
            Selection::Rejected { guess }
        }
    }

    /// Drop the letters picked so far. Returns false once the round is over.
    pub fn clear_guess(&mut self) -> bool {
        if self.outcome != Outcome::Playing {
            return false;
        }
        self.guess.clear();
        self.selected.clear();
        true
    }

    /// Count down one second.
    pub fn tick(&mut self) -> Tick {
        if self.outcome != Outcome::Playing {
            return Tick::Stale;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.finish(Outcome::Lost);
            info!("question {} timed out", self.question.id);
            Tick::Expired
        } else {
            Tick::Counted {
                time_remaining: self.time_remaining,
            }
        }
    }

    /// Apply every tick that has come due on the round's clock by `now`.
    /// Returns the last tick applied, if any.
    pub fn advance_clock(&mut self, now: Instant) -> Option<Tick> {
        let due = self.clock.poll(now);
        let mut last = None;
        for _ in 0..due {
            match self.tick() {
                Tick::Stale => break,
                Tick::Expired => return Some(Tick::Expired),
                tick => last = Some(tick),
            }
        }
        last
    }

    /// Time until the round's clock next needs attention.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.until_next(now)
    }

    /// Points earned by this round: base plus one per second left on a win.
    pub fn score_delta(&self) -> u32 {
        match self.outcome {
            Outcome::Won => BASE_WIN_POINTS + self.time_remaining,
            Outcome::Playing | Outcome::Lost => 0,
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.clock.cancel();
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn pool(&self) -> &LetterPool {
        &self.pool
    }

    pub fn guess(&self) -> &[char] {
        &self.guess
    }

    pub fn guess_string(&self) -> String {
        self.guess.iter().collect()
    }

    pub fn is_selected(&self, letter: char) -> bool {
        self.selected.contains(&letter)
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Playing
    }

    pub fn clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let slots = (0..self.question.answer_len())
            .map(|i| self.guess.get(i).copied())
            .collect();
        let pool = self
            .pool
            .letters()
            .iter()
            .map(|&letter| PoolTile {
                letter,
                used: self.selected.contains(&letter),
            })
            .collect();

        RoundSnapshot {
            glyph: self.question.glyph,
            slots,
            pool,
            time_remaining: self.time_remaining,
            outcome: self.outcome,
        }
    }
}
