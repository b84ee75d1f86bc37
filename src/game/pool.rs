#![allow(dead_code)]
//! Letter pool generation
//!
//! A pool holds every distinct letter of the answer exactly once plus a set
//! of distractor letters that do not occur in the answer, shuffled together.

use rand::prelude::*;

/// Number of distractor letters mixed into every pool.
pub const DISTRACTOR_COUNT: usize = 10;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The shuffled letters offered to the player for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Generate a pool for `answer` using the thread RNG.
    pub fn generate(answer: &str) -> Self {
        Self::generate_with_rng(answer, &mut rand::rng())
    }

    /// Generate a pool using a specific RNG (for testing/seeding).
    pub fn generate_with_rng<R: Rng>(answer: &str, rng: &mut R) -> Self {
        let mut letters: Vec<char> = Vec::with_capacity(answer.len() + DISTRACTOR_COUNT);
        for c in answer.chars() {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }

        // Answers with more than 16 distinct letters cannot get a full set
        let available = ALPHABET
            .iter()
            .filter(|&&u| !letters.contains(&(u as char)))
            .count();
        let wanted = DISTRACTOR_COUNT.min(available);

        let mut distractors: Vec<char> = Vec::with_capacity(wanted);
        while distractors.len() < wanted {
            let candidate = ALPHABET[rng.random_range(0..ALPHABET.len())] as char;
            if !letters.contains(&candidate) && !distractors.contains(&candidate) {
                distractors.push(candidate);
            }
        }

        letters.extend(distractors);
        letters.shuffle(rng);

        Self { letters }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Position of `letter` in the pool, if present.
    pub fn position(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&c| c == letter)
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bank::questions;
    use std::collections::HashSet;

    fn distinct(answer: &str) -> HashSet<char> {
        answer.chars().collect()
    }

    #[test]
    fn test_pool_size_matches_distinct_plus_distractors() {
        for q in questions() {
            let pool = LetterPool::generate(q.answer);
            assert_eq!(pool.len(), distinct(q.answer).len() + DISTRACTOR_COUNT, "{}", q.answer);
        }
    }

    #[test]
    fn test_pool_contains_each_answer_letter_once() {
        for q in questions() {
            let pool = LetterPool::generate(q.answer);
            for c in distinct(q.answer) {
                let count = pool.letters().iter().filter(|&&l| l == c).count();
                assert_eq!(count, 1, "Letter {} appears {} times in {}", c, count, pool.as_string());
            }
        }
    }

    #[test]
    fn test_distractors_are_disjoint_and_unique() {
        for q in questions() {
            let pool = LetterPool::generate(q.answer);
            let answer_letters = distinct(q.answer);
            let distractors: Vec<char> = pool
                .letters()
                .iter()
                .copied()
                .filter(|c| !answer_letters.contains(c))
                .collect();
            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
            let unique: HashSet<char> = distractors.iter().copied().collect();
            assert_eq!(unique.len(), DISTRACTOR_COUNT);
        }
    }

    #[test]
    fn test_pool_contains_only_uppercase_letters() {
        let pool = LetterPool::generate("CAT");
        for c in pool.letters() {
            assert!(c.is_ascii_uppercase(), "Found non-uppercase char: {}", c);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let pool1 = LetterPool::generate_with_rng("VOLCANO", &mut rng1);
        let pool2 = LetterPool::generate_with_rng("VOLCANO", &mut rng2);

        assert_eq!(pool1, pool2);
    }

    #[test]
    fn test_pool_is_shuffled() {
        // 20 seeds all leaving the answer letters up front would be astronomically unlikely
        let answer = "BUTTERFLY";
        let prefix: Vec<char> = vec!['B', 'U', 'T', 'E', 'R', 'F', 'L', 'Y'];
        let shuffled = (0..20).any(|seed| {
            let pool = LetterPool::generate_with_rng(answer, &mut StdRng::seed_from_u64(seed));
            pool.letters()[..prefix.len()] != prefix[..]
        });
        assert!(shuffled);
    }

    #[test]
    fn test_wide_answer_takes_every_remaining_letter() {
        let answer = "ABCDEFGHIJKLMNOPQR";
        let pool = LetterPool::generate(answer);
        assert_eq!(pool.len(), 26);
    }

    #[test]
    fn test_position_and_contains() {
        let pool = LetterPool::generate("CAT");
        assert!(pool.contains('C'));
        let idx = pool.position('A').unwrap();
        assert_eq!(pool.letters()[idx], 'A');
    }
}
