#![allow(dead_code)]
//! Static question bank
//!
//! Each question pairs an emoji glyph with the English word it depicts and a
//! short hint. The order is fixed: a session walks the bank front to back.

/// A single picture-guessing question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    /// Emoji shown to the player
    pub glyph: &'static str,
    /// Uppercase A-Z answer
    pub answer: &'static str,
    pub hint: &'static str,
}

impl Question {
    /// Distinct letters of the answer, in first-occurrence order.
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = Vec::with_capacity(self.answer.len());
        for c in self.answer.chars() {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        letters
    }

    /// Whether the answer can be spelled from its pool. A pool carries each
    /// letter once and a picked letter cannot be picked again, so answers
    /// with a repeated letter can never be completed.
    pub fn is_completable(&self) -> bool {
        self.distinct_letters().len() == self.answer.len()
    }

    /// Number of letter slots the player has to fill.
    pub fn answer_len(&self) -> usize {
        self.answer.len()
    }
}

const fn q(id: u32, glyph: &'static str, answer: &'static str, hint: &'static str) -> Question {
    Question {
        id,
        glyph,
        answer,
        hint,
    }
}

static QUESTIONS: [Question; 35] = [
    q(1, "🦋", "BUTTERFLY", "An insect with beautiful wings"),
    q(2, "🌋", "VOLCANO", "A mountain that erupts"),
    q(3, "🎭", "THEATER", "The art of live performance"),
    q(4, "🧭", "COMPASS", "A tool that shows direction"),
    q(5, "🎨", "PALETTE", "A painter's board of colors"),
    q(6, "🔭", "TELESCOPE", "An instrument for watching the sky"),
    q(7, "🏺", "AMPHORA", "An ancient clay jar"),
    q(8, "🎪", "CIRCUS", "A big top full of acts"),
    q(9, "🌪️", "TORNADO", "A violent spinning wind"),
    q(10, "🧬", "MOLECULE", "The smallest unit of a substance"),
    q(11, "🎯", "TARGET", "What an archer aims at"),
    q(12, "🔬", "MICROSCOPE", "An instrument for seeing microbes"),
    q(13, "🏛️", "PANTHEON", "An ancient temple"),
    q(14, "🎼", "SYMPHONY", "A large orchestral composition"),
    q(15, "🗿", "SCULPTURE", "A carved work of art"),
    q(16, "🔮", "CRYSTAL", "A fortune teller's glass ball"),
    q(17, "🎠", "CAROUSEL", "A ride with wooden horses"),
    q(18, "🌌", "GALAXY", "A system of stars in the universe"),
    q(19, "🧮", "ABACUS", "An ancient counting tool"),
    q(20, "🎪", "CARNIVAL", "A costumed street festival"),
    q(21, "🧪", "LABORATORY", "A room for experiments"),
    q(22, "🎨", "MASTERPIECE", "An artist's finest work"),
    q(23, "🏰", "FORTRESS", "A heavily defended stronghold"),
    q(24, "🌠", "METEORITE", "A space rock that reached the ground"),
    q(25, "🎭", "PERFORMANCE", "A show on stage"),
    q(26, "🔬", "EXPERIMENT", "A scientific test"),
    q(27, "🏺", "ARCHAEOLOGY", "The study of ancient artifacts"),
    q(28, "🎪", "ACROBAT", "A performer who flips and tumbles"),
    q(29, "🌋", "ERUPTION", "What a volcano does"),
    q(30, "🧭", "NAVIGATION", "The art of finding your way"),
    q(31, "🔭", "OBSERVATORY", "A building for astronomy"),
    q(32, "🎨", "RENAISSANCE", "The age of rebirth in European art"),
    q(33, "🏛️", "ARCHITECTURE", "The art of designing buildings"),
    q(34, "🎼", "ORCHESTRA", "A large ensemble of musicians"),
    q(35, "🌪️", "HURRICANE", "A huge tropical storm"),
];

/// All questions, in play order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Look up a question by zero-based index.
pub fn question(index: usize) -> Option<&'static Question> {
    QUESTIONS.get(index)
}
