//! Game logic: question bank, letter pools, timed rounds, session scoring

pub mod bank;
pub mod pool;
pub mod round;
pub mod session;
pub mod timer;

pub use round::{Outcome, ROUND_SECONDS};
pub use session::{GameEvent, Session, SessionSnapshot, HINT_COST};
