//! Application state and screen routing

pub mod screen;
pub mod state;

pub use screen::{AppCoordinator, MenuOption, Screen};
pub use state::{App, DialogChoice, Tone};
