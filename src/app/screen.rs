//! Application screen state management
//!
//! Handles transitions between the application screens:
//! - Welcome menu
//! - How-to-play instructions
//! - Playing (with the game-over dialog drawn on top when a round ends)

use crate::game::Session;
use log::info;
use std::time::{Duration, Instant};

use super::state::App;

/// Menu option on the welcome screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    StartGame,
    HowToPlay,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[MenuOption::StartGame, MenuOption::HowToPlay, MenuOption::Quit]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::HowToPlay => "How To Play",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The current application screen
pub enum Screen {
    Welcome { selected: usize },
    Instructions,
    Playing { app: App },
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Whether the application should quit
    pub should_quit: bool,
    seed: Option<u64>,
    start_index: usize,
}

impl AppCoordinator {
    /// Create a coordinator on the welcome screen. Games started from it
    /// use `seed` for their pools and begin at question `start_index`.
    pub fn new(seed: Option<u64>, start_index: usize) -> Self {
        Self {
            screen: Screen::Welcome { selected: 0 },
            should_quit: false,
            seed,
            start_index,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Go back to the welcome screen. Any running game is dropped with its
    /// round clock.
    pub fn go_to_welcome(&mut self) {
        self.screen = Screen::Welcome { selected: 0 };
    }

    pub fn show_instructions(&mut self) {
        self.screen = Screen::Instructions;
    }

    pub fn start_game(&mut self) {
        let session = Session::seeded_at(self.seed, self.start_index);
        info!("starting game at question {}", session.question_number());
        self.screen = Screen::Playing {
            app: App::new(session),
        };
    }

    pub fn menu_up(&mut self) {
        if let Screen::Welcome { selected } = &mut self.screen {
            if *selected > 0 {
                *selected -= 1;
            }
        }
    }

    pub fn menu_down(&mut self) {
        if let Screen::Welcome { selected } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let selected = match &self.screen {
            Screen::Welcome { selected } => *selected,
            _ => return,
        };

        match MenuOption::all()[selected] {
            MenuOption::StartGame => self.start_game(),
            MenuOption::HowToPlay => self.show_instructions(),
            MenuOption::Quit => self.quit(),
        }
    }

    /// The running game, if any
    pub fn app_mut(&mut self) -> Option<&mut App> {
        match &mut self.screen {
            Screen::Playing { app } => Some(app),
            _ => None,
        }
    }

    /// Drive the round clock (call every loop iteration)
    pub fn tick(&mut self, now: Instant) {
        if let Some(app) = self.app_mut() {
            app.tick(now);
        }
    }

    /// How long the event loop may block before the clock needs service
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match &self.screen {
            Screen::Playing { app } => app.until_next_tick(now).map_or(idle, |d| d.min(idle)),
            _ => idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_welcome() {
        let coordinator = AppCoordinator::new(None, 0);
        assert!(matches!(coordinator.screen, Screen::Welcome { selected: 0 }));
        assert!(!coordinator.should_quit);
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut coordinator = AppCoordinator::new(None, 0);
        coordinator.menu_up();
        assert!(matches!(coordinator.screen, Screen::Welcome { selected: 0 }));
        for _ in 0..10 {
            coordinator.menu_down();
        }
        assert!(matches!(coordinator.screen, Screen::Welcome { selected: 2 }));
    }

    #[test]
    fn test_menu_start_game() {
        let mut coordinator = AppCoordinator::new(Some(1), 15);
        coordinator.menu_select();
        let app = coordinator.app_mut().unwrap();
        assert_eq!(app.session().question_index(), 15);
        assert_eq!(app.session().score(), 0);
    }

    #[test]
    fn test_menu_instructions_then_back() {
        let mut coordinator = AppCoordinator::new(None, 0);
        coordinator.menu_down();
        coordinator.menu_select();
        assert!(matches!(coordinator.screen, Screen::Instructions));
        coordinator.go_to_welcome();
        assert!(matches!(coordinator.screen, Screen::Welcome { .. }));
    }

    #[test]
    fn test_menu_quit() {
        let mut coordinator = AppCoordinator::new(None, 0);
        coordinator.menu_down();
        coordinator.menu_down();
        coordinator.menu_select();
        assert!(coordinator.should_quit);
    }

    #[test]
    fn test_leaving_game_drops_session() {
        let mut coordinator = AppCoordinator::new(Some(1), 0);
        coordinator.start_game();
        coordinator.go_to_welcome();
        assert!(coordinator.app_mut().is_none());
        // No clock left to drive
        let idle = Duration::from_millis(250);
        assert_eq!(coordinator.poll_timeout(Instant::now(), idle), idle);
    }

    #[test]
    fn test_poll_timeout_bounded_by_clock() {
        let mut coordinator = AppCoordinator::new(Some(1), 0);
        coordinator.start_game();
        let t0 = Instant::now();
        // Armed clock wants immediate service
        assert_eq!(coordinator.poll_timeout(t0, Duration::from_secs(5)), Duration::ZERO);
        coordinator.tick(t0);
        assert_eq!(
            coordinator.poll_timeout(t0, Duration::from_secs(5)),
            Duration::from_secs(1)
        );
    }
}
