//! Observer trait for the rendering collaborator.

use super::view::GameView;

/// Receives a fresh view after every state change.
///
/// Called after each successful command and after every timer that changed
/// the game. Rejected commands do not notify.
///
/// Closures implement this trait:
///
/// ```
/// use papasko::game::{Game, GameView};
/// use papasko::core::GameConfig;
///
/// let mut game = Game::new(GameConfig::default().with_seed(1));
/// game.subscribe(|view: &GameView| println!("now {}", view.phase));
/// ```
pub trait GameObserver {
    fn on_change(&mut self, view: &GameView);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameView),
{
    fn on_change(&mut self, view: &GameView) {
        self(view)
    }
}
