//! One game session: the live grid, its undo history and the tile spawner.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::engine::{Direction, Grid, History, Placement, Spawner};

/// A player instruction for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Quit,
}

impl Command {
    /// Map a key to a command: `w`/`a`/`s`/`d` move, `u` undoes, `q` quits.
    /// Anything else is `None`.
    pub fn from_key(key: char) -> Option<Command> {
        match key {
            'w' => Some(Command::Move(Direction::Up)),
            'a' => Some(Command::Move(Direction::Left)),
            's' => Some(Command::Move(Direction::Down)),
            'd' => Some(Command::Move(Direction::Right)),
            'u' => Some(Command::Undo),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// What a turn did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed; the pre-move grid was saved and a tile spawned.
    Moved(Option<Placement>),
    /// Nothing slid in that direction.
    Unchanged,
    Undone,
    NothingToUndo,
    /// Unrecognised input.
    Ignored,
    Quit,
}

impl Outcome {
    #[inline]
    pub fn is_quit(self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

/// Live state of a game, owned by the driver loop.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: Grid,
    history: History,
    spawner: Spawner<R>,
}

impl<R: Rng> Game<R> {
    /// Start a fresh game: empty board plus two spawned tiles.
    ///
    /// ```
    /// use term_2048::engine::{History, Spawner};
    /// use term_2048::game::Game;
    /// let game = Game::new(Spawner::seeded(7), History::new());
    /// assert_eq!(game.grid().count_empty(), 14);
    /// ```
    pub fn new(spawner: Spawner<R>, history: History) -> Self {
        let mut game = Game::from_grid(Grid::EMPTY, spawner, history);
        game.spawner.spawn(&mut game.grid);
        game.spawner.spawn(&mut game.grid);
        game
    }

    /// Resume from an existing board without spawning anything.
    pub fn from_grid(grid: Grid, spawner: Spawner<R>, history: History) -> Self {
        Game {
            grid,
            history,
            spawner,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current score, recomputed from the board.
    pub fn score(&self) -> u64 {
        self.grid.score()
    }

    /// Slide in `direction`. On change the pre-move board is pushed and a tile spawns.
    pub fn play(&mut self, direction: Direction) -> Outcome {
        let before = self.grid;
        if !self.grid.apply_move(direction) {
            return Outcome::Unchanged;
        }
        self.history.push(before);
        let placed = self.spawner.spawn(&mut self.grid);
        Outcome::Moved(placed)
    }

    /// Restore the board from before the last successful move and its spawn.
    pub fn undo(&mut self) -> Outcome {
        match self.history.pop() {
            Some(previous) => {
                self.grid = previous;
                Outcome::Undone
            }
            None => Outcome::NothingToUndo,
        }
    }

    /// Run one turn. `None` is an unrecognised key and leaves everything as is.
    pub fn apply(&mut self, command: Option<Command>) -> Outcome {
        let outcome = match command {
            Some(Command::Move(direction)) => self.play(direction),
            Some(Command::Undo) => self.undo(),
            Some(Command::Quit) => Outcome::Quit,
            None => Outcome::Ignored,
        };
        debug!("{command:?} -> {outcome:?}, score {}", self.score());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_from(rows: [[u32; 4]; 4], seed: u64) -> Game {
        Game::from_grid(Grid::from_rows(rows), Spawner::seeded(seed), History::new())
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::from_key('w'), Some(Command::Move(Direction::Up)));
        assert_eq!(Command::from_key('a'), Some(Command::Move(Direction::Left)));
        assert_eq!(Command::from_key('s'), Some(Command::Move(Direction::Down)));
        assert_eq!(Command::from_key('d'), Some(Command::Move(Direction::Right)));
        assert_eq!(Command::from_key('u'), Some(Command::Undo));
        assert_eq!(Command::from_key('q'), Some(Command::Quit));
        assert_eq!(Command::from_key('x'), None);
        assert_eq!(Command::from_key('W'), None);
    }

    #[test]
    fn new_game_has_two_tiles() {
        let game: Game = Game::new(Spawner::seeded(3), History::new());
        assert_eq!(game.grid().count_empty(), 14);
        assert!(game.history().is_empty());
        assert!(game.score() >= 4 && game.score() <= 8);
    }

    #[test]
    fn successful_move_pushes_and_spawns() {
        let mut game = game_from([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 1);
        let before = *game.grid();
        let outcome = game.play(Direction::Left);
        assert!(matches!(outcome, Outcome::Moved(Some(_))));
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history().peek(), Some(&before));
        assert_eq!(game.grid().get(0, 0), 4);
        assert_eq!(game.grid().count_empty(), 14);
    }

    #[test]
    fn unchanged_move_neither_pushes_nor_spawns() {
        let mut game = game_from([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 1);
        let before = *game.grid();
        assert_eq!(game.play(Direction::Left), Outcome::Unchanged);
        assert_eq!(game.play(Direction::Up), Outcome::Unchanged);
        assert_eq!(*game.grid(), before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn undo_restores_exact_pre_move_board() {
        let mut game: Game = Game::new(Spawner::seeded(2048), History::new());
        let mut seen = vec![*game.grid()];
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(5) {
            if let Outcome::Moved(_) = game.play(dir) {
                seen.push(*game.grid());
            }
        }
        assert!(seen.len() > 1);
        // walk back through every recorded state
        seen.pop();
        while let Some(expected) = seen.pop() {
            assert_eq!(game.undo(), Outcome::Undone);
            assert_eq!(*game.grid(), expected);
        }
        assert_eq!(game.undo(), Outcome::NothingToUndo);
    }

    #[test]
    fn undo_with_empty_history_is_noop() {
        let mut game = game_from([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]], 4);
        let before = *game.grid();
        assert_eq!(game.undo(), Outcome::NothingToUndo);
        assert_eq!(*game.grid(), before);
    }

    #[test]
    fn undo_does_not_push_or_spawn() {
        let mut game = game_from([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 8);
        game.play(Direction::Left);
        game.undo();
        assert!(game.history().is_empty());
        assert_eq!(game.grid().count_empty(), 14);
    }

    #[test]
    fn apply_dispatches() {
        let mut game = game_from([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], 12);
        assert_eq!(game.apply(None), Outcome::Ignored);
        assert_eq!(game.apply(Some(Command::Undo)), Outcome::NothingToUndo);
        assert!(matches!(
            game.apply(Some(Command::Move(Direction::Left))),
            Outcome::Moved(_)
        ));
        assert_eq!(game.apply(Some(Command::Undo)), Outcome::Undone);
        assert_eq!(game.grid().get(0, 3), 2);
        assert!(game.apply(Some(Command::Quit)).is_quit());
    }

    #[test]
    fn capped_history_limits_undo_depth() {
        let mut game = Game::from_grid(
            Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]),
            Spawner::seeded(21),
            History::with_limit(1),
        );
        let mut moves = 0;
        for dir in [Direction::Right, Direction::Left, Direction::Down, Direction::Up] {
            if let Outcome::Moved(_) = game.play(dir) {
                moves += 1;
            }
        }
        assert!(moves >= 2);
        assert_eq!(game.undo(), Outcome::Undone);
        assert_eq!(game.undo(), Outcome::NothingToUndo);
    }
}
