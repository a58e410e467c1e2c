//! term-2048: a terminal 2048 game engine with undo
//!
//! This crate provides:
//! - A `Grid` value type with ergonomic methods (`apply_move`, `shift`, `score`, ...)
//! - Seeded tile spawning (`engine::Spawner`) and an undo stack (`engine::History`)
//! - A game session (`game` module) and the interactive loop that drives it (`driver`)
//! - A CSV log of every drawn board (`trace` module)
//!
//! Quick start:
//! ```
//! use term_2048::engine::{Direction, Grid, Spawner};
//!
//! // Deterministic board initialization with a seeded spawner
//! let mut spawner = Spawner::seeded(42);
//! let mut grid = Grid::EMPTY;
//! spawner.spawn(&mut grid);
//! spawner.spawn(&mut grid);
//!
//! // Only spawn again when the move actually changed something
//! if grid.apply_move(Direction::Left) {
//!     spawner.spawn(&mut grid);
//! }
//! assert!(grid.score() >= 4);
//! ```
//!
//! Full session with undo:
//! ```
//! use term_2048::engine::{Direction, History, Spawner};
//! use term_2048::game::{Game, Outcome};
//!
//! let mut game = Game::new(Spawner::seeded(123), History::new());
//! let start = *game.grid();
//! for dir in [Direction::Left, Direction::Right] {
//!     if let Outcome::Moved(_) = game.play(dir) {
//!         assert_eq!(game.undo(), Outcome::Undone);
//!         assert_eq!(*game.grid(), start);
//!         break;
//!     }
//! }
//! ```
//!
pub mod config;
pub mod driver;
pub mod engine;
pub mod game;
pub mod render;
pub mod trace;
