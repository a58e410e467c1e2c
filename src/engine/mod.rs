//! Engine module: the 4x4 grid, the line slide, directional moves,
//! tile spawning and undo history.
//!
//! - `Grid` is a `Copy` board with useful methods.
//! - Free functions mirror the methods when convenient (e.g., `shift`).
//! - The single-line algorithm lives in `line`; moves build on it in `ops`.

pub mod grid;
mod history;
pub mod line;
mod ops;
mod spawn;

pub use grid::{Direction, Grid, SIZE};
pub use history::History;
pub use line::{Line, Slide};
pub use ops::{apply_move, score, shift};
pub use spawn::{Placement, Spawner};
