use std::fmt;

use super::line::{Line, Slide};
use super::ops;
use serde::{Deserialize, Serialize};

pub(crate) type Tile = u32;
pub(crate) type Score = u64;

/// Side length of the board.
pub const SIZE: usize = 4;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The horizontal slide a move reduces to once columns are transposed into rows.
    #[inline]
    pub fn slide(self) -> Slide {
        match self {
            Direction::Left | Direction::Up => Slide::Left,
            Direction::Right | Direction::Down => Slide::Right,
        }
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// 4x4 board of tile values, row-major. `0` is an empty cell.
///
/// `Grid` is `Copy`: assigning or passing it by value yields an independent
/// board, which is what history snapshots rely on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid([Line; SIZE]);

impl Grid {
    /// A constant empty board (all zeros).
    pub const EMPTY: Grid = Grid([[0; SIZE]; SIZE]);

    /// Construct a `Grid` from its rows, top to bottom.
    #[inline]
    pub fn from_rows(rows: [Line; SIZE]) -> Self {
        Grid(rows)
    }

    /// Borrow the rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Line; SIZE] {
        &self.0
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut [Line; SIZE] {
        &mut self.0
    }

    /// Value at `(row, col)`. Panics when either index is outside `0..4`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.0[row][col]
    }

    /// Overwrite the value at `(row, col)`. Panics when either index is outside `0..4`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.0[row][col] = value;
    }

    /// Slide and merge in place. Returns `true` if any cell changed.
    ///
    /// ```
    /// use term_2048::engine::{Direction, Grid};
    /// let mut g = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    /// assert!(g.apply_move(Direction::Left));
    /// assert_eq!(g.rows()[0], [4, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        ops::apply_move(self, dir)
    }

    /// Return the board resulting from sliding/merging in `dir`, leaving `self` untouched.
    #[inline]
    pub fn shift(self, dir: Direction) -> Self {
        ops::shift(self, dir)
    }

    /// Sum of all cell values.
    #[inline]
    pub fn score(&self) -> Score {
        ops::score(self)
    }

    /// Swap cells across the main diagonal. Applying it twice is the identity.
    #[inline]
    pub fn transpose(&mut self) {
        for r in 0..SIZE {
            for c in (r + 1)..SIZE {
                let tmp = self.0[r][c];
                self.0[r][c] = self.0[c][r];
                self.0[c][r] = tmp;
            }
        }
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(_, _, v)| v == 0)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Count the number of empty cells on the board.
    #[inline]
    pub fn count_empty(&self) -> usize {
        self.cells().filter(|&(_, _, v)| v == 0).count()
    }

    /// Return the highest tile value present on the board (0 when empty).
    #[inline]
    pub fn highest_tile(&self) -> Tile {
        self.cells().map(|(_, _, v)| v).max().unwrap_or(0)
    }

    /// Iterate `(row, col, value)` over all 16 cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    /// Convenience: collect tile values into a row-major `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<Tile> {
        self.cells().map(|(_, _, v)| v).collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.0)
    }
}
