use super::grid::{Direction, Grid, Score};
use super::line;

/// Slide/merge tiles in the given direction, in place. No randomness.
///
/// Vertical moves transpose, slide rows, then transpose back.
/// Returns `true` if at least one row or column changed value.
pub fn apply_move(grid: &mut Grid, direction: Direction) -> bool {
    let vertical = direction.is_vertical();
    if vertical {
        grid.transpose();
    }
    let side = direction.slide();
    let mut changed = false;
    for row in grid.rows_mut().iter_mut() {
        let next = line::transform(*row, side);
        if next != *row {
            changed = true;
            *row = next;
        }
    }
    if vertical {
        grid.transpose();
    }
    changed
}

/// Like `apply_move` but returns the resulting board and leaves the input alone.
pub fn shift(grid: Grid, direction: Direction) -> Grid {
    let mut next = grid;
    apply_move(&mut next, direction);
    next
}

/// Compute the total score for a board: the sum of every cell.
pub fn score(grid: &Grid) -> Score {
    grid.rows()
        .iter()
        .flat_map(|row| row.iter())
        .map(|&v| Score::from(v))
        .sum()
}
