//! Single-line slide: compress, merge once in the direction of travel, compress again.

use super::grid::{Tile, SIZE};

/// One row, or one column after transposition.
pub type Line = [Tile; SIZE];

/// Horizontal direction of travel for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Toward index 0.
    Left,
    /// Toward index 3.
    Right,
}

/// Remove gaps, keeping nonzero order and packing toward the direction of travel.
pub fn compress(line: Line, side: Slide) -> Line {
    let mut out = [0; SIZE];
    match side {
        Slide::Left => {
            for (slot, v) in out.iter_mut().zip(line.into_iter().filter(|&v| v != 0)) {
                *slot = v;
            }
        }
        Slide::Right => {
            for (slot, v) in out
                .iter_mut()
                .rev()
                .zip(line.into_iter().rev().filter(|&v| v != 0))
            {
                *slot = v;
            }
        }
    }
    out
}

/// One pass over adjacent pairs in the direction of travel.
///
/// The cell nearer the wall doubles and its partner becomes 0, so a freshly
/// merged tile can't merge again within the same pass. Gaps are left in place.
pub fn merge(mut line: Line, side: Slide) -> Line {
    match side {
        Slide::Left => {
            for i in 0..SIZE - 1 {
                if line[i] != 0 && line[i] == line[i + 1] {
                    line[i] *= 2;
                    line[i + 1] = 0;
                }
            }
        }
        Slide::Right => {
            for i in (1..SIZE).rev() {
                if line[i] != 0 && line[i] == line[i - 1] {
                    line[i] *= 2;
                    line[i - 1] = 0;
                }
            }
        }
    }
    line
}

/// Full slide of one line: `compress`, `merge`, `compress`.
#[inline]
pub fn transform(line: Line, side: Slide) -> Line {
    compress(merge(compress(line, side), side), side)
}
