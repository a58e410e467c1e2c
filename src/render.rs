//! Plain-text rendering of the board for the terminal.

use std::fmt;
use std::io::{self, Write};

use crate::engine::Grid;

pub const PROMPT: &str = "Move (w=up, a=left, s=down, d=right), u=undo, q=quit: ";

const EMPTY_CELL: &str = ".";

/// One line per row, tab after every cell, blank line after the last row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &v in row {
                write!(f, "{}\t", format_val(v))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

fn format_val(val: u32) -> String {
    match val {
        0 => String::from(EMPTY_CELL),
        x => x.to_string(),
    }
}

/// Draw the board, the score line and the prompt, then flush.
pub fn frame<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    write!(out, "{grid}")?;
    writeln!(out, "Score: {}", grid.score())?;
    write!(out, "{PROMPT}")?;
    out.flush()
}
