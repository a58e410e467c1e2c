//! The interactive loop: draw, log, read a key, apply it, repeat.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};
use rand::Rng;

use crate::game::{Command, Game, Outcome};
use crate::render;
use crate::trace::BoardLog;

/// Non-whitespace bytes from a line-based reader, one key at a time.
///
/// Input is read as raw bytes so that stray non-UTF-8 bytes come through as
/// keys (and are then ignored) instead of failing the read.
pub struct Keys<B> {
    input: B,
    pending: VecDeque<u8>,
}

impl<B: BufRead> Keys<B> {
    pub fn new(input: B) -> Self {
        Keys {
            input,
            pending: VecDeque::new(),
        }
    }
}

impl<B: BufRead> Iterator for Keys<B> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(b) = self.pending.pop_front() {
                return Some(Ok(char::from(b)));
            }
            let mut line = Vec::new();
            match self.input.read_until(b'\n', &mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.into_iter().filter(|b| !b.is_ascii_whitespace())),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub turns: u64,
    pub moves: u64,
    pub undos: u64,
    pub score: u64,
    pub highest_tile: u32,
}

/// Play until quit or end of input.
///
/// Every drawn board is also appended to `log` when present. A failed log
/// write is reported once and logging stops; the game carries on.
pub fn run<R, B, W, L>(
    game: &mut Game<R>,
    input: B,
    out: &mut W,
    mut log: Option<&mut BoardLog<L>>,
) -> Result<Summary>
where
    R: Rng,
    B: BufRead,
    W: Write,
    L: Write,
{
    let mut keys = Keys::new(input);
    let mut summary = Summary::default();

    loop {
        render::frame(out, game.grid()).context("failed to draw board")?;
        let failed = match log.as_deref_mut() {
            Some(board_log) => board_log.append(game.grid()).err(),
            None => None,
        };
        if let Some(e) = failed {
            warn!("{e}; board logging disabled");
            log = None;
        }

        let Some(key) = keys.next().transpose().context("failed to read input")? else {
            break;
        };
        summary.turns += 1;
        match game.apply(Command::from_key(key)) {
            Outcome::Moved(_) => summary.moves += 1,
            Outcome::Undone => summary.undos += 1,
            Outcome::Quit => break,
            Outcome::Unchanged | Outcome::NothingToUndo | Outcome::Ignored => {}
        }
    }
    writeln!(out).context("failed to draw board")?;

    summary.score = game.score();
    summary.highest_tile = game.grid().highest_tile();
    info!(
        "session over after {} turns: {} moves, {} undos, score {}",
        summary.turns, summary.moves, summary.undos, summary.score
    );
    Ok(summary)
}
