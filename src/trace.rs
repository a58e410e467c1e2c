//! Append-only CSV log of every rendered board.
//!
//! Each line holds the 16 cell values in row-major order, comma separated.
//! The file is truncated when the log is created and only appended to after.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::engine::Grid;

pub const DEFAULT_PATH: &str = "game_output.csv";

#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    #[error("io error on board log {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One CSV line for `grid`, without the trailing newline.
pub fn encode_row(grid: &Grid) -> String {
    grid.to_vec()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub struct BoardLog<W: Write = BufWriter<File>> {
    out: W,
    path: PathBuf,
    rows: u64,
}

impl BoardLog<BufWriter<File>> {
    /// Create or truncate the log file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TraceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| TraceError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(BoardLog {
            out: BufWriter::new(file),
            path,
            rows: 0,
        })
    }
}

impl<W: Write> BoardLog<W> {
    /// Log into an arbitrary writer; `label` names it in errors.
    pub fn from_writer(out: W, label: impl Into<PathBuf>) -> Self {
        BoardLog {
            out,
            path: label.into(),
            rows: 0,
        }
    }

    /// Append one line for `grid` and flush it through.
    pub fn append(&mut self, grid: &Grid) -> Result<(), TraceError> {
        writeln!(self.out, "{}", encode_row(grid))
            .and_then(|_| self.out.flush())
            .map_err(|source| TraceError::Io {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
