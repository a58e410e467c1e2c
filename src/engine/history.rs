use std::collections::VecDeque;

use log::debug;

use super::grid::Grid;

/// Stack of board snapshots taken before each successful move.
///
/// Unbounded unless built with [`History::with_limit`], in which case the
/// oldest snapshot is dropped once the cap is reached.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: VecDeque<Grid>,
    limit: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// A history that keeps at most `limit` snapshots. `0` keeps none.
    pub fn with_limit(limit: usize) -> Self {
        History {
            snapshots: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Store a copy of `grid` as the most recent snapshot.
    pub fn push(&mut self, grid: Grid) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.snapshots.len() >= limit {
                self.snapshots.pop_front();
                debug!("history cap {limit} reached; dropped oldest snapshot");
            }
        }
        self.snapshots.push_back(grid);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    pub fn peek(&self) -> Option<&Grid> {
        self.snapshots.back()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
