//! The search engine state machine.
//!
//! One [`Search`] instance drives one run of one strategy over one
//! grid. The engine borrows the grid mutably for the whole run, so the
//! borrow checker rules out concurrent runs and mid-run obstacle edits
//! at compile time.
//!
//! Execution is cooperative: [`Search::step`] performs exactly one
//! bounded unit of work (one live popped cell and its ≤4 neighbors) and
//! returns, letting the driver pace visualization between calls.
//! [`Search::run`] loops to completion for callers that do not need
//! incremental output.

use gridpath_core::{Grid, Point};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::observer::Observer;
use crate::path::reconstruct;
use crate::strategy::Strategy;

/// The run state machine: `Idle → Running → {Found, Exhausted}`.
///
/// `Found` and `Exhausted` are terminal; stepping past them is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Constructed and seeded, no step taken yet.
    Idle,
    /// At least one step taken, frontier not yet resolved.
    Running,
    /// The end cell was reached.
    Found,
    /// The frontier emptied without reaching the end: no path exists.
    Exhausted,
}

impl Status {
    /// Whether the run is over.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Terminal outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchResult {
    /// A path exists. `path` holds the intermediate cells in start→goal
    /// order, endpoints excluded; the full path's edge count is
    /// `path.len() + 1` when start ≠ end, and 0 for start == end
    /// (empty path).
    Found { path: Vec<Point> },
    /// No path exists. A normal outcome, not an error.
    Exhausted,
}

/// One in-progress search over a grid.
pub struct Search<'g> {
    grid: &'g mut Grid,
    frontier: Frontier,
    strategy: Strategy,
    status: Status,
    start_idx: usize,
    goal_idx: usize,
    steps: u64,
    // Scratch buffer for neighbor queries, reused across steps.
    nbuf: Vec<Point>,
}

impl<'g> Search<'g> {
    /// Initialize a run: reset the grid's search state, seed the
    /// frontier with the start cell, and return the engine in
    /// [`Status::Idle`].
    ///
    /// BFS and DFS mark the start visited immediately. A* instead
    /// assigns it `cost = 0` and `score = manhattan(start, end)`;
    /// A* cells only become visited when they are popped and finalized.
    pub fn new(grid: &'g mut Grid, strategy: Strategy) -> Self {
        grid.reset();
        let start = grid.start();
        let end = grid.end();
        let start_idx = grid
            .idx(start)
            .expect("grid start is in bounds by construction");
        let goal_idx = grid
            .idx(end)
            .expect("grid end is in bounds by construction");

        let mut frontier = Frontier::for_strategy(strategy);
        let score = match strategy {
            Strategy::Bfs | Strategy::Dfs => {
                grid.cell_at_mut(start_idx).visited = true;
                0
            }
            Strategy::Astar => {
                let cell = grid.cell_at_mut(start_idx);
                cell.cost = Some(0);
                let h = manhattan(start, end);
                cell.score = Some(h);
                h
            }
        };
        frontier.push(start_idx, score);

        Self {
            grid,
            frontier,
            strategy,
            status: Status::Idle,
            start_idx,
            goal_idx,
            steps: 0,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The strategy this run uses.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Current run status.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The grid under search (shared view; the engine keeps the
    /// exclusive borrow).
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Perform one unit of work and report the resulting status.
    ///
    /// Pops one live cell from the frontier. An empty frontier
    /// transitions to [`Status::Exhausted`]; popping the end cell
    /// transitions to [`Status::Found`]. Otherwise the cell's walkable
    /// neighbors are expanded and every cell that became visited or
    /// finalized is reported to `observer`. In a terminal state this is
    /// a no-op returning that state.
    pub fn step(&mut self, observer: &mut dyn Observer) -> Status {
        if self.status.is_terminal() {
            return self.status;
        }
        self.status = Status::Running;
        self.steps += 1;

        // Stale priority entries (cells finalized since their push) are
        // bookkeeping, not work: discard until a live cell surfaces.
        let current_idx = loop {
            let Some(idx) = self.frontier.pop() else {
                log::debug!(
                    "{} search exhausted after {} steps, no path",
                    self.strategy,
                    self.steps
                );
                self.status = Status::Exhausted;
                return self.status;
            };
            if self.strategy == Strategy::Astar && self.grid.cell_at(idx).visited {
                continue;
            }
            break idx;
        };

        if current_idx == self.goal_idx {
            log::debug!(
                "{} search reached the end cell after {} steps",
                self.strategy,
                self.steps
            );
            self.status = Status::Found;
            return self.status;
        }

        let current = self.grid.point(current_idx);
        if self.strategy == Strategy::Astar {
            // Finalized now: the minimum-score frontier entry can no
            // longer be improved under an admissible heuristic.
            self.grid.cell_at_mut(current_idx).visited = true;
            observer.cell_visited(current);
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(current, &mut nbuf);
        log::trace!(
            "step {}: {} expands {} neighbor(s) of {}",
            self.steps,
            self.strategy,
            nbuf.len(),
            current
        );

        match self.strategy {
            Strategy::Bfs | Strategy::Dfs => {
                for &np in nbuf.iter() {
                    let ni = self
                        .grid
                        .idx(np)
                        .expect("neighbors are in bounds by construction");
                    let cell = self.grid.cell_at_mut(ni);
                    cell.visited = true;
                    cell.predecessor = Some(current_idx);
                    self.frontier.push(ni, 0);
                    observer.cell_visited(np);
                }
            }
            Strategy::Astar => {
                let current_cost = self
                    .grid
                    .cell_at(current_idx)
                    .cost
                    .expect("popped A* cell always has an assigned cost");
                let end = self.grid.end();
                for &np in nbuf.iter() {
                    let ni = self
                        .grid
                        .idx(np)
                        .expect("neighbors are in bounds by construction");
                    // Uniform edge cost.
                    let tentative = current_cost + 1;
                    let cell = self.grid.cell_at_mut(ni);
                    if cell.cost.is_none_or(|c| tentative < c) {
                        cell.cost = Some(tentative);
                        let score = tentative + manhattan(np, end);
                        cell.score = Some(score);
                        cell.predecessor = Some(current_idx);
                        // Reinsertion stands in for decrease-key; any
                        // older, costlier entry goes stale.
                        self.frontier.push(ni, score);
                    }
                }
            }
        }
        self.nbuf = nbuf;

        self.status
    }

    /// Step to completion and return the terminal result.
    ///
    /// On [`Status::Found`] the path is reconstructed from the
    /// predecessor backlinks; a broken chain surfaces as
    /// [`SearchError::InvariantViolation`]. A start == end grid yields
    /// `Found` with an empty path and no observer events.
    pub fn run(&mut self, observer: &mut dyn Observer) -> Result<SearchResult, SearchError> {
        loop {
            match self.step(observer) {
                Status::Found => {
                    let path = reconstruct(self.grid, self.grid.end())?;
                    return Ok(SearchResult::Found { path });
                }
                Status::Exhausted => return Ok(SearchResult::Exhausted),
                Status::Idle | Status::Running => {}
            }
        }
    }
}
