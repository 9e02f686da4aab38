//! Pathfinding search engine for 2D obstacle grids.
//!
//! This crate drives three interchangeable search strategies over a
//! [`gridpath_core::Grid`]:
//!
//! - **BFS** — FIFO frontier, shortest path in edge count
//! - **DFS** — LIFO frontier, exploration without optimality
//! - **A\*** — priority frontier with the Manhattan heuristic,
//!   minimum-cost path
//!
//! A run is a [`Search`] state machine stepped one bounded unit of work
//! at a time, reporting every newly visited or finalized cell through
//! the [`Observer`] contract so an external renderer can animate the
//! exploration. [`Search::run`] steps to completion and returns a
//! [`SearchResult`]: either the reconstructed path or `Exhausted` when
//! no path exists.
//!
//! The engine holds the grid's mutable borrow for the whole run, so
//! concurrent runs and mid-run obstacle edits are compile errors.

pub mod distance;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod observer;
pub mod path;
pub mod strategy;

pub use distance::manhattan;
pub use engine::{Search, SearchResult, Status};
pub use error::SearchError;
pub use frontier::Frontier;
pub use observer::Observer;
pub use path::reconstruct;
pub use strategy::{ParseStrategyError, Strategy};
