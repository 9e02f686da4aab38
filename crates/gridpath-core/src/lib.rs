//! **gridpath-core** — Grid model and geometry for grid-based pathfinding.
//!
//! This crate provides the foundational types used across the *gridpath*
//! workspace: the [`Point`] coordinate primitive, the obstacle [`Grid`]
//! with its per-cell search state, and the grid error taxonomy.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::Point;
pub use grid::{Cell, Grid};
