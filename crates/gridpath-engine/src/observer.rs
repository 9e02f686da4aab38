//! The visualization adapter contract.
//!
//! The engine reports progress through this trait so an external
//! renderer can color cells as they are explored. The engine never
//! renders, sleeps, or schedules anything itself; pacing between steps
//! belongs to the driver.

use gridpath_core::Point;

/// Receiver for per-step exploration events.
///
/// Guarantees from the engine:
/// - one call per cell per run, in deterministic order;
/// - no calls during initialization (a start == end run emits nothing);
/// - no calls after the run reaches a terminal state.
pub trait Observer {
    /// A cell became visited (BFS/DFS) or finalized (A*) this step.
    fn cell_visited(&mut self, pos: Point);
}

/// No-op observer for callers that only want the final result.
impl Observer for () {
    fn cell_visited(&mut self, _pos: Point) {}
}
