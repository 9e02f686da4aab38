//! Frontier containers for the three search strategies.
//!
//! All variants store flat cell indices and share one contract:
//! `push`, `pop`, `is_empty`. The priority variant is a min-heap keyed
//! by `(score, insertion_order)`, so equal scores pop in FIFO order and
//! pop order is deterministic.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::Strategy;

/// An entry in the priority frontier.
///
/// `seq` is a monotonically increasing counter; lower means inserted
/// earlier, which breaks score ties in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    score: i32,
    seq: u64,
    idx: usize,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural ordering: smaller score first, then smaller seq.
        // Wrapped in `Reverse` for the max-heap.
        self.score.cmp(&other.score).then(self.seq.cmp(&other.seq))
    }
}

/// The open set of one search run.
///
/// Ephemeral: created for a run, discarded with it. A cell may have
/// several live entries in the priority variant (reinsertion stands in
/// for decrease-key); the engine discards entries whose cell is already
/// finalized, so observable pop order is minimum-score,
/// ties-by-insertion.
#[derive(Debug)]
pub enum Frontier {
    /// FIFO queue — BFS. Pop returns the earliest push.
    Fifo(VecDeque<usize>),
    /// LIFO stack — DFS. Pop returns the most recent push.
    Lifo(Vec<usize>),
    /// Min-priority queue — A*. Pop returns the smallest score.
    Priority {
        heap: BinaryHeap<Reverse<OpenEntry>>,
        seq: u64,
    },
}

impl Frontier {
    /// Create the frontier variant a strategy needs.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Bfs => Self::Fifo(VecDeque::new()),
            Strategy::Dfs => Self::Lifo(Vec::new()),
            Strategy::Astar => Self::Priority {
                heap: BinaryHeap::new(),
                seq: 0,
            },
        }
    }

    /// Push a cell index. `score` is the A* f-value; the FIFO and LIFO
    /// variants ignore it.
    pub fn push(&mut self, idx: usize, score: i32) {
        match self {
            Self::Fifo(queue) => queue.push_back(idx),
            Self::Lifo(stack) => stack.push(idx),
            Self::Priority { heap, seq } => {
                heap.push(Reverse(OpenEntry {
                    score,
                    seq: *seq,
                    idx,
                }));
                *seq += 1;
            }
        }
    }

    /// Pop the next cell index, or `None` if the frontier is empty.
    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) => stack.pop(),
            Self::Priority { heap, .. } => heap.pop().map(|Reverse(entry)| entry.idx),
        }
    }

    /// Whether the frontier has no entries.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Fifo(queue) => queue.is_empty(),
            Self::Lifo(stack) => stack.is_empty(),
            Self::Priority { heap, .. } => heap.is_empty(),
        }
    }

    /// Number of live entries (priority entries may include stale
    /// duplicates).
    pub fn len(&self) -> usize {
        match self {
            Self::Fifo(queue) => queue.len(),
            Self::Lifo(stack) => stack.len(),
            Self::Priority { heap, .. } => heap.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_pops_earliest_first() {
        let mut f = Frontier::for_strategy(Strategy::Bfs);
        f.push(1, 0);
        f.push(2, 0);
        f.push(3, 0);
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn lifo_pops_latest_first() {
        let mut f = Frontier::for_strategy(Strategy::Dfs);
        f.push(1, 0);
        f.push(2, 0);
        f.push(3, 0);
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn priority_pops_minimum_score() {
        let mut f = Frontier::for_strategy(Strategy::Astar);
        f.push(10, 5);
        f.push(20, 2);
        f.push(30, 8);
        f.push(40, 3);
        assert_eq!(f.pop(), Some(20));
        assert_eq!(f.pop(), Some(40));
        assert_eq!(f.pop(), Some(10));
        assert_eq!(f.pop(), Some(30));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn priority_breaks_ties_by_insertion_order() {
        let mut f = Frontier::for_strategy(Strategy::Astar);
        f.push(7, 4);
        f.push(8, 4);
        f.push(9, 4);
        assert_eq!(f.pop(), Some(7));
        assert_eq!(f.pop(), Some(8));
        assert_eq!(f.pop(), Some(9));
    }

    #[test]
    fn reinsertion_with_lower_score_pops_first() {
        let mut f = Frontier::for_strategy(Strategy::Astar);
        f.push(5, 9);
        f.push(5, 3); // decrease-key by reinsertion
        f.push(6, 6);
        assert_eq!(f.pop(), Some(5));
        assert_eq!(f.pop(), Some(6));
        // The stale duplicate surfaces last; the engine discards it.
        assert_eq!(f.pop(), Some(5));
    }

    #[test]
    fn is_empty_and_len() {
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::Astar] {
            let mut f = Frontier::for_strategy(strategy);
            assert!(f.is_empty());
            assert_eq!(f.len(), 0);
            f.push(0, 1);
            assert!(!f.is_empty());
            assert_eq!(f.len(), 1);
            f.pop();
            assert!(f.is_empty());
        }
    }
}
