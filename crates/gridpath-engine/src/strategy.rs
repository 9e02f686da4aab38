//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

/// The three interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Breadth-first search. Shortest path in edge count.
    Bfs,
    /// Depth-first search. Finds some path; no optimality guarantee.
    Dfs,
    /// A* with the Manhattan heuristic. Minimum-cost path.
    Astar,
}

impl Strategy {
    /// All strategies, in a fixed order. Handy for drivers that build
    /// selection menus and for exercising every algorithm in tests.
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Dfs, Strategy::Astar];

    /// The stable lowercase name (`bfs`, `dfs`, `astar`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Astar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy '{}', expected one of: bfs, dfs, astar",
            self.name
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "astar" => Ok(Self::Astar),
            other => Err(ParseStrategyError {
                name: other.to_owned(),
            }),
        }
    }
}
