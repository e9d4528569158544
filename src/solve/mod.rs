pub mod backtrack;
pub mod connectivity;
pub mod graph;

use thiserror::Error;

use crate::core::Coord;

pub use backtrack::{path_to_directions, solve_backtrack};
pub use connectivity::{is_fully_connected, reachable_count};
pub use graph::AdjacencyGraph;

/// Ordered cells from start to goal, empty when the goal is unreachable.
pub type Path = Vec<Coord>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("cell {0} is not part of the graph")]
    UnknownCell(Coord),
    #[error("malformed path, {from} and {to} are not adjacent")]
    MalformedPath { from: Coord, to: Coord },
}
