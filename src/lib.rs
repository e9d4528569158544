//! Rectangular grid mazes: randomized depth-first generation, connectivity
//! checks, backtracking solver and a JSON format for saving them.

pub mod array;
pub mod core;
pub mod logging;
pub mod maze;
pub mod ser;
pub mod settings;
pub mod solve;

pub use crate::core::Coord;
pub use maze::{
    algorithms::{DepthFirstSearch, GeneratedMaze, MazeAlgorithm, Random},
    Cell, CellWall, Maze, MazeError,
};
pub use solve::{AdjacencyGraph, Path, SolveError};
