pub mod algorithms;
pub mod cell;
#[allow(clippy::module_inception)]
pub mod maze;

pub use cell::{Cell, CellWall};
pub use maze::{Maze, MazeError, PATH_MARKER};
