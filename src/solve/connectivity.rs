use std::collections::VecDeque;

use crate::array::Array2D;
use crate::core::Coord;
use crate::maze::{CellWall, Maze, MazeError};

/// Number of distinct cells reachable from `start` through passages.
///
/// A step is taken only when both cells have the shared wall cleared, so
/// half-open walls never count as passages.
pub fn reachable_count(maze: &Maze, start: Coord) -> Result<usize, MazeError> {
    maze.get_cell(start)?;

    let mut visited = Array2D::new(false, maze.rows(), maze.cols());
    let mut queue = VecDeque::new();
    let mut count = 1;

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for wall in CellWall::get_in_order() {
            if !maze.is_passage(current, wall) {
                continue;
            }

            let neighbor = current + wall.to_coord();
            if !visited[neighbor] {
                visited[neighbor] = true;
                count += 1;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(count)
}

/// Checks that every cell of the maze can be reached from `start`.
pub fn is_fully_connected(maze: &Maze, start: Coord) -> Result<bool, MazeError> {
    let reached = reachable_count(maze, start)?;
    log::debug!("reached {}/{} cells from {}", reached, maze.cell_count(), start);
    Ok(reached == maze.cell_count())
}
