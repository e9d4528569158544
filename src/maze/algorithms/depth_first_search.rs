use rand::seq::SliceRandom;

use super::{GenError, Maze, MazeAlgorithm, Random};
use crate::{array::Array2D, core::*, maze::CellWall};

/// Randomized depth-first carver, produces a spanning tree of the grid.
pub struct DepthFirstSearch {}

/// One cell on the carving stack and the directions it still has to try.
struct Frame {
    pos: Coord,
    dirs: [CellWall; 4],
    next: usize,
}

impl Frame {
    fn new(pos: Coord, rng: &mut Random) -> Self {
        let mut dirs = CellWall::get_in_order();
        dirs.shuffle(rng);
        Frame { pos, dirs, next: 0 }
    }
}

impl MazeAlgorithm for DepthFirstSearch {
    fn carve(maze: &mut Maze, start: Coord, rng: &mut Random) -> Result<(), GenError> {
        maze.get_cell(start)?;

        let cell_count = maze.cell_count();
        let mut visited = Array2D::new(false, maze.rows(), maze.cols());
        let mut stack = Vec::with_capacity(cell_count);
        let mut visited_count = 1;

        log::debug!(
            "carving {}x{} maze from {}",
            maze.rows(),
            maze.cols(),
            start
        );

        visited[start] = true;
        stack.push(Frame::new(start, rng));

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.dirs.len() {
                stack.pop();
                continue;
            }

            let wall = frame.dirs[frame.next];
            frame.next += 1;
            let current = frame.pos;
            let neighbor = current + wall.to_coord();

            if visited.get(neighbor) == Some(&false) {
                maze.remove_wall(current, wall)?;
                visited[neighbor] = true;
                visited_count += 1;
                stack.push(Frame::new(neighbor, rng));
            }
        }

        log::debug!("carved {}/{} cells", visited_count, cell_count);

        Ok(())
    }
}
