use hashbrown::HashSet;

use super::{AdjacencyGraph, Path, SolveError};
use crate::core::Coord;
use crate::maze::{CellWall, Maze};

/// Depth-first backtracking search from `start` to `goal`.
///
/// Returns the first path found when following each cell's neighbors in graph
/// order, which is not necessarily the shortest one if the maze has loops.
/// An empty path means the goal can't be reached.
pub fn solve_backtrack(
    graph: &AdjacencyGraph,
    start: Coord,
    goal: Coord,
) -> Result<Path, SolveError> {
    graph.neighbors(start)?;
    graph.neighbors(goal)?;

    if start == goal {
        return Ok(vec![start]);
    }

    let mut visited = HashSet::new();
    // (cell, index of the next neighbor to try)
    let mut stack: Vec<(Coord, usize)> = vec![(start, 0)];
    visited.insert(start);

    while let Some(&(current, next)) = stack.last() {
        let neighbors = graph.neighbors(current)?;
        let Some(&neighbor) = neighbors.get(next) else {
            stack.pop();
            continue;
        };

        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }

        if neighbor == goal {
            let path: Path = stack
                .iter()
                .map(|&(pos, _)| pos)
                .chain(std::iter::once(goal))
                .collect();
            log::debug!("found path {} -> {} of {} cells", start, goal, path.len());
            return Ok(path);
        }

        if visited.insert(neighbor) {
            stack.push((neighbor, 0));
        }
    }

    log::debug!("no path {} -> {}", start, goal);
    Ok(Path::new())
}

/// Translates a path into the step taken between each pair of cells.
///
/// Fails on the first pair of cells that aren't orthogonally adjacent.
pub fn path_to_directions(path: &[Coord]) -> Result<Vec<CellWall>, SolveError> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            Maze::which_wall_between(from, to).ok_or(SolveError::MalformedPath { from, to })
        })
        .collect()
}
