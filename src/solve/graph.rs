use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use super::SolveError;
use crate::core::Coord;
use crate::maze::Maze;

pub type Neighbors = SmallVec<[Coord; 4]>;

/// Read-only neighbor lists derived from a maze's walls.
///
/// Only the wall bit of the cell itself is consulted, the neighbor's matching
/// bit is trusted to agree. Neighbors are listed up, right, down, left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    nodes: HashMap<Coord, Neighbors>,
}

impl AdjacencyGraph {
    pub fn from_maze(maze: &Maze) -> Self {
        let cells = maze.get_cells();
        let nodes = cells
            .iter_pos()
            .zip(cells.iter())
            .map(|(pos, cell)| {
                let neighbors = cell
                    .open_walls()
                    .map(|wall| pos + wall.to_coord())
                    .filter(|&neighbor| maze.is_in_bounds(neighbor))
                    .collect();
                (pos, neighbors)
            })
            .collect();

        AdjacencyGraph { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.nodes.contains_key(&pos)
    }

    pub fn neighbors(&self, pos: Coord) -> Result<&[Coord], SolveError> {
        self.nodes
            .get(&pos)
            .map(|n| n.as_slice())
            .ok_or(SolveError::UnknownCell(pos))
    }

    pub fn are_adjacent(&self, a: Coord, b: Coord) -> bool {
        self.nodes.get(&a).is_some_and(|n| n.contains(&b))
    }

    /// Cells in the order a breadth-first search from `start` reaches them.
    pub fn bfs_order(&self, start: Coord) -> Result<Vec<Coord>, SolveError> {
        self.neighbors(start)?;

        let mut visited = HashSet::with_capacity(self.nodes.len());
        let mut queue = VecDeque::from([start]);
        let mut order = Vec::new();
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);

            for &neighbor in self.neighbors(current)? {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(order)
    }
}

impl From<&Maze> for AdjacencyGraph {
    fn from(maze: &Maze) -> Self {
        Self::from_maze(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellWall::*;

    fn corridor() -> Maze {
        // (0,0) - (0,1)
        //           |
        // (1,0) - (1,1)
        let mut maze = Maze::new(2, 2).unwrap();
        maze.remove_wall(Coord(0, 0), Right).unwrap();
        maze.remove_wall(Coord(0, 1), Down).unwrap();
        maze.remove_wall(Coord(1, 1), Left).unwrap();
        maze
    }

    #[test]
    fn closed_maze_has_no_edges() {
        let graph = AdjacencyGraph::from_maze(&Maze::new(3, 2).unwrap());
        assert_eq!(graph.len(), 6);
        assert!(graph.neighbors(Coord(1, 1)).unwrap().is_empty());
    }

    #[test]
    fn neighbors_in_canonical_order() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_wall(Coord(1, 1), Left).unwrap();
        maze.remove_wall(Coord(1, 1), Down).unwrap();
        maze.remove_wall(Coord(1, 1), Up).unwrap();
        maze.remove_wall(Coord(1, 1), Right).unwrap();

        let graph = AdjacencyGraph::from(&maze);
        assert_eq!(
            graph.neighbors(Coord(1, 1)).unwrap(),
            &[Coord(0, 1), Coord(1, 2), Coord(2, 1), Coord(1, 0)]
        );
        assert_eq!(graph.neighbors(Coord(0, 1)).unwrap(), &[Coord(1, 1)]);
    }

    #[test]
    fn single_sided_and_border_openings() {
        let mut maze = Maze::new(1, 2).unwrap();
        maze.cells[Coord(0, 0)].remove_wall(Right);
        maze.cells[Coord(0, 0)].remove_wall(Up);

        let graph = AdjacencyGraph::from_maze(&maze);
        assert_eq!(graph.neighbors(Coord(0, 0)).unwrap(), &[Coord(0, 1)]);
        assert!(graph.neighbors(Coord(0, 1)).unwrap().is_empty());
        assert!(graph.are_adjacent(Coord(0, 0), Coord(0, 1)));
        assert!(!graph.are_adjacent(Coord(0, 1), Coord(0, 0)));
    }

    #[test]
    fn unknown_cell() {
        let graph = AdjacencyGraph::from_maze(&corridor());
        assert!(!graph.contains(Coord(2, 0)));
        assert_eq!(
            graph.neighbors(Coord(2, 0)),
            Err(SolveError::UnknownCell(Coord(2, 0)))
        );
    }

    #[test]
    fn bfs_order() {
        let graph = AdjacencyGraph::from_maze(&corridor());
        assert_eq!(
            graph.bfs_order(Coord(0, 1)).unwrap(),
            vec![Coord(0, 1), Coord(1, 1), Coord(0, 0), Coord(1, 0)]
        );

        let closed = AdjacencyGraph::from_maze(&Maze::new(2, 2).unwrap());
        assert_eq!(closed.bfs_order(Coord(1, 1)).unwrap(), vec![Coord(1, 1)]);
    }
}
