use std::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;
use thiserror::Error;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::cell::{Cell, CellWall};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze size {rows}x{cols}, both dimensions must be between 1 and 2^31-1")]
    InvalidSize { rows: usize, cols: usize },
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),
}

/// Marker drawn in place of the bottom wall for cells on a path.
pub const PATH_MARKER: char = '.';

/// Rectangular grid of cells.
///
/// Adjacent cells always agree on the wall between them: every mutation
/// touches both sides at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
}

impl Maze {
    /// Creates a `rows x cols` maze with every wall present.
    pub fn new(rows: usize, cols: usize) -> Result<Maze, MazeError> {
        Self::check_size(rows, cols)?;

        Ok(Maze {
            cells: Array2D::new(Cell::new(), rows, cols),
        })
    }

    /// Both dimensions must be at least 1 and addressable by a [`Coord`],
    /// and the cell count must fit in `usize`.
    pub fn check_size(rows: usize, cols: usize) -> Result<(), MazeError> {
        let max = i32::MAX as usize;
        if rows == 0 || cols == 0 || rows > max || cols > max || rows.checked_mul(cols).is_none()
        {
            return Err(MazeError::InvalidSize { rows, cols });
        }

        Ok(())
    }

    pub(crate) fn from_cells(cells: Array2D<Cell>) -> Maze {
        Maze { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// `(rows, cols)`
    pub fn size(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    fn check_bounds(&self, pos: Coord) -> Result<(), MazeError> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds(pos))
        }
    }

    pub fn get_cell(&self, pos: Coord) -> Result<Cell, MazeError> {
        self.cells
            .get(pos)
            .copied()
            .ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn get_cells(&self) -> &Array2D<Cell> {
        &self.cells
    }

    pub fn has_wall(&self, pos: Coord, wall: CellWall) -> Result<bool, MazeError> {
        Ok(self.get_cell(pos)?.get_wall(wall))
    }

    /// Carves a passage from `pos` through `wall`, clearing the matching wall
    /// of the neighbor too.
    ///
    /// Fails if `pos` is outside the maze or if the wall is on the border,
    /// since there is no neighbor to keep in sync.
    pub fn remove_wall(&mut self, pos: Coord, wall: CellWall) -> Result<(), MazeError> {
        self.check_bounds(pos)?;
        let neighbor = pos + wall.to_coord();
        self.check_bounds(neighbor)?;

        self.cells[pos].remove_wall(wall);
        self.cells[neighbor].remove_wall(wall.reverse_wall());
        Ok(())
    }

    /// Restores the wall on `pos` and, if it exists, on the neighbor behind it.
    pub fn add_wall(&mut self, pos: Coord, wall: CellWall) -> Result<(), MazeError> {
        self.check_bounds(pos)?;

        self.cells[pos].add_wall(wall);
        if let Some(neighbor) = self.cells.get_mut(pos + wall.to_coord()) {
            neighbor.add_wall(wall.reverse_wall());
        }
        Ok(())
    }

    /// Returns the wall of `cell` that faces `cell2`, `None` if they aren't adjacent.
    pub fn which_wall_between(cell: Coord, cell2: Coord) -> Option<CellWall> {
        CellWall::from_offset(cell2 - cell)
    }

    /// In-bounds neighbors of `pos` regardless of walls, in canonical order.
    pub fn get_neighbors_pos(&self, pos: Coord) -> SmallVec<[(CellWall, Coord); 4]> {
        CellWall::get_in_order()
            .into_iter()
            .map(|wall| (wall, pos + wall.to_coord()))
            .filter(|&(_, neighbor)| self.is_in_bounds(neighbor))
            .collect()
    }

    /// True if both `pos` and its neighbor through `wall` have that wall cleared.
    pub fn is_passage(&self, pos: Coord, wall: CellWall) -> bool {
        let neighbor = pos + wall.to_coord();
        match (self.cells.get(pos), self.cells.get(neighbor)) {
            (Some(a), Some(b)) => !a.get_wall(wall) && !b.get_wall(wall.reverse_wall()),
            _ => false,
        }
    }

    /// Number of carved passages between pairs of adjacent cells.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter_pos()
            .map(|pos| {
                [CellWall::Right, CellWall::Down]
                    .into_iter()
                    .filter(|&wall| self.is_passage(pos, wall))
                    .count()
            })
            .sum()
    }

    /// First adjacent pair that disagrees on the wall between them, if any.
    pub fn find_asymmetric_wall(&self) -> Option<(Coord, CellWall)> {
        self.cells.iter_pos().find_map(|pos| {
            [CellWall::Right, CellWall::Down]
                .into_iter()
                .find(|&wall| {
                    let neighbor = pos + wall.to_coord();
                    self.cells.get(neighbor).is_some_and(|other| {
                        self.cells[pos].get_wall(wall) != other.get_wall(wall.reverse_wall())
                    })
                })
                .map(|wall| (pos, wall))
        })
    }

    /// ASCII drawing of the maze, optionally marking the cells of `path`.
    ///
    /// Each cell is two characters: its bottom wall (`_`) and its right wall (`|`).
    /// Path cells show [`PATH_MARKER`] instead of the bottom wall.
    pub fn render(&self, path: Option<&[Coord]>) -> String {
        let on_path: HashSet<Coord> = path.unwrap_or_default().iter().copied().collect();
        let (rows, cols) = self.size();

        let mut out = String::with_capacity((rows + 1) * (cols * 2 + 2));
        out.push(' ');
        out.push_str(&"_".repeat(cols * 2 - 1));
        out.push('\n');

        for r in 0..rows {
            out.push('|');
            for (c, cell) in self.cells.row(r).unwrap_or_default().iter().enumerate() {
                let pos = Coord(r as i32, c as i32);
                out.push(if on_path.contains(&pos) {
                    PATH_MARKER
                } else if cell.get_wall(CellWall::Down) {
                    '_'
                } else {
                    ' '
                });
                out.push(if cell.get_wall(CellWall::Right) {
                    '|'
                } else {
                    ' '
                });
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}
