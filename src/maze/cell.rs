use std::fmt;

use crate::core::Coord;
use crate::maze::cell::CellWall::*;

/// Wall state of a single cell. A set bit means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All four walls present.
    pub const CLOSED: Cell = Cell(0b1111);
    /// No walls at all.
    pub const OPEN: Cell = Cell(0);

    pub fn new() -> Cell {
        Self::CLOSED
    }

    /// Builds a cell from a raw bitmask, `None` if it uses more than four bits.
    pub fn from_bits(bits: u8) -> Option<Cell> {
        (bits <= Self::CLOSED.0).then_some(Cell(bits))
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        self.0 & wall.bit() != 0
    }

    pub fn remove_wall(&mut self, wall: CellWall) {
        self.0 &= !wall.bit();
    }

    pub fn add_wall(&mut self, wall: CellWall) {
        self.0 |= wall.bit();
    }

    /// Walls that are absent, in canonical order.
    pub fn open_walls(&self) -> impl Iterator<Item = CellWall> + '_ {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| !self.get_wall(wall))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CellWall {
    Up,
    Right,
    Down,
    Left,
}

impl CellWall {
    /// Canonical order: up, right, down, left.
    pub const fn get_in_order() -> [CellWall; 4] {
        [Up, Right, Down, Left]
    }

    pub const fn bit(&self) -> u8 {
        match self {
            Up => 0b0001,
            Right => 0b0010,
            Down => 0b0100,
            Left => 0b1000,
        }
    }

    pub fn to_coord(&self) -> Coord {
        match self {
            Up => Coord(-1, 0),
            Right => Coord(0, 1),
            Down => Coord(1, 0),
            Left => Coord(0, -1),
        }
    }

    /// Inverse of [`CellWall::to_coord`].
    pub fn from_offset(offset: Coord) -> Option<CellWall> {
        match (offset.0, offset.1) {
            (-1, 0) => Some(Up),
            (0, 1) => Some(Right),
            (1, 0) => Some(Down),
            (0, -1) => Some(Left),
            _ => None,
        }
    }

    pub fn reverse_wall(&self) -> CellWall {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }
}

impl fmt::Display for CellWall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Up => "Up",
            Right => "Right",
            Down => "Down",
            Left => "Left",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_closed() {
        let cell = Cell::new();
        assert_eq!(cell.bits(), 15);
        assert!(CellWall::get_in_order()
            .into_iter()
            .all(|wall| cell.get_wall(wall)));
    }

    #[test]
    fn remove_and_restore() {
        let mut cell = Cell::new();
        cell.remove_wall(Right);
        assert!(!cell.get_wall(Right));
        assert!(cell.get_wall(Up));
        assert_eq!(cell.open_walls().collect::<Vec<_>>(), vec![Right]);

        cell.remove_wall(Right);
        assert_eq!(cell.bits(), 0b1101);

        cell.add_wall(Right);
        assert_eq!(cell, Cell::CLOSED);
    }

    #[test]
    fn from_bits_rejects_wide_masks() {
        assert_eq!(Cell::from_bits(0), Some(Cell::OPEN));
        assert_eq!(Cell::from_bits(15), Some(Cell::CLOSED));
        assert_eq!(Cell::from_bits(16), None);
    }

    #[test]
    fn offsets_invert() {
        for wall in CellWall::get_in_order() {
            assert_eq!(CellWall::from_offset(wall.to_coord()), Some(wall));
            assert_eq!(wall.reverse_wall().to_coord(), -wall.to_coord());
            assert_eq!(wall.reverse_wall().reverse_wall(), wall);
        }
        assert_eq!(CellWall::from_offset(Coord(1, 1)), None);
        assert_eq!(CellWall::from_offset(Coord(0, 0)), None);
    }
}
