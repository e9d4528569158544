use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Position of a cell, `Coord(row, col)`.
///
/// Rows grow downward and columns grow rightward. Signed so that offsets and
/// out-of-bounds neighbors can be represented before they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    /// Manhattan length of the coordinate taken as an offset.
    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// All coordinates of a `rows x cols` rectangle, row-major.
    pub fn iter_fill(rows: usize, cols: usize) -> impl Iterator<Item = Coord> {
        (0..rows as i32).flat_map(move |r| (0..cols as i32).map(move |c| Coord(r, c)))
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, other: Coord) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, other: Coord) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Neg for Coord {
    type Output = Coord;

    fn neg(self) -> Coord {
        Coord(-self.0, -self.1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(val: Coord) -> Self {
        (val.0, val.1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn arithmetic() {
        assert_eq!(Coord(1, 2) + Coord(-1, 3), Coord(0, 5));
        assert_eq!(Coord(1, 2) - Coord(1, 3), Coord(0, -1));
        assert_eq!(-Coord(1, -2), Coord(-1, 2));
        assert_eq!(Coord(-3, 4).abs_sum(), 7);
    }

    #[test]
    fn iter_fill_is_row_major() {
        let all: Vec<_> = Coord::iter_fill(2, 3).collect();
        assert_eq!(
            all,
            vec![
                Coord(0, 0),
                Coord(0, 1),
                Coord(0, 2),
                Coord(1, 0),
                Coord(1, 1),
                Coord(1, 2)
            ]
        );
    }
}
