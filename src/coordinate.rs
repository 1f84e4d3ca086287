use core::fmt;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// A cell position given as `(column, row)`, with the origin in the top-left corner of the
/// terrain and rows growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(column: usize, row: usize) -> Coordinate {
        Coordinate { column, row }
    }

    /// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to `other`.
    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// The von Neumann neighbourhood in the fixed order up, down, left, right. Cells that would
    /// need a negative component are left out; the upper bound is not checked here.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        let mut neighborhood = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            neighborhood.push(Coordinate::new(self.column, row));
        }
        neighborhood.push(Coordinate::new(self.column, self.row + 1));
        if let Some(column) = self.column.checked_sub(1) {
            neighborhood.push(Coordinate::new(column, self.row));
        }
        neighborhood.push(Coordinate::new(self.column + 1, self.row));
        neighborhood
    }

    /// Direction of the single orthogonal step from `self` to `next`, if they are adjacent.
    pub fn step_direction(&self, next: &Coordinate) -> Option<Direction> {
        match (
            next.column as isize - self.column as isize,
            next.row as isize - self.row as isize,
        ) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((column, row): (usize, usize)) -> Self {
        Coordinate::new(column, row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The four orthogonal moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighborhood_skips_negative_cells() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(
            corner.neumann_neighborhood().as_slice(),
            &[Coordinate::new(0, 1), Coordinate::new(1, 0)]
        );
        let inner = Coordinate::new(2, 3);
        assert_eq!(
            inner.neumann_neighborhood().as_slice(),
            &[
                Coordinate::new(2, 2),
                Coordinate::new(2, 4),
                Coordinate::new(1, 3),
                Coordinate::new(3, 3),
            ]
        );
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Coordinate::new(1, 7);
        let b = Coordinate::new(4, 2);
        assert_eq!(a.manhattan_distance(&b), 8);
        assert_eq!(b.manhattan_distance(&a), 8);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn step_direction_only_for_adjacent_cells() {
        let c = Coordinate::new(3, 3);
        assert_eq!(c.step_direction(&Coordinate::new(3, 2)), Some(Direction::Up));
        assert_eq!(c.step_direction(&Coordinate::new(3, 4)), Some(Direction::Down));
        assert_eq!(c.step_direction(&Coordinate::new(2, 3)), Some(Direction::Left));
        assert_eq!(c.step_direction(&Coordinate::new(4, 3)), Some(Direction::Right));
        assert_eq!(c.step_direction(&Coordinate::new(4, 4)), None);
        assert_eq!(c.step_direction(&c), None);
    }
}
