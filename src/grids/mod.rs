pub mod wall_grid;

use crate::error::MazeError;

pub type Coords = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

impl Dimensions {
    /// At least one row and one column, with a cell count that fits in `usize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        let dims = Dimensions { rows, columns };
        match dims.area() {
            Some(area) if area > 0 => Ok(dims),
            _ => Err(MazeError::InvalidDimension { rows, columns }),
        }
    }

    /// `None` when the cell count overflows.
    pub fn area(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    pub fn contains(&self, (row, column): Coords) -> bool {
        row < self.rows && column < self.columns
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// Search and candidate order used by both the generator and the solver.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, column) delta. Rows grow downwards, columns grow to the right.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        match dir {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => unreachable!(),
        }
    }
}

/// Which algorithm left a visit mark on a cell. Generation and solving share
/// the cells but never the marks, so leftovers from carving can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Carving,
    Solving,
}

#[cfg(test)]
mod test_dimensions {
    use super::*;

    #[test]
    fn area_overflow_is_reported() {
        let dims = Dimensions {
            rows: usize::MAX,
            columns: 2,
        };
        assert_eq!(dims.area(), None);
        assert!(Dimensions::new(usize::MAX, 2).is_err());
        assert!(Dimensions::new(0, 5).is_err());
        assert_eq!(Dimensions::new(3, 4).map(|d| d.area()), Ok(Some(12)));
    }
}

#[cfg(test)]
mod test_direction {
    use super::*;

    #[test]
    fn opposite_undoes_offset() {
        for &dir in Direction::ALL.iter() {
            let (dr, dc) = dir.offset();
            let (or, oc) = (-dir).offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_eq!(-(-dir), dir);
        }
    }

    #[test]
    fn index_matches_order() {
        for (i, &dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(Direction::from(i), dir);
            assert_eq!(dir as usize, i);
        }
    }

    #[test]
    fn up_decrements_row_and_left_decrements_column() {
        assert_eq!(Direction::Up.offset(), (-1, 0));
        assert_eq!(Direction::Left.offset(), (0, -1));
    }
}
