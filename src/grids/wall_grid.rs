use crate::error::MazeError;
use crate::grids::{Coords, Dimensions, Direction, Phase};

/// Wall flags of a single cell, `true` meaning the side is blocked.
/// Indexed by `Direction as usize`: top, bottom, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walls([bool; 4]);

impl Walls {
    pub const CLOSED: Walls = Walls([true; 4]);

    #[inline]
    pub fn has(&self, side: Direction) -> bool {
        self.0[side as usize]
    }

    #[inline]
    pub fn set(&mut self, side: Direction, present: bool) {
        self.0[side as usize] = present;
    }

    pub fn top(&self) -> bool {
        self.has(Direction::Up)
    }

    pub fn bottom(&self) -> bool {
        self.has(Direction::Down)
    }

    pub fn left(&self) -> bool {
        self.has(Direction::Left)
    }

    pub fn right(&self) -> bool {
        self.has(Direction::Right)
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub walls: Walls,
    visited: Option<Phase>,
}

impl Cell {
    pub fn is_visited(&self) -> bool {
        self.visited.is_some()
    }

    pub fn visited_in(&self) -> Option<Phase> {
        self.visited
    }
}

/// Rectangular grid of walled cells stored row-major in one flat vector.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<Cell>,
}

impl WallGrid {
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self, MazeError> {
        let dims = Dimensions::new(rows, columns)?;
        let area = dims
            .area()
            .ok_or(MazeError::InvalidDimension { rows, columns })?;

        Ok(Self {
            cells: vec![Cell::default(); area],
            dims,
        })
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> usize {
        debug_assert!(
            self.dims.contains((row, column)),
            "cell coordinates are out of bounds"
        );
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn get_cell(&self, row: usize, column: usize) -> &Cell {
        &self.cells[self.index_of(row, column)]
    }

    #[inline]
    fn get_cell_mut(&mut self, row: usize, column: usize) -> &mut Cell {
        let index = self.index_of(row, column);
        &mut self.cells[index]
    }

    pub fn check_bounds(&self, coords: Coords) -> Result<(), MazeError> {
        if self.dims.contains(coords) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                row: coords.0,
                column: coords.1,
            })
        }
    }

    /// Cells in row-major order paired with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coords, &Cell)> + '_ {
        let columns = self.dims.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| ((index / columns, index % columns), cell))
    }

    /// `None` when either `coords` or the cell behind `direction` is off the grid.
    pub fn get_neighbor_coords_of(&self, coords: Coords, direction: Direction) -> Option<Coords> {
        if !self.dims.contains(coords) {
            return None;
        }

        let (dr, dc) = direction.offset();
        let row = coords.0 as isize + dr;
        let column = coords.1 as isize + dc;

        if row < 0 || column < 0 {
            return None;
        }

        let neighbor = (row as usize, column as usize);
        if self.dims.contains(neighbor) {
            Some(neighbor)
        } else {
            None
        }
    }

    pub fn neighbor(&self, coords: Coords, direction: Direction) -> Option<&Cell> {
        self.get_neighbor_coords_of(coords, direction)
            .map(|(row, column)| self.get_cell(row, column))
    }

    /// True when the boundary towards `direction` is open on both sides and the
    /// cell behind it has not been visited yet.
    pub fn can_pass(&self, coords: Coords, direction: Direction) -> bool {
        // an off-grid source has no neighbour either
        match self.neighbor(coords, direction) {
            Some(destination) => {
                let source = self.get_cell(coords.0, coords.1);
                !source.walls.has(direction)
                    && !destination.walls.has(-direction)
                    && !destination.is_visited()
            }
            None => false,
        }
    }

    /// Clears the wall on `direction` and, if there is a cell behind it, that
    /// cell's facing wall. Returns the neighbour's coordinates. Off-grid
    /// sources are left alone.
    pub fn open_passage(&mut self, coords: Coords, direction: Direction) -> Option<Coords> {
        if !self.dims.contains(coords) {
            return None;
        }

        self.get_cell_mut(coords.0, coords.1)
            .walls
            .set(direction, false);

        let neighbor = self.get_neighbor_coords_of(coords, direction)?;
        self.get_cell_mut(neighbor.0, neighbor.1)
            .walls
            .set(-direction, false);

        Some(neighbor)
    }

    pub fn close_passage(&mut self, coords: Coords, direction: Direction) {
        if !self.dims.contains(coords) {
            return;
        }

        self.get_cell_mut(coords.0, coords.1)
            .walls
            .set(direction, true);

        if let Some(neighbor) = self.get_neighbor_coords_of(coords, direction) {
            self.get_cell_mut(neighbor.0, neighbor.1)
                .walls
                .set(-direction, true);
        }
    }

    /// Opens the top of the first cell and the bottom of the last one.
    pub fn break_entrance_and_exit(&mut self) {
        let last = (self.dims.rows - 1, self.dims.columns - 1);
        self.open_passage((0, 0), Direction::Up);
        self.open_passage(last, Direction::Down);
    }

    pub fn mark_visited(&mut self, coords: Coords, phase: Phase) {
        self.get_cell_mut(coords.0, coords.1).visited = Some(phase);
    }

    pub fn is_visited(&self, coords: Coords) -> bool {
        self.get_cell(coords.0, coords.1).is_visited()
    }

    pub fn reset_visited(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.visited = None;
        }
    }

    pub fn count_visited(&self, phase: Phase) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.visited == Some(phase))
            .count()
    }

    /// Number of open boundaries between adjacent cells. Entrance and exit
    /// openings on the outer boundary are not counted.
    pub fn passage_count(&self) -> usize {
        let mut count = 0;
        for ((row, column), cell) in self.iter() {
            if row + 1 < self.dims.rows
                && !cell.walls.bottom()
                && !self.get_cell(row + 1, column).walls.top()
            {
                count += 1;
            }
            if column + 1 < self.dims.columns
                && !cell.walls.right()
                && !self.get_cell(row, column + 1).walls.left()
            {
                count += 1;
            }
        }

        count
    }
}
