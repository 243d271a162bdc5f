use std::thread;
use std::time::Duration;

use crate::error::MazeError;
use crate::grids::wall_grid::{WallGrid, Walls};
use crate::grids::{Coords, Dimensions, Direction};

/// Sink for drawing events raised while carving and solving. Nothing it
/// does feeds back into either algorithm apart from `should_stop`.
pub trait RenderObserver {
    /// A carving branch ran out of candidates at `cell`.
    fn draw_cell(&mut self, cell: Coords, walls: Walls);

    /// The solver stepped from `from` into `to`, or retreated from `to`
    /// back to `from` when `is_backtrack` is set.
    fn draw_move(&mut self, from: Coords, to: Coords, is_backtrack: bool);

    /// The solver entered a new cell.
    fn animate(&mut self) {}

    fn should_stop(&self) -> bool {
        false
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl RenderObserver for NoRender {
    fn draw_cell(&mut self, _cell: Coords, _walls: Walls) {}

    fn draw_move(&mut self, _from: Coords, _to: Coords, _is_backtrack: bool) {}
}

pub const PATH_MARK: char = '*';
pub const DEAD_END_MARK: char = '.';

/// Draws the maze as text. Wall state is copied out of the events, so the
/// renderer never needs to borrow the grid while an algorithm runs.
pub struct TextRenderer {
    dims: Dimensions,
    walls: Vec<Walls>,
    trail: Vec<Option<char>>,

    delay: Option<Duration>,
    echo: bool,
    pub frames: usize,
}

impl TextRenderer {
    pub fn new(dims: Dimensions) -> Result<Self, MazeError> {
        let dims = Dimensions::new(dims.rows, dims.columns)?;
        match dims.area() {
            Some(area) => Ok(Self::blank(dims, area)),
            None => Err(MazeError::InvalidDimension {
                rows: dims.rows,
                columns: dims.columns,
            }),
        }
    }

    pub fn from_grid(grid: &WallGrid) -> Self {
        let mut renderer = Self::blank(grid.dims, grid.iter().count());
        renderer.sync_walls(grid);
        renderer
    }

    fn blank(dims: Dimensions, area: usize) -> Self {
        Self {
            walls: vec![Walls::CLOSED; area],
            trail: vec![None; area],
            dims,
            delay: None,
            echo: false,
            frames: 0,
        }
    }

    /// Pause between frames.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Print every frame to stdout as it is drawn.
    pub fn echo_frames(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Copies wall state for every cell the two grids share.
    pub fn sync_walls(&mut self, grid: &WallGrid) {
        for ((row, column), cell) in grid.iter() {
            if let Some(index) = self.index_of(row, column) {
                self.walls[index] = cell.walls;
            }
        }
    }

    pub fn clear_trail(&mut self) {
        for mark in self.trail.iter_mut() {
            *mark = None;
        }
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if self.dims.contains((row, column)) {
            Some((self.dims.columns * row) + column)
        } else {
            None
        }
    }

    fn mark(&mut self, (row, column): Coords, mark: char) {
        if let Some(index) = self.index_of(row, column) {
            self.trail[index] = Some(mark);
        }
    }

    /// `None` for unmarked and off-grid cells.
    pub fn mark_at(&self, row: usize, column: usize) -> Option<char> {
        self.index_of(row, column)
            .and_then(|index| self.trail.get(index).copied().flatten())
    }

    fn wall(&self, row: usize, column: usize, side: Direction) -> bool {
        self.index_of(row, column)
            .map_or(true, |index| self.walls[index].has(side))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for row in 0..self.dims.rows {
            for column in 0..self.dims.columns {
                out.push('+');
                out.push_str(if self.wall(row, column, Direction::Up) {
                    "---"
                } else {
                    "   "
                });
            }
            out.push_str("+\n");

            for column in 0..self.dims.columns {
                out.push(if self.wall(row, column, Direction::Left) {
                    '|'
                } else {
                    ' '
                });
                out.push(' ');
                out.push(self.mark_at(row, column).unwrap_or(' '));
                out.push(' ');
            }
            out.push(if self.wall(row, self.dims.columns - 1, Direction::Right) {
                '|'
            } else {
                ' '
            });
            out.push('\n');
        }

        let last_row = self.dims.rows - 1;
        for column in 0..self.dims.columns {
            out.push('+');
            out.push_str(if self.wall(last_row, column, Direction::Down) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        out
    }

    fn frame(&mut self) {
        self.frames += 1;
        if self.echo {
            println!("{}", self.render());
        }
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
    }
}

impl RenderObserver for TextRenderer {
    fn draw_cell(&mut self, (row, column): Coords, walls: Walls) {
        if let Some(index) = self.index_of(row, column) {
            self.walls[index] = walls;
        }
        self.frame();
    }

    fn draw_move(&mut self, from: Coords, to: Coords, is_backtrack: bool) {
        if is_backtrack {
            self.mark(to, DEAD_END_MARK);
        } else {
            self.mark(from, PATH_MARK);
            self.mark(to, PATH_MARK);
        }
    }

    fn animate(&mut self) {
        self.frame();
    }
}
