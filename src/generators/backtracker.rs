use log::{debug, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::MazeError;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coords, Direction, Phase};
use crate::renderer::RenderObserver;

/// Randomized depth-first carving. The explicit stack mirrors the call stack
/// of the recursive formulation, so candidates are re-evaluated after every
/// return and the choices drawn from `rng` come out in the same order.
pub struct RecursiveBacktracker<R: Rng> {
    rng: R,
    stack: Vec<Coords>,
    carved: usize,
    pub done: bool,
}

impl<R: Rng> RecursiveBacktracker<R> {
    pub fn new(grid: &mut WallGrid, start: Coords, rng: R) -> Result<Self, MazeError> {
        grid.check_bounds(start)?;
        grid.mark_visited(start, Phase::Carving);

        Ok(Self {
            rng,
            stack: vec![start],
            carved: 0,
            done: false,
        })
    }

    pub fn carved(&self) -> usize {
        self.carved
    }

    fn candidates(grid: &WallGrid, current: Coords) -> Vec<Direction> {
        // moves across the outer boundary have no neighbour and drop out here
        Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| match grid.get_neighbor_coords_of(current, dir) {
                Some(next) => !grid.is_visited(next),
                None => false,
            })
            .collect()
    }
}

impl<R: Rng> Generator for RecursiveBacktracker<R> {
    fn step_generation(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver) {
        let current = match self.stack.last() {
            Some(&current) => current,
            None => {
                self.done = true;
                return;
            }
        };

        let candidates = Self::candidates(grid, current);
        match candidates.choose(&mut self.rng) {
            Some(&dir) => {
                if let Some(next) = grid.open_passage(current, dir) {
                    trace!("carve {:?} -> {:?} ({:?})", current, next, dir);
                    grid.mark_visited(next, Phase::Carving);
                    self.stack.push(next);
                    self.carved += 1;
                }
            }
            None => {
                observer.draw_cell(current, grid.get_cell(current.0, current.1).walls);
                self.stack.pop();
                if self.stack.is_empty() {
                    self.done = true;
                }
            }
        }
    }

    fn generate_maze(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver) {
        while !self.done {
            if observer.should_stop() {
                warn!(
                    "generation stopped early after carving {} passages",
                    self.carved
                );
                return;
            }
            self.step_generation(grid, observer);
        }

        debug!(
            "carved {} passages over {}x{} cells",
            self.carved, grid.dims.rows, grid.dims.columns
        );
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Carves a spanning tree into `grid` starting at `start`. Visit marks are
/// left in place; reset them before solving.
pub fn generate<R: Rng>(
    grid: &mut WallGrid,
    start: Coords,
    rng: R,
    observer: &mut dyn RenderObserver,
) -> Result<bool, MazeError> {
    let mut generator = RecursiveBacktracker::new(grid, start, rng)?;
    generator.generate_maze(grid, observer);

    Ok(generator.is_done())
}
