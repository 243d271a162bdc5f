pub mod dfs;

use crate::grids::wall_grid::WallGrid;
use crate::renderer::RenderObserver;

pub trait Solver {
    /// Advances the search by one move. Returns false once there is nothing
    /// left to do.
    fn step_solve(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver) -> bool;
    fn solve_path(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver) -> bool;
    fn is_solved(&self) -> bool;
}
