pub mod backtracker;

use crate::grids::wall_grid::WallGrid;
use crate::renderer::RenderObserver;

pub trait Generator {
    fn step_generation(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver);
    fn generate_maze(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver);
    fn is_done(&self) -> bool;
}
