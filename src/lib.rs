pub mod error;
pub mod generators;
pub mod grids;
pub mod maze;
pub mod renderer;
pub mod solvers;

pub use error::MazeError;
pub use generators::backtracker::{generate, RecursiveBacktracker};
pub use generators::Generator;
pub use grids::wall_grid::{Cell, WallGrid, Walls};
pub use grids::{Coords, Dimensions, Direction, Phase};
pub use maze::{Maze, MazeConfig};
pub use renderer::{NoRender, RenderObserver, TextRenderer};
pub use solvers::dfs::{solve, DfsSolver};
pub use solvers::Solver;
