use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MazeError;
use crate::generators::backtracker::RecursiveBacktracker;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Coords;
use crate::renderer::{NoRender, RenderObserver};
use crate::solvers::dfs::DfsSolver;
use crate::solvers::Solver;

const DEFAULT_DIMS: (usize, usize) = (16, 16);

#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: usize,
    pub columns: usize,
    pub seed: u64,
    /// Defaults to the top left cell.
    pub start: Option<Coords>,
    /// Defaults to the bottom right cell.
    pub goal: Option<Coords>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMS.0,
            columns: DEFAULT_DIMS.1,
            seed: 0,
            start: None,
            goal: None,
        }
    }
}

impl MazeConfig {
    pub fn start(&self) -> Coords {
        self.start.unwrap_or((0, 0))
    }

    pub fn goal(&self) -> Coords {
        self.goal.unwrap_or((
            self.rows.saturating_sub(1),
            self.columns.saturating_sub(1),
        ))
    }
}

/// A carved maze ready to be solved.
pub struct Maze {
    pub grid: WallGrid,
    config: MazeConfig,
    generated: bool,
    path: Vec<Coords>,
}

impl Maze {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        Self::with_observer(config, &mut NoRender)
    }

    /// Builds the grid, opens entrance and exit, carves from the top left
    /// corner with a generator seeded from `config.seed` and clears the
    /// visit marks carving left behind.
    pub fn with_observer(
        config: MazeConfig,
        observer: &mut dyn RenderObserver,
    ) -> Result<Self, MazeError> {
        let mut grid = WallGrid::with_dims(config.rows, config.columns)?;
        grid.check_bounds(config.start())?;
        grid.check_bounds(config.goal())?;
        grid.break_entrance_and_exit();

        let rng = StdRng::seed_from_u64(config.seed);
        let mut generator = RecursiveBacktracker::new(&mut grid, (0, 0), rng)?;
        generator.generate_maze(&mut grid, observer);
        let generated = generator.is_done();
        if !generated {
            info!("maze left partially carved");
        }

        grid.reset_visited();

        Ok(Self {
            grid,
            config,
            generated,
            path: Vec::new(),
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Searches from the configured start to the configured goal. Marks from
    /// an earlier search are cleared first, so this can be called repeatedly.
    pub fn solve(&mut self, observer: &mut dyn RenderObserver) -> Result<bool, MazeError> {
        self.grid.reset_visited();

        let mut solver = DfsSolver::new(&self.grid, self.config.start(), self.config.goal())?;
        let solved = solver.solve_path(&mut self.grid, observer);
        self.path = if solved { solver.path() } else { Vec::new() };

        Ok(solved)
    }

    /// Path found by the last successful `solve`, start and goal included.
    pub fn path(&self) -> &[Coords] {
        &self.path
    }
}
