use log::{debug, trace, warn};

use crate::error::MazeError;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Coords, Direction, Phase};
use crate::renderer::RenderObserver;
use crate::solvers::Solver;

struct Frame {
    cell: Coords,
    // index into Direction::ALL of the next side to try
    next: usize,
}

/// Depth-first search from `start` to `goal` over open, unvisited passages.
/// Each frame on the stack stands for one level of the recursive search, so
/// directions are tried in the order Up, Down, Left, Right at every cell.
pub struct DfsSolver {
    start: Coords,
    goal: Coords,

    stack: Vec<Frame>,
    started: bool,
    outcome: Option<bool>,

    pub forward_moves: usize,
    pub backtracks: usize,
}

impl DfsSolver {
    pub fn new(grid: &WallGrid, start: Coords, goal: Coords) -> Result<Self, MazeError> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;

        let carving = grid.count_visited(Phase::Carving);
        let solving = grid.count_visited(Phase::Solving);
        if carving + solving > 0 {
            debug!(
                "refusing to solve with {} carving and {} solving marks left",
                carving, solving
            );
            return Err(MazeError::VisitedNotReset);
        }

        Ok(Self {
            start,
            goal,
            stack: Vec::new(),
            started: false,
            outcome: None,
            forward_moves: 0,
            backtracks: 0,
        })
    }

    /// Cells from the start to the current search head. Once solved this is
    /// the path to the goal.
    pub fn path(&self) -> Vec<Coords> {
        self.stack.iter().map(|frame| frame.cell).collect()
    }

    /// `None` while the search is still running.
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }

    fn enter(&mut self, grid: &mut WallGrid, cell: Coords, observer: &mut dyn RenderObserver) {
        grid.mark_visited(cell, Phase::Solving);
        observer.animate();
        self.stack.push(Frame { cell, next: 0 });

        if cell == self.goal {
            self.outcome = Some(true);
        }
    }
}

impl Solver for DfsSolver {
    fn step_solve(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver) -> bool {
        if self.outcome.is_some() {
            return false;
        }

        if !self.started {
            self.started = true;
            self.enter(grid, self.start, observer);
            return self.outcome.is_none();
        }

        let frame = match self.stack.last_mut() {
            Some(frame) => frame,
            None => {
                self.outcome = Some(false);
                return false;
            }
        };

        let current = frame.cell;
        let mut forward = None;
        while frame.next < Direction::ALL.len() {
            let dir = Direction::from(frame.next);
            frame.next += 1;
            if grid.can_pass(current, dir) {
                forward = grid.get_neighbor_coords_of(current, dir);
                break;
            }
        }

        match forward {
            Some(next) => {
                trace!("move {:?} -> {:?}", current, next);
                self.forward_moves += 1;
                observer.draw_move(current, next, false);
                self.enter(grid, next, observer);
            }
            None => {
                self.stack.pop();
                match self.stack.last() {
                    Some(parent) => {
                        trace!("undo {:?} -> {:?}", parent.cell, current);
                        self.backtracks += 1;
                        observer.draw_move(parent.cell, current, true);
                    }
                    None => self.outcome = Some(false),
                }
            }
        }

        self.outcome.is_none()
    }

    fn solve_path(&mut self, grid: &mut WallGrid, observer: &mut dyn RenderObserver) -> bool {
        loop {
            if observer.should_stop() {
                warn!(
                    "search stopped early after {} moves",
                    self.forward_moves + self.backtracks
                );
                return false;
            }
            if !self.step_solve(grid, observer) {
                break;
            }
        }

        debug!(
            "search from {:?} to {:?} finished: found={:?}, {} moves, {} backtracks",
            self.start, self.goal, self.outcome, self.forward_moves, self.backtracks
        );

        self.is_solved()
    }

    fn is_solved(&self) -> bool {
        self.outcome == Some(true)
    }
}

/// Runs a full search. `Ok(false)` means there is no open path, which is a
/// normal outcome rather than an error.
pub fn solve(
    grid: &mut WallGrid,
    start: Coords,
    goal: Coords,
    observer: &mut dyn RenderObserver,
) -> Result<bool, MazeError> {
    let mut solver = DfsSolver::new(grid, start, goal)?;
    Ok(solver.solve_path(grid, observer))
}

#[cfg(test)]
mod test_dfs {
    use super::*;
    use crate::generators::backtracker::generate;
    use crate::grids::wall_grid::Walls;
    use crate::renderer::NoRender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct MoveLog {
        moves: Vec<(Coords, Coords, bool)>,
        entered: usize,
    }

    impl RenderObserver for MoveLog {
        fn draw_cell(&mut self, _cell: Coords, _walls: Walls) {}

        fn draw_move(&mut self, from: Coords, to: Coords, is_backtrack: bool) {
            self.moves.push((from, to, is_backtrack));
        }

        fn animate(&mut self) {
            self.entered += 1;
        }
    }

    fn two_by_two() -> WallGrid {
        let mut grid = WallGrid::with_dims(2, 2).unwrap();
        grid.open_passage((0, 0), Direction::Right);
        grid.open_passage((0, 1), Direction::Down);
        grid
    }

    #[test]
    fn finds_path_through_corridor() {
        let mut grid = two_by_two();
        let mut solver = DfsSolver::new(&grid, (0, 0), (1, 1)).unwrap();
        let mut log = MoveLog::default();

        assert!(solver.solve_path(&mut grid, &mut log));
        assert_eq!(solver.path(), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(
            log.moves,
            vec![((0, 0), (0, 1), false), ((0, 1), (1, 1), false)]
        );
        assert_eq!(log.entered, 3);
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let mut grid = two_by_two();
        let mut log = MoveLog::default();

        assert_eq!(solve(&mut grid, (0, 0), (1, 0), &mut log), Ok(false));
        assert_eq!(
            log.moves,
            vec![
                ((0, 0), (0, 1), false),
                ((0, 1), (1, 1), false),
                ((0, 1), (1, 1), true),
                ((0, 0), (0, 1), true),
            ]
        );
        assert_eq!(grid.count_visited(Phase::Solving), 3);
        assert!(!grid.is_visited((1, 0)));
    }

    #[test]
    fn single_cell_is_solved_without_moving() {
        let mut grid = WallGrid::with_dims(1, 1).unwrap();
        let mut solver = DfsSolver::new(&grid, (0, 0), (0, 0)).unwrap();
        let mut log = MoveLog::default();

        assert!(solver.solve_path(&mut grid, &mut log));
        assert!(log.moves.is_empty());
        assert_eq!(solver.path(), vec![(0, 0)]);
        assert_eq!(solver.forward_moves + solver.backtracks, 0);
    }

    #[test]
    fn stops_at_goal_without_exploring_further() {
        // straight corridor, goal in the middle
        let mut grid = WallGrid::with_dims(1, 4).unwrap();
        for column in 0..3 {
            grid.open_passage((0, column), Direction::Right);
        }

        assert_eq!(solve(&mut grid, (0, 0), (0, 1), &mut NoRender), Ok(true));
        assert!(!grid.is_visited((0, 2)));
        assert!(!grid.is_visited((0, 3)));
    }

    #[test]
    fn closed_goal_on_generated_maze_is_unreachable() {
        let mut grid = WallGrid::with_dims(4, 4).unwrap();
        grid.break_entrance_and_exit();
        generate(&mut grid, (0, 0), StdRng::seed_from_u64(3), &mut NoRender).unwrap();
        grid.reset_visited();

        // seal the goal back up on all four sides
        let goal = (3, 3);
        for &dir in Direction::ALL.iter() {
            grid.close_passage(goal, dir);
        }
        assert!(Direction::ALL.iter().all(|&dir| grid.get_cell(3, 3).walls.has(dir)));

        assert_eq!(solve(&mut grid, (0, 0), goal, &mut NoRender), Ok(false));
        assert!(!grid.is_visited(goal));
        assert!(grid.is_visited((0, 0)));
    }

    #[test]
    fn generated_mazes_are_solvable() {
        for rows in 1..=8 {
            for columns in 1..=8 {
                for seed in 0..4 {
                    let mut grid = WallGrid::with_dims(rows, columns).unwrap();
                    grid.break_entrance_and_exit();
                    generate(&mut grid, (0, 0), StdRng::seed_from_u64(seed), &mut NoRender)
                        .unwrap();
                    grid.reset_visited();

                    let goal = (rows - 1, columns - 1);
                    let mut solver = DfsSolver::new(&grid, (0, 0), goal).unwrap();
                    assert!(solver.solve_path(&mut grid, &mut NoRender));

                    let path = solver.path();
                    assert_eq!(path.first(), Some(&(0, 0)));
                    assert_eq!(path.last(), Some(&goal));
                }
            }
        }
    }

    #[test]
    fn refuses_grid_with_leftover_marks() {
        let mut grid = WallGrid::with_dims(3, 3).unwrap();
        generate(&mut grid, (0, 0), StdRng::seed_from_u64(0), &mut NoRender).unwrap();

        assert!(matches!(
            DfsSolver::new(&grid, (0, 0), (2, 2)),
            Err(MazeError::VisitedNotReset)
        ));

        grid.reset_visited();
        assert!(DfsSolver::new(&grid, (0, 0), (2, 2)).is_ok());
    }

    #[test]
    fn refuses_endpoints_outside_grid() {
        let grid = WallGrid::with_dims(3, 3).unwrap();
        assert_eq!(
            DfsSolver::new(&grid, (0, 3), (2, 2)).err(),
            Some(MazeError::OutOfBounds { row: 0, column: 3 })
        );
        assert!(DfsSolver::new(&grid, (0, 0), (3, 0)).is_err());
    }

    #[test]
    fn stepping_reports_progress_until_done() {
        let mut grid = two_by_two();
        let mut solver = DfsSolver::new(&grid, (0, 0), (1, 0)).unwrap();

        let mut steps = 0;
        while solver.step_solve(&mut grid, &mut NoRender) {
            assert_eq!(solver.outcome(), None);
            steps += 1;
        }

        assert_eq!(solver.outcome(), Some(false));
        assert!(!solver.is_solved());
        // enter start, two moves in, two undos; popping the start cell ends it
        assert_eq!(steps, 5);
        assert!(!solver.step_solve(&mut grid, &mut NoRender));
    }

    struct StopNow;

    impl RenderObserver for StopNow {
        fn draw_cell(&mut self, _cell: Coords, _walls: Walls) {}

        fn draw_move(&mut self, _from: Coords, _to: Coords, _is_backtrack: bool) {}

        fn should_stop(&self) -> bool {
            true
        }
    }

    #[test]
    fn stop_request_returns_incomplete() {
        let mut grid = two_by_two();
        let mut solver = DfsSolver::new(&grid, (0, 0), (1, 1)).unwrap();

        assert!(!solver.solve_path(&mut grid, &mut StopNow));
        assert_eq!(solver.outcome(), None);
        assert_eq!(grid.count_visited(Phase::Solving), 0);
    }
}
