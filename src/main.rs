use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use maze_backtrack::{Coords, Dimensions, Maze, MazeConfig, TextRenderer};

#[derive(Debug, Parser)]
#[command(about = "Carve a perfect maze and walk through it depth first")]
struct CliArgs {
    #[arg(long, default_value_t = 4)]
    rows: usize,
    #[arg(long, default_value_t = 3)]
    columns: usize,
    #[arg(long, default_value_t = 10)]
    seed: u64,
    /// Start cell as ROW,COL (top left by default)
    #[arg(long, value_parser = parse_coords)]
    start: Option<Coords>,
    /// Goal cell as ROW,COL (bottom right by default)
    #[arg(long, value_parser = parse_coords)]
    goal: Option<Coords>,
    /// Pause between drawn frames, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
    /// Print a frame for every draw event
    #[arg(long)]
    animate: bool,
    #[arg(long)]
    no_solve: bool,
}

fn parse_coords(s: &str) -> Result<Coords, String> {
    let (row, column) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, given {}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row({}): {}", row, e))?;
    let column = column
        .trim()
        .parse()
        .map_err(|e| format!("invalid column({}): {}", column, e))?;

    Ok((row, column))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let config = MazeConfig {
        rows: args.rows,
        columns: args.columns,
        seed: args.seed,
        start: args.start,
        goal: args.goal,
    };

    let mut renderer = TextRenderer::new(Dimensions {
        rows: config.rows,
        columns: config.columns,
    })
    .with_context(|| {
        format!(
            "Failed to build a {}x{} maze with seed {}.",
            args.rows, args.columns, args.seed
        )
    })?
    .echo_frames(args.animate);
    if args.delay_ms > 0 {
        renderer = renderer.with_delay(Duration::from_millis(args.delay_ms));
    }

    let mut maze = Maze::with_observer(config, &mut renderer).with_context(|| {
        format!(
            "Failed to build a {}x{} maze with seed {}.",
            args.rows, args.columns, args.seed
        )
    })?;

    if args.no_solve {
        println!("{}", renderer.render());
        return Ok(());
    }

    let solved = maze
        .solve(&mut renderer)
        .context("Failed to solve the maze.")?;
    println!("{}", renderer.render());
    if solved {
        println!("maze solved in {} steps", maze.path().len() - 1);
    } else {
        println!("maze cannot be solved");
    }

    Ok(())
}
