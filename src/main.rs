use std::path::PathBuf;

use clap::{Args, CommandFactory as _, Parser, Subcommand};
use log::LevelFilter;
use thiserror::Error;

use dfsmaze::{
    logging,
    ser::{self, SerializeError},
    settings::{Settings, SettingsError},
    solve::{self, connectivity},
    AdjacencyGraph, Coord, DepthFirstSearch, MazeAlgorithm as _, Maze, MazeError, SolveError,
};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Generation(#[from] dfsmaze::maze::algorithms::GenError),
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "dfsmaze")]
struct Cli {
    #[clap(long, help = "Settings file, defaults to the user config directory")]
    config: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for more")]
    verbose: u8,
    #[clap(long, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct MazeArgs {
    #[clap(long)]
    rows: Option<usize>,
    #[clap(long)]
    cols: Option<usize>,
    #[clap(long, help = "Seed for reproducible generation")]
    seed: Option<u64>,
    #[clap(short, long, help = "Load a saved maze instead of generating one")]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and optionally save it
    Generate {
        #[clap(flatten)]
        maze: MazeArgs,
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that every cell can be reached from the start
    Validate {
        #[clap(flatten)]
        maze: MazeArgs,
    },
    /// Draw the maze as ASCII
    Render {
        #[clap(flatten)]
        maze: MazeArgs,
    },
    /// Find a path between two cells
    Solve {
        #[clap(flatten)]
        maze: MazeArgs,
        #[clap(long, value_parser = parse_coord, help = "Start cell as ROW,COL")]
        start: Option<Coord>,
        #[clap(long, value_parser = parse_coord, help = "Goal cell as ROW,COL")]
        goal: Option<Coord>,
    },
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let parse = |v: &str| v.trim().parse::<i32>().map_err(|e| e.to_string());
    Ok(Coord(parse(row)?, parse(col)?))
}

fn obtain_maze(args: &MazeArgs, settings: &Settings) -> Result<Maze, CliError> {
    if let Some(input) = &args.input {
        return Ok(ser::load(input)?);
    }

    let rows = args.rows.unwrap_or(settings.rows);
    let cols = args.cols.unwrap_or(settings.cols);
    let generated =
        DepthFirstSearch::generate(rows, cols, settings.start, args.seed.or(settings.seed))?;
    log::info!("generated {}x{} maze with seed {}", rows, cols, generated.seed);

    Ok(generated.maze)
}

fn run(command: Command, settings: &Settings) -> Result<(), CliError> {
    match command {
        Command::Generate { maze: args, output } => {
            let maze = obtain_maze(&args, settings)?;
            println!("Generated a {}x{} maze.", maze.rows(), maze.cols());
            if let Some(output) = output {
                ser::save(&maze, &output)?;
                println!("Saved to {}", output.display());
            }
        }
        Command::Validate { maze: args } => {
            let maze = obtain_maze(&args, settings)?;
            let (rows, cols) = maze.size();
            if connectivity::is_fully_connected(&maze, settings.start)? {
                println!("The {}x{} maze is fully connected (solvable).", rows, cols);
            } else {
                println!("The {}x{} maze is NOT fully connected.", rows, cols);
            }
        }
        Command::Render { maze: args } => {
            let maze = obtain_maze(&args, settings)?;
            print!("{}", maze);
        }
        Command::Solve {
            maze: args,
            start,
            goal,
        } => {
            let maze = obtain_maze(&args, settings)?;
            let start = start.unwrap_or(settings.start);
            let goal = goal.unwrap_or_else(|| settings.goal_for(maze.rows(), maze.cols()));

            let graph = AdjacencyGraph::from_maze(&maze);
            let path = solve::solve_backtrack(&graph, start, goal)?;
            if path.is_empty() {
                println!("No path from {} to {}.", start, goal);
                return Ok(());
            }

            print!("{}", maze.render(Some(&path)));
            let steps = solve::path_to_directions(&path)?
                .iter()
                .map(|step| step.to_string())
                .collect::<Vec<_>>();
            println!("{} steps: {}", steps.len(), steps.join(", "));
        }
    }

    Ok(())
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Settings::default_path);

    if cli.show_config_path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if cli.reset_config {
        Settings::reset_config(&config_path)?;
        return Ok(());
    }

    better_panic::install();

    let settings = Settings::load(&config_path)?;
    let level = match cli.verbose {
        0 => settings.log_level,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    logging::init(level)?;

    match cli.command {
        Some(command) => run(command, &settings),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
