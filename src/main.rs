use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use nutsort::config::SolverConfig;
use nutsort::constants::DEFAULT_DEAL_ATTEMPTS;
use nutsort::errors::SolverError;
use nutsort::game::{GoalRule, State};
use nutsort::instance::{self, FileLedger, InstanceLedger, MemoryLedger};
use nutsort::solver::solutions::{replay, store_solution, SolutionRecord};
use nutsort::solver::{solve_checked, Algorithm, Report};

/// Solver for the nut sort puzzle.
#[derive(Parser, Debug)]
#[command(name = "nutsort", version)]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve one puzzle
    Solve(SolveArgs),
    /// Run every algorithm on the same puzzles
    Compare(CompareArgs),
    /// Produce new puzzles as JSON
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Maximum number of states to expand
    #[arg(short, long)]
    max_expansions: Option<u64>,

    /// Which states count as sorted
    #[arg(short, long, value_enum)]
    goal: Option<GoalRule>,
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Puzzle in `RGB|GG|` notation, or a path to a JSON puzzle file
    puzzle: String,

    #[arg(short, long, value_enum)]
    algorithm: Option<Algorithm>,

    #[command(flatten)]
    search: SearchArgs,

    /// Print every intermediate state
    #[arg(short, long)]
    show: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Store the puzzle and its report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Puzzles in notation or JSON files; scrambles are generated when empty
    puzzles: Vec<String>,

    #[command(flatten)]
    search: SearchArgs,

    #[command(flatten)]
    shape: ShapeArgs,

    /// Number of scrambled puzzles to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,
}

#[derive(Args, Debug)]
struct ShapeArgs {
    /// Number of colors
    #[arg(long, default_value_t = 3)]
    colors: usize,

    /// Tube capacity, the configured one by default
    #[arg(long)]
    capacity: Option<usize>,

    /// Empty tubes added to scrambled puzzles
    #[arg(long, default_value_t = 1)]
    buffers: usize,

    /// Reverse moves played by a scramble
    #[arg(long, default_value_t = 20)]
    moves: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Random full tubes and one buffer, not always solvable
    Deal,
    /// Random walk back from a sorted state, always solvable
    Scramble,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, value_enum, default_value_t = Mode::Deal)]
    mode: Mode,

    #[command(flatten)]
    shape: ShapeArgs,

    /// Number of puzzles to produce
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Ledger of puzzles already served; deals skip puzzles it holds
    #[arg(long)]
    ledger: Option<PathBuf>,
}

fn main() -> Result<(), SolverError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SolverConfig::load_or_default(path)?,
        None => SolverConfig::default(),
    };
    match cli.command {
        Command::Solve(args) => run_solve(config, args),
        Command::Compare(args) => run_compare(config, args),
        Command::Generate(args) => run_generate(config, args),
    }
}

fn apply_search_args(mut config: SolverConfig, search: &SearchArgs) -> Result<SolverConfig, SolverError> {
    if let Some(max_expansions) = search.max_expansions {
        config.max_expansions = max_expansions;
    }
    if let Some(goal) = search.goal {
        config.goal = goal;
    }
    config.validate()?;
    return Ok(config);
}

fn run_solve(config: SolverConfig, args: SolveArgs) -> Result<(), SolverError> {
    let mut config = apply_search_args(config, &args.search)?;
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    let start = instance::load_puzzle(&args.puzzle)?;
    let now = Instant::now();
    let report = solve_checked(&start, None, &config)?;
    let elapsed = now.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", start);
        println!("{}", report.outcome.to_string().as_str().bold());
        println!("{}", report.stats);
        println!("took {:.3} seconds", elapsed.as_secs_f64());
        if let Some(moves) = report.moves() {
            if args.show {
                let states = replay(&start, moves)?;
                for (mv, state) in moves.iter().zip(states.iter().skip(1)) {
                    println!("{:>8}  {}", mv.to_string(), state);
                }
            } else {
                let listing: Vec<String> = moves.iter().map(|mv| mv.to_string()).collect();
                println!("{}", listing.join(" "));
            }
        }
    }
    if let Some(path) = args.output {
        store_solution(&path, &SolutionRecord { start, report })?;
    }
    return Ok(());
}

fn rng_for(seed: Option<u64>) -> Pcg64Mcg {
    match seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_entropy(),
    }
}

fn run_compare(config: SolverConfig, args: CompareArgs) -> Result<(), SolverError> {
    let config = apply_search_args(config, &args.search)?;
    let puzzles: Vec<State> = if args.puzzles.is_empty() {
        let colors = instance::standard_colors(args.shape.colors)?;
        let capacity = args.shape.capacity.unwrap_or(config.capacity);
        let mut rng = rng_for(args.shape.seed);
        (0..args.count)
            .map(|_| instance::scramble(&colors, capacity, args.shape.buffers, args.shape.moves, &mut rng))
            .collect()
    } else {
        args.puzzles
            .iter()
            .map(|puzzle| instance::load_puzzle(puzzle))
            .collect::<Result<_, _>>()?
    };

    println!(
        "{:<24} {:<18} {:<40} {:>10} {:>6} {:>10} {:>9}",
        "puzzle", "algorithm", "outcome", "expanded", "depth", "pruned", "seconds"
    );
    for start in puzzles.iter() {
        for algorithm in Algorithm::ALL {
            let run = SolverConfig {
                algorithm,
                ..config.clone()
            };
            let now = Instant::now();
            let report: Report = solve_checked(start, None, &run)?;
            println!(
                "{:<24} {:<18} {:<40} {:>10} {:>6} {:>10} {:>9.3}",
                start.notation(),
                algorithm.name(),
                report.outcome.to_string(),
                report.stats.expanded,
                report.stats.max_depth,
                report.stats.pruned,
                now.elapsed().as_secs_f64()
            );
        }
    }
    return Ok(());
}

fn run_generate(config: SolverConfig, args: GenerateArgs) -> Result<(), SolverError> {
    let colors = instance::standard_colors(args.shape.colors)?;
    let capacity = args.shape.capacity.unwrap_or(config.capacity);
    let mut rng = rng_for(args.shape.seed);
    let mut ledger: Box<dyn InstanceLedger> = match &args.ledger {
        Some(path) => Box::new(FileLedger::open(path)?),
        None => Box::new(MemoryLedger::new()),
    };

    let mut generated = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let state = match args.mode {
            Mode::Deal => {
                match instance::fresh_deal(&colors, capacity, ledger.as_mut(), DEFAULT_DEAL_ATTEMPTS, &mut rng)? {
                    Some(state) => state,
                    None => break,
                }
            }
            Mode::Scramble => {
                let state = instance::scramble(&colors, capacity, args.shape.buffers, args.shape.moves, &mut rng);
                ledger.record(&state)?;
                state
            }
        };
        generated.push(state);
    }
    println!("{}", serde_json::to_string_pretty(&generated)?);
    return Ok(());
}
