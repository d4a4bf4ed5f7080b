use clap::Parser;
use eight_puzzle::search::{
    validate, Board, HeuristicName, SearchEngineName, SearchResult, Verbosity,
};
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve the 8-puzzle with breadth-first, greedy best-first or A* search.
struct Cli {
    #[arg(
        help = "The start board as nine tile values in row order with 0 for \
        the blank, e.g. \"1 2 3 4 5 6 7 0 8\". Omitted: scramble a random \
        solvable board."
    )]
    board: Option<String>,
    #[arg(
        help = "Number of random blank moves used to scramble a board",
        short = 's',
        long = "scramble",
        id = "STEPS",
        default_value_t = 20
    )]
    scramble_steps: usize,
    #[arg(help = "Seed for the scramble", long = "seed", id = "SEED")]
    seed: Option<u64>,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::Astar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use, ignored by bfs",
        long = "heuristic",
        id = "HEURISTIC",
        default_value_t = HeuristicName::Manhattan
    )]
    heuristic_name: HeuristicName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let board = match &cli.board {
        Some(text) => match text.parse::<Board>() {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Board::scrambled(cli.scramble_steps, &mut rng)
        }
    };

    println!("Start board:");
    print!("{board}");

    let heuristic = cli
        .search_engine_name
        .requires_heuristic()
        .then(|| cli.heuristic_name.create());

    let (result, statistics) = match cli.search_engine_name.search(&board, heuristic) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            if let Err(e) = validate(&plan, &board) {
                eprintln!("plan is invalid: {e}");
                return ExitCode::FAILURE;
            }

            if plan.is_empty() {
                println!("The start board is already the goal.");
            } else {
                println!("Solution: {plan}");
            }
            println!("Depth: {}", plan.len());
            println!("Nodes generated: {}", statistics.generated_nodes());
            println!("Nodes expanded: {}", statistics.expanded_nodes());
            let elapsed = Duration::from_millis(statistics.elapsed().as_millis() as u64);
            println!("Time: {}", humantime::format_duration(elapsed));
            ExitCode::SUCCESS
        }
        SearchResult::Exhausted => {
            println!("No solution found, the start board is unsolvable.");
            ExitCode::FAILURE
        }
    }
}
