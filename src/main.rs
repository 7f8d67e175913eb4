use std::{fs::File, io::BufReader, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use tsort::prelude::*;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Depth first search over an adjacency matrix
    Dfs,
    /// Removal of nodes without incoming edges over an adjacency list
    Removal,
}

/// Prints a dependency respecting order of the nodes in a schedule file.
#[derive(Parser, Debug)]
#[command(name = "tsort", version)]
struct Cli {
    /// Schedule file to read
    path: PathBuf,

    /// Sorting algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::Dfs)]
    algorithm: Algorithm,

    /// Node the depth first search starts from (defaults to the first declared node)
    #[arg(short, long)]
    start: Option<String>,

    /// Increase log verbosity, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let file = File::open(&cli.path)?;
    let graph = read_schedule(BufReader::new(file))?;

    let order = match cli.algorithm {
        Algorithm::Dfs => match (&cli.start, graph.name(0)) {
            (Some(start), _) => graph.sort_dfs(start)?,
            (None, Some(first)) => graph.sort_dfs(first)?,
            (None, None) => graph.resolve(&[]),
        },
        Algorithm::Removal => graph.sort_removal()?,
    };

    Ok(order.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(order) => {
            println!("{order}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
