use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use graph_rs::Graph;
use log::{error, info};
use travbench::{
    Error,
    bench::{self, Algorithm, default_targets},
    input::{self, DEFAULT_INPUT, DEFAULT_NODE_COUNT},
    report::{self, Measurement, Table},
};

/// Compare DFS and BFS on a directed graph read from an edge list.
#[derive(Parser)]
struct Cli {
    /// Edge list with one `N_<source>,N_<target>` edge per line.
    #[arg(default_value = DEFAULT_INPUT)]
    in_file: PathBuf,

    /// Number of nodes in the graph.
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_NODE_COUNT)]
    nodes: usize,

    /// Node every traversal starts from.
    #[arg(short, long, value_name = "NODE", default_value_t = 0)]
    start: usize,

    /// Measure only this algorithm for `--target` instead of printing the
    /// comparison table.
    #[arg(short, long, value_enum, requires = "target")]
    algorithm: Option<Algorithm>,

    /// Target node for `--algorithm`.
    #[arg(short, long, value_name = "NODE", requires = "algorithm")]
    target: Option<usize>,

    /// Run the (start, target) pairs on the rayon thread pool.
    #[arg(short, long)]
    parallel: bool,

    /// Print the results as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Print the adjacency list before the results.
    #[arg(long)]
    print_graph: bool,
}

fn run(cli: Cli) -> Result<(), Error> {
    let graph = input::load_graph(&cli.in_file, cli.nodes)?;
    graph.check_node(cli.start)?;

    if cli.print_graph {
        print!("{graph}");
    }

    if let (Some(algorithm), Some(target)) = (cli.algorithm, cli.target) {
        let result = bench::measure(algorithm, cli.start, target, &graph)?;
        let measurement = Measurement::new(algorithm, cli.start, target, &result);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&measurement)?);
        } else {
            println!("{measurement}");
        }
        return Ok(());
    }

    let targets: Vec<usize> = default_targets(graph.node_count()).collect();

    let start_time = Instant::now();
    let comparisons = bench::compare_all(cli.start, &targets, &graph, cli.parallel)?;
    info!(
        "Compared {} targets from node {} in {:?}",
        comparisons.len(),
        cli.start,
        start_time.elapsed()
    );

    if cli.json {
        println!("{}", report::json(&comparisons)?);
    } else {
        print!("{}", Table(&comparisons));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
