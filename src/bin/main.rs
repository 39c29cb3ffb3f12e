use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use env_logger::Env;

use maxflow::algorithm::Algorithm;
use maxflow::data::network::FlowNetwork;
use maxflow::io::{import, import_solution};

/// Maximum flow in capacitated networks.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the network, in the DIMACS maximum flow format
    problem_file: PathBuf,
    /// Run only this algorithm instead of all of them
    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmArg>,
    /// File containing the known maximum flow value, as a line `s <value>`
    #[arg(short, long)]
    solution: Option<PathBuf>,
    /// Print the flow on every arc
    #[arg(long)]
    arcs: bool,
    /// Check that each computed flow is feasible and has the reported value
    #[arg(long)]
    verify: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum AlgorithmArg {
    EdmondsKarp,
    DinitzCherkassky,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(algorithm: AlgorithmArg) -> Self {
        match algorithm {
            AlgorithmArg::EdmondsKarp => Algorithm::EdmondsKarp,
            AlgorithmArg::DinitzCherkassky => Algorithm::DinitzCherkassky,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let opts = Opts::parse();

    match run(&opts) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Solve the instance with the selected algorithms.
///
/// # Return value
///
/// Whether all checks that were asked for passed.
fn run(opts: &Opts) -> Result<bool, Box<dyn Error>> {
    let network: FlowNetwork<u64> = import(&opts.problem_file)?;
    let expected = opts.solution.as_deref().map(import_solution::<u64>).transpose()?;
    println!(
        "\nNetwork instance: \"{}\" - |V| = {}, |E| = {}",
        opts.problem_file.display(), network.nr_vertices(), network.nr_arcs(),
    );

    // Dinitz-Cherkassky first, it is the faster one
    let algorithms = match opts.algorithm {
        Some(algorithm) => vec![algorithm.into()],
        None => vec![Algorithm::DinitzCherkassky, Algorithm::EdmondsKarp],
    };

    let mut success = true;
    for algorithm in algorithms {
        println!("\nAlgorithm: \"{algorithm}\"");
        let start = Instant::now();
        let flow = algorithm.solve(&network)?;
        println!("Maximum flow value: {}", flow.value);
        println!("Duration: {}ms", start.elapsed().as_millis());

        if opts.arcs {
            println!("Arcs flow/capacity:");
            for (arc, flow) in network.arcs().iter().zip(&flow.flow_arcs) {
                println!("    * ({},{}) {flow}/{}", arc.tail, arc.head, arc.capacity);
            }
        }
        if opts.verify {
            match flow.verify(&network) {
                Ok(()) => println!("Flow verified"),
                Err(error) => {
                    println!("Invalid flow: {error}");
                    success = false;
                }
            }
        }
        if let Some(expected) = expected {
            if flow.value == expected {
                println!("Matches the known value");
            } else {
                println!("Expected value {expected}");
                success = false;
            }
        }
    }

    Ok(success)
}
