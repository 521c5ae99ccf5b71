use clap::{Parser, Subcommand};

use greeting_service::diagnostics::{DiagnosticStrategy, OperatorDebug};
use greeting_service::harness::{self, SecondSource, SystemClock};
use greeting_service::http::GreetingClient;
use greeting_service::observability::logging;
use greeting_service::pipeline::{GreetingPipeline, NamePair};

#[derive(Parser)]
#[command(name = "greeting-cli")]
#[command(about = "Client and diagnostics tool for the greeting service", long_about = None)]
struct Cli {
    /// Log pipeline and harness signals to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a running service for a greeting
    Greet {
        first_name: String,
        last_name: String,
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Run the greeting pipeline in-process
    Pipeline {
        first_name: String,
        last_name: String,
        /// Capture operator call sites
        #[arg(long)]
        trace: bool,
        /// Skip stage checkpoints
        #[arg(long)]
        no_checkpoints: bool,
    },
    /// Run the branch-selection harness
    Diagnose {
        /// silent, logged, traced or checkpointed
        #[arg(short, long, default_value = "silent")]
        strategy: DiagnosticStrategy,
        /// Use this second instead of the wall clock
        #[arg(long)]
        second: Option<u32>,
        /// Run every strategy
        #[arg(long, conflicts_with = "strategy")]
        all: bool,
        /// Run on a dedicated worker thread
        #[arg(long)]
        worker: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logging(cli.verbose);

    match cli.command {
        Commands::Greet { first_name, last_name, url } => {
            let (status, body) = GreetingClient::new(url).greet(&first_name, &last_name).await?;
            if status.is_success() {
                println!("{}", body);
            } else {
                eprintln!("Error: service returned status {}", status);
                eprintln!("Response: {}", body);
                std::process::exit(1);
            }
        }
        Commands::Pipeline { first_name, last_name, trace, no_checkpoints } => {
            let pipeline = GreetingPipeline::new(!no_checkpoints);
            let pair = NamePair::new(first_name, last_name);
            let result = if trace {
                let _debug = OperatorDebug::enable();
                pipeline.greet(pair)
            } else {
                pipeline.greet(pair)
            };
            match result {
                Ok(greeting) => println!("{}", greeting),
                Err(err) => {
                    eprintln!("{}", err.render());
                    std::process::exit(1);
                }
            }
        }
        Commands::Diagnose { strategy, second, all, worker } => {
            let second = second.unwrap_or_else(|| SystemClock.current_second());
            let strategies: Vec<DiagnosticStrategy> = if all {
                DiagnosticStrategy::ALL.to_vec()
            } else {
                vec![strategy]
            };

            for strategy in strategies {
                let report = if worker {
                    harness::run_on_worker(second, strategy)?
                } else {
                    harness::run(second, strategy)
                };
                println!("{}\n", report.render());
            }
        }
    }

    Ok(())
}
