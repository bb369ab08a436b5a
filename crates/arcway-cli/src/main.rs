#![forbid(unsafe_code)]

//! `aw` — load graph files, print canonical serializations, and run
//! shortest-path queries against any storage strategy.

mod cmd;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use cmd::Storage;
use output::OutputMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "arcway: directed weighted graphs and shortest paths",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Storage strategy backing the graph.
    #[arg(long, global = true, value_enum, default_value_t = Storage::AdjList)]
    storage: Storage,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Print a graph file in canonical form",
        after_help = "EXAMPLES:\n    # Canonicalize a graph file\n    aw show graphs/g-10-1.txt\n\n    # Machine-readable output\n    aw show graphs/g-10-1.txt --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        about = "Compute shortest paths from a source vertex",
        after_help = "EXAMPLES:\n    # Full distance table from A\n    aw route graph.txt A\n\n    # One route, with the reconstructed path\n    aw route graph.txt A H\n\n    # Use the file's trailing path query\n    aw route graph.txt\n\n    # Compare storage strategies\n    aw route graph.txt A --storage matrix"
    )]
    Route(cmd::route::RouteArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ARCWAY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose || env::var("DEBUG").is_ok());
    tracing::debug!(storage = ?cli.storage, "command parsed");

    let mode = cli.output_mode();
    match &cli.command {
        Commands::Show(args) => cmd::show::run_show(args, mode, cli.storage),
        Commands::Route(args) => cmd::route::run_route(args, mode, cli.storage),
    }
}
