//! picalc CLI
//!
//! Approximates π with a circle-lattice count and the Leibniz series,
//! then prints both results.
//!
//! stdout carries only the three report lines; logs and errors go to stderr.

use clap::{CommandFactory, Parser as ClapParser};
use clap_complete::{Shell, generate};
use picalc_core::{PiError, Report, RunConfig};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "picalc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with a circle-lattice count and the Leibniz series", long_about = None)]
struct Cli {
    /// Iteration count for both methods (defaults to 1000000)
    #[arg(value_name = "ITERATIONS", allow_negative_numbers = true)]
    iterations: Option<String>,

    /// TOML config file supplying a default iteration count
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log timing and configuration details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        run_completions(shell);
        return;
    }

    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "picalc=debug,picalc_core=debug"
    } else {
        "picalc=warn,picalc_core=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "picalc", &mut io::stdout());
}

fn run(cli: &Cli) -> Result<(), PiError> {
    let config = match &cli.config {
        Some(path) => {
            let config = RunConfig::load(path)?;
            debug!(path = %path.display(), ?config, "loaded config file");
            config
        }
        None => RunConfig::new(),
    };

    let iterations = config.resolve_iterations(cli.iterations.as_deref())?;
    debug!(iterations, from_argument = cli.iterations.is_some(), "resolved iteration count");

    // Compute everything before printing so failures leave stdout empty
    let report = Report::compute(iterations);
    print!("{}", report);
    Ok(())
}
