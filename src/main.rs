//! KLE Placer - decode Keyboard Layout Editor layouts and place switch footprints
//!
//! Reads a KLE layout, decodes every key, and prints the rigid transform a CAD
//! host needs to instantiate one switch footprint per key.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kleplacer::cli::{ConfigArgs, DecodeArgs, ExitCode, PlaceArgs};
use kleplacer::constants::APP_BINARY_NAME;

/// KLE Placer - decode KLE layouts and compute switch footprint placements
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a KLE layout into absolute key positions
    Decode(DecodeArgs),
    /// Compute footprint placement transforms for a KLE layout
    Place(PlaceArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Decode(args) => args.execute(),
        Command::Place(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
