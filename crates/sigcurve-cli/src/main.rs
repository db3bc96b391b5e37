// crates/sigcurve-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "sigcurve")]
#[command(about = "Linearize multi-signal samples with Morton / Hilbert curves", long_about = None)]
pub struct Cli {
    /// Raise the default log level to debug (RUST_LOG still wins)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode an integer coordinate table into curve indices
    Encode(cmd::encode::EncodeArgs),

    /// Inspect a .sfc container (magic/crc, parameters, digest)
    Inspect(cmd::inspect::InspectArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
