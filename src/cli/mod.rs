mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use letterveil::HiderConfig;

use args::{CompressArgs, ConfigArgs, HideArgs, InspectArgs, RecoverArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "letterveil")]
#[command(version)]
#[command(about = "Hide text as a reversible sequence of capital letters", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hide text as a letter sequence
    Hide(HideArgs),
    /// Recover text from a letter sequence (compressed or not)
    Recover(RecoverArgs),
    /// Compress a letter sequence when that makes it shorter
    Compress(CompressArgs),
    /// Expand a compressed letter sequence
    Decompress(CompressArgs),
    /// Show the header of a letter sequence
    Inspect(InspectArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("letterveil=debug".parse()?),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let config = HiderConfig::load_with_overrides()?;
    tracing::debug!(
        checksum = config.settings.checksum(),
        compress = config.settings.compress(),
        "loaded settings"
    );

    match cli.command {
        Commands::Hide(args) => handlers::hide::handle(args, &cli.global, &config),
        Commands::Recover(args) => handlers::recover::handle(args, &cli.global, &config),
        Commands::Compress(args) => handlers::compress::compress(args, &cli.global, &config),
        Commands::Decompress(args) => handlers::compress::decompress(args, &cli.global, &config),
        Commands::Inspect(args) => handlers::inspect::handle(args, &cli.global, &config),
        Commands::Config(args) => handlers::config::handle(args, &config),
    }
}
