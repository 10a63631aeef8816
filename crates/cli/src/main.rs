use clap::Parser;
use reclaim::Commands;
use reclaim_utils::{DiagnosticsConfig, Verbosity};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "reclaim")]
#[command(about = "Registry-backed cleanup on failure paths", long_about = None)]
#[command(version)]
struct Cli {
    /// Diagnostic threshold (none, failure, warning, info)
    #[arg(short, long, global = true)]
    verbosity: Option<Verbosity>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config = DiagnosticsConfig::from_env()?.with_override(cli.verbosity);
    reclaim_utils::tracing::init(&config).map_err(|e| eyre::eyre!(e))?;

    Ok(cli.command.run())
}
