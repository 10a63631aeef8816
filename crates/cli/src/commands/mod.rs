use clap::Subcommand;
use reclaim_registry::CapacityPolicy;
use std::path::PathBuf;

pub mod numbers;
pub mod scenarios;

#[derive(Subcommand)]
pub enum Commands {
    /// Read a file of non-zero integers, one per line, and print them
    #[command(visible_alias = "n")]
    Numbers {
        /// File to read
        path: PathBuf,

        /// Maximum number of values the buffer holds
        #[arg(short, long, default_value_t = numbers::DEFAULT_SLOTS)]
        slots: usize,

        /// Registry capacity policy (fixed:N, growable or growable:N)
        #[arg(long, default_value_t = CapacityPolicy::growable())]
        policy: CapacityPolicy,
    },

    /// Run the canned success and failure scenarios
    #[command(visible_alias = "s")]
    Scenarios,
}
