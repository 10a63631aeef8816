use crate::commands::{numbers, scenarios, Commands};
use reclaim_core::Result;
use reclaim_registry::RegistryConfig;
use std::process::ExitCode;

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Numbers {
                path,
                slots,
                policy,
            } => numbers::execute(&path, slots, &RegistryConfig { policy }),
            Commands::Scenarios => scenarios::execute(),
        }
    }

    /// Run the command, mapping any failure to a failing exit status.
    ///
    /// The failure has already been reported as a diagnostic where it was
    /// raised, so nothing more is printed here.
    pub fn run(self) -> ExitCode {
        match self.execute() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                ExitCode::FAILURE
            }
        }
    }
}
