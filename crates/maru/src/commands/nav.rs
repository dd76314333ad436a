//! `maru nav` command implementation.

use clap::Args;

use super::{CommonArgs, print_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print JSON instead of a list.
    #[arg(long)]
    json: bool,
}

impl NavArgs {
    /// Print the ordered navigation list.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, site) = self.common.load_site(&output)?;

        if self.json {
            return print_json(&output, site.navigation());
        }

        if site.index().is_fallback() {
            output.warning("No documents found, showing the static navigation list");
        }
        for entry in site.navigation() {
            output.line_with_detail(&format!("{:>5}  {}", entry.order, entry.title), &entry.path);
        }
        Ok(())
    }
}
