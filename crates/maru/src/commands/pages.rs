//! `maru pages` command implementation.

use clap::Args;

use super::{CommonArgs, print_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print JSON instead of a list.
    #[arg(long)]
    json: bool,
}

impl PagesArgs {
    /// Print one line per page to generate.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, site) = self.common.load_site(&output)?;

        if self.json {
            return print_json(&output, site.pages());
        }

        for page in site.pages() {
            output.line_with_detail(&page.path, &page.id);
        }
        output.success(&format!("{} page(s)", site.pages().len()));
        Ok(())
    }
}
