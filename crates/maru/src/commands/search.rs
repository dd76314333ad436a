//! `maru search` command implementation.

use clap::Args;
use maru_site::NO_RESULTS;

use super::{CommonArgs, print_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Search text, matched against titles and paths.
    #[arg(default_value = "")]
    query: String,

    /// Print JSON instead of a list.
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    /// Print entries matching the query.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, site) = self.common.load_site(&output)?;
        let results = site.search(&self.query);

        if self.json {
            return print_json(&output, &results);
        }

        if results.is_empty() {
            output.warning(NO_RESULTS);
            return Ok(());
        }
        for entry in results {
            output.line_with_detail(&entry.title, &entry.path);
        }
        Ok(())
    }
}
