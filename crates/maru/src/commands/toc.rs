//! `maru toc` command implementation.

use clap::Args;

use super::{CommonArgs, print_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Page slug or path, e.g. `commands` or `/docs/commands`.
    slug: String,

    /// Print JSON instead of an outline.
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Print the rendered page body instead of the outline.
    #[arg(long)]
    html: bool,
}

impl TocArgs {
    /// Print the outline of one page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page does not exist or cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (_config, site) = self.common.load_site(&output)?;
        let page = site.render(&self.slug)?;

        if self.json {
            return print_json(&output, &page);
        }
        if self.html {
            output.line(&page.head);
            output.line(&page.html);
            return Ok(());
        }

        output.highlight(page.display_title.as_deref().unwrap_or(&page.path));
        for heading in &page.toc {
            let indent = if heading.level == 3 { "    " } else { "  " };
            output.line_with_detail(&format!("{indent}{}", heading.text), &format!("#{}", heading.id));
        }
        if let Some(previous) = &page.previous {
            output.info(&format!("Previous: {} ({})", previous.title, previous.path));
        }
        if let Some(next) = &page.next {
            output.info(&format!("Next: {} ({})", next.title, next.path));
        }
        Ok(())
    }
}
