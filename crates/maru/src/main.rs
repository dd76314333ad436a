//! maru CLI - shikamaru docs portal.
//!
//! Provides commands for:
//! - `nav`: Print the ordered navigation list
//! - `pages`: Print the pages to generate
//! - `search`: Search titles and paths
//! - `toc`: Print the outline of a page
//! - `theme`: Show or change the persisted theme

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CommonArgs, NavArgs, PagesArgs, SearchArgs, ThemeArgs, TocArgs};
use output::Output;

/// maru - shikamaru docs portal.
#[derive(Parser)]
#[command(name = "maru", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ordered navigation list.
    Nav(NavArgs),
    /// Print the pages to generate.
    Pages(PagesArgs),
    /// Search document titles and paths.
    Search(SearchArgs),
    /// Print the table of contents of a page.
    Toc(TocArgs),
    /// Show or change the persisted theme.
    Theme(ThemeArgs),
}

impl Commands {
    fn common(&self) -> &CommonArgs {
        match self {
            Self::Nav(args) => &args.common,
            Self::Pages(args) => &args.common,
            Self::Search(args) => &args.common,
            Self::Toc(args) => &args.common,
            Self::Theme(args) => &args.common,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.common().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
        Commands::Search(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Theme(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_common_flags() {
        let cli = Cli::try_parse_from(["maru", "search", "ports", "--verbose", "-s", "docs"]).unwrap();
        assert!(cli.command.common().verbose);
        assert!(matches!(cli.command, Commands::Search(_)));
    }

    #[test]
    fn test_theme_flags_conflict() {
        assert!(Cli::try_parse_from(["maru", "theme", "--toggle", "--set", "dark"]).is_err());
        assert!(Cli::try_parse_from(["maru", "theme", "--set", "blue"]).is_err());
        assert!(Cli::try_parse_from(["maru", "theme", "--set", "light"]).is_ok());
    }
}
