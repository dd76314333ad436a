//! CLI command implementations.

pub(crate) mod nav;
pub(crate) mod pages;
pub(crate) mod search;
pub(crate) mod theme;
pub(crate) mod toc;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use maru_config::{CliSettings, Config};
use maru_content::FsContentSource;
use maru_site::{NavigationEntry, Site, SiteMeta, SiteOptions};
use maru_ui::pre_paint_script;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use nav::NavArgs;
pub(crate) use pages::PagesArgs;
pub(crate) use search::SearchArgs;
pub(crate) use theme::ThemeArgs;
pub(crate) use toc::TocArgs;

/// Flags shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover maru.toml).
    #[arg(short, long, env = "MARU_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Preference file (overrides config).
    #[arg(long)]
    prefs_file: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            prefs_file: self.prefs_file.clone(),
            max_results: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }

    /// Load configuration and the docs site it points at.
    pub(crate) fn load_site(&self, output: &Output) -> Result<(Config, Site), CliError> {
        let config = self.load_config()?;
        if self.verbose {
            output.info(&format!(
                "Source directory: {}",
                config.docs_resolved.source_dir.display()
            ));
        }
        let source = Arc::new(FsContentSource::new(&config.docs_resolved.source_dir));
        let site = Site::load(source, site_options(&config))?;
        Ok((config, site))
    }
}

/// Site options derived from configuration. Unset navigation values keep
/// the site defaults.
pub(crate) fn site_options(config: &Config) -> SiteOptions {
    let defaults = SiteOptions::default();
    let default_order = config.navigation.default_order.unwrap_or(defaults.default_order);
    let static_nav = match &config.navigation.fallback {
        Some(fallback) => fallback
            .iter()
            .map(|e| NavigationEntry::new(&e.title, &e.path, default_order))
            .collect(),
        None => defaults.static_nav,
    };

    SiteOptions {
        default_order,
        static_nav,
        max_results: config.search.max_results,
        meta: SiteMeta {
            title: config.site.title.clone(),
            name: config.site.name.clone(),
            url: config.site.url.clone(),
            description: config.site.description.clone(),
            author: config.site.author.clone(),
            image: config.site.image.clone(),
        },
        head_scripts: vec![pre_paint_script()],
    }
}

/// Print `value` as pretty JSON.
pub(crate) fn print_json<T: serde::Serialize + ?Sized>(
    output: &Output,
    value: &T,
) -> Result<(), CliError> {
    output.line(&serde_json::to_string_pretty(value)?);
    Ok(())
}
