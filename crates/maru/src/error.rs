//! CLI error types.

use maru_config::ConfigError;
use maru_prefs::PrefsError;
use maru_site::SiteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Prefs(#[from] PrefsError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
