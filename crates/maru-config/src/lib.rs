//! Configuration management for the shikamaru docs portal.
//!
//! Parses `maru.toml` with serde and discovers the file in the current
//! directory or any parent. CLI overrides are applied during load via
//! [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.url` supports `${VAR}` and `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "maru.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the preference store file.
    pub prefs_file: Option<PathBuf>,
    /// Override the search result cap.
    pub max_results: Option<usize>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata used for SEO tags.
    pub site: SiteConfig,
    /// Documentation paths as written in TOML.
    docs: DocsConfigRaw,
    /// Search settings.
    pub search: SearchConfig,
    /// Navigation settings, including the static fallback list.
    pub navigation: NavigationConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Title used when a page has none.
    pub title: String,
    /// Short product name appended to page titles.
    pub name: String,
    /// Canonical site URL.
    pub url: String,
    /// Default description.
    pub description: String,
    /// Author handle.
    pub author: String,
    /// Social preview image path.
    pub image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "shikamaru CLI".to_owned(),
            name: "shikamaru".to_owned(),
            url: "https://maru.ibrahimasry.com".to_owned(),
            description: "Spin up multi-repo dev environments with env management, \
                          port allocation, Docker/Hybrid orchestration, and web logs."
                .to_owned(),
            author: "@ibrahimasry".to_owned(),
            image: "/0.png".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    prefs_file: Option<String>,
}

/// Resolved documentation paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding `.md`/`.mdx` sources.
    pub source_dir: PathBuf,
    /// JSON file standing in for per-browser storage.
    pub prefs_file: PathBuf,
}

/// Search settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results returned for a query.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 20 }
    }
}

/// Navigation settings.
///
/// Unset values keep the site defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct NavigationConfig {
    /// Order assigned to documents without one.
    pub default_order: Option<i64>,
    /// Static list used for prev/next and when no documents are indexed.
    pub fallback: Option<Vec<FallbackEntry>>,
}

/// One entry of the static navigation list.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FallbackEntry {
    /// Display title.
    pub title: String,
    /// Absolute site path, e.g. `/docs/commands`.
    pub path: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`SITE_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `maru.toml` in the current directory and its parents, falling back
    /// to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(prefs_file) = &settings.prefs_file {
            self.docs_resolved.prefs_file.clone_from(prefs_file);
        }
        if let Some(max_results) = settings.max_results {
            self.search.max_results = max_results;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.name, "site.name")?;
        require_http_url(&self.site.url, "site.url")?;

        if self.search.max_results == 0 {
            return Err(ConfigError::Validation(
                "search.max_results must be greater than 0".to_owned(),
            ));
        }

        for (i, entry) in self.navigation.fallback.iter().flatten().enumerate() {
            require_non_empty(&entry.title, &format!("navigation.fallback[{i}].title"))?;
            if !entry.path.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "navigation.fallback[{i}].path must start with /"
                )));
            }
        }

        Ok(())
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            search: SearchConfig::default(),
            navigation: NavigationConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("src/docs"),
                prefs_file: base.join(".maru/prefs.json"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.site.url = expand::expand_env(&config.site.url, "site.url")?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "src/docs"),
            prefs_file: resolve(self.docs.prefs_file.as_deref(), ".maru/prefs.json"),
        };
    }
}
