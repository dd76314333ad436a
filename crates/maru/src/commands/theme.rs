//! `maru theme` command implementation.

use std::sync::Arc;

use clap::{Args, ValueEnum};
use maru_prefs::{FileStore, PreferenceStore, PrefsError, keys};
use maru_ui::{RootElement, Theme, ThemeController, pre_paint_script};

use super::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Theme accepted by `--set`.
#[derive(Clone, Copy, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

/// Arguments for the theme command.
#[derive(Args)]
pub(crate) struct ThemeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Flip between dark and light.
    #[arg(long, conflicts_with = "set")]
    toggle: bool,

    /// Set the theme explicitly.
    #[arg(long, value_enum)]
    set: Option<ThemeChoice>,

    /// Print the pre-paint script instead.
    #[arg(long, conflicts_with_all = ["toggle", "set"])]
    script: bool,
}

impl ThemeArgs {
    /// Show or change the persisted theme.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading fails or the preference
    /// file cannot be read or written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.script {
            output.line(&pre_paint_script());
            return Ok(());
        }

        let config = self.common.load_config()?;
        let prefs_file = &config.docs_resolved.prefs_file;
        let store: Arc<dyn PreferenceStore> = Arc::new(FileStore::new(prefs_file));
        // The controller ignores storage errors; a corrupt file is reported here.
        store.get(keys::THEME)?;

        let controller = ThemeController::boot(Arc::clone(&store));

        let target = match (self.set, self.toggle) {
            (Some(choice), _) => Some(Theme::from(choice)),
            (None, true) => Some(controller.theme().toggled()),
            (None, false) => None,
        };

        let Some(theme) = target else {
            output.line(controller.theme().as_str());
            return Ok(());
        };

        let root = persist_theme(&store, theme)?;
        tracing::debug!(classes = ?root.classes, color_scheme = ?root.color_scheme, "Applied theme");
        output.success(&format!(
            "Theme set to {theme} ({})",
            prefs_file.display()
        ));
        Ok(())
    }
}

/// Write `theme` to the store and apply what a fresh boot resolves.
fn persist_theme(store: &Arc<dyn PreferenceStore>, theme: Theme) -> Result<RootElement, PrefsError> {
    store.set(keys::THEME, theme.as_str())?;
    let mut root = RootElement::default();
    ThemeController::boot(Arc::clone(store)).apply(&mut root);
    Ok(root)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use maru_prefs::{DisabledStore, MemoryStore};
    use pretty_assertions::assert_eq;

    use super::*;

    /// Counts writes on top of a memory store.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: Mutex<usize>,
    }

    impl PreferenceStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
            *self.writes.lock().unwrap() += 1;
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_persist_theme_writes_once() {
        let counting = Arc::new(CountingStore::default());
        let store: Arc<dyn PreferenceStore> = Arc::clone(&counting) as Arc<dyn PreferenceStore>;

        let root = persist_theme(&store, Theme::Light).unwrap();

        assert_eq!(*counting.writes.lock().unwrap(), 1);
        assert_eq!(store.get(keys::THEME).unwrap().as_deref(), Some("light"));
        assert!(!root.is_dark());
        assert_eq!(root.color_scheme.as_deref(), Some("light"));
    }

    #[test]
    fn test_persist_theme_reports_storage_failure() {
        let store: Arc<dyn PreferenceStore> = Arc::new(DisabledStore);
        assert!(persist_theme(&store, Theme::Dark).is_err());
    }
}
