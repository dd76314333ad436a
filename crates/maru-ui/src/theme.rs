//! Dark/light theme.
//!
//! The theme is resolved once at boot from the `theme` slot, applied to the
//! document root, and persisted on every toggle. [`pre_paint_script`] is the
//! inline script that performs the same resolution before first paint.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use maru_prefs::{PreferenceStore, PreferenceStoreExt, keys};

/// Class marking the root element as dark.
pub const DARK_CLASS: &str = "dark";

/// Colour theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Dark theme.
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// Resolve a persisted value: missing or empty means dark, `"dark"` means
    /// dark, anything else means light.
    #[must_use]
    pub fn resolve(persisted: Option<&str>) -> Self {
        match persisted {
            None | Some("" | "dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Stored and `color-scheme` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}', expected 'dark' or 'light'")),
        }
    }
}

/// The document root as far as theming is concerned.
pub trait ThemeRoot {
    /// Add or remove the dark marker class.
    fn set_dark_class(&mut self, dark: bool);

    /// Set the `color-scheme` style hint.
    fn set_color_scheme(&mut self, scheme: &str);
}

/// In-memory root element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootElement {
    /// Class list.
    pub classes: Vec<String>,
    /// `color-scheme` style value.
    pub color_scheme: Option<String>,
}

impl RootElement {
    /// Whether the dark marker class is present.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.classes.iter().any(|c| c == DARK_CLASS)
    }
}

impl ThemeRoot for RootElement {
    fn set_dark_class(&mut self, dark: bool) {
        if dark {
            if !self.is_dark() {
                self.classes.push(DARK_CLASS.to_owned());
            }
        } else {
            self.classes.retain(|c| c != DARK_CLASS);
        }
    }

    fn set_color_scheme(&mut self, scheme: &str) {
        self.color_scheme = Some(scheme.to_owned());
    }
}

/// Theme state bound to a preference store.
pub struct ThemeController {
    theme: Theme,
    store: Arc<dyn PreferenceStore>,
}

impl ThemeController {
    /// Read the persisted theme. Unreadable storage resolves to dark.
    pub fn boot(store: Arc<dyn PreferenceStore>) -> Self {
        let persisted = store.get_lossy(keys::THEME);
        let theme = Theme::resolve(persisted.as_deref());
        tracing::debug!(%theme, "Resolved theme");
        Self { theme, store }
    }

    /// Current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Reflect the current theme on `root`.
    pub fn apply(&self, root: &mut impl ThemeRoot) {
        root.set_dark_class(self.theme == Theme::Dark);
        root.set_color_scheme(self.theme.as_str());
    }

    /// Switch to `theme`, apply it and persist it.
    pub fn set(&mut self, theme: Theme, root: &mut impl ThemeRoot) {
        self.theme = theme;
        self.apply(root);
        self.store.set_lossy(keys::THEME, theme.as_str());
    }

    /// Flip the theme. Returns the new theme.
    pub fn toggle(&mut self, root: &mut impl ThemeRoot) -> Theme {
        self.set(self.theme.toggled(), root);
        self.theme
    }
}

/// Inline script resolving the theme before first paint.
#[must_use]
pub fn pre_paint_script() -> String {
    format!(
        "(function(){{try{{var t=null;try{{t=localStorage.getItem('{key}');}}catch(e){{}}\
         var r=document.documentElement;if((t||'dark')==='dark'){{r.classList.add('{dark}');\
         r.style.colorScheme='dark';}}else{{r.classList.remove('{dark}');\
         r.style.colorScheme='light';}}}}catch(e){{}}}})();",
        key = keys::THEME,
        dark = DARK_CLASS,
    )
}
