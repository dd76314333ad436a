//! Keyboard events and shortcut resolution.

use maru_site::Direction;

/// Where keyboard focus is when a key is pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// Page body or any non-editable element.
    #[default]
    Body,
    /// A text `<input>`.
    Input,
    /// A `<textarea>`.
    TextArea,
    /// An element with `contenteditable`.
    ContentEditable,
}

impl FocusTarget {
    /// Whether keystrokes go to a text field.
    #[must_use]
    pub fn is_typing(self) -> bool {
        !matches!(self, Self::Body)
    }
}

/// Host platform, deciding the primary modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    /// macOS: Cmd is the primary modifier.
    Mac,
    /// Everything else: Ctrl.
    #[default]
    Other,
}

impl Platform {
    /// Detect from a platform string such as `navigator.platform`.
    #[must_use]
    pub fn detect(platform: &str) -> Self {
        if platform.to_uppercase().contains("MAC") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

/// A key press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key value, e.g. `"k"`, `"/"`, `"Escape"`.
    pub key: String,
    /// Cmd / Windows key held.
    pub meta: bool,
    /// Ctrl held.
    pub ctrl: bool,
    /// Focused element.
    pub target: FocusTarget,
}

impl KeyEvent {
    /// A plain key press on the page body.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Hold Cmd.
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Hold Ctrl.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Deliver to `target` instead of the body.
    #[must_use]
    pub fn on(mut self, target: FocusTarget) -> Self {
        self.target = target;
        self
    }

    fn is_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }

    fn primary_modifier(&self, platform: Platform) -> bool {
        match platform {
            Platform::Mac => self.meta,
            Platform::Other => self.ctrl,
        }
    }
}

/// Whether `event` opens the search modal.
///
/// Primary-modifier+K works anywhere; `/` only outside text fields.
#[must_use]
pub fn opens_search(event: &KeyEvent, platform: Platform) -> bool {
    if event.primary_modifier(platform) && event.is_key("k") {
        return true;
    }
    event.key == "/" && !event.target.is_typing()
}

/// Sequential navigation requested by `event`: `j` for next, `k` for
/// previous, either case.
///
/// Ignored in text fields and when Cmd or Ctrl is held, so the search
/// shortcut never doubles as a step.
#[must_use]
pub fn sequential_step(event: &KeyEvent) -> Option<Direction> {
    if event.target.is_typing() || event.meta || event.ctrl {
        return None;
    }
    if event.is_key("j") {
        Some(Direction::Next)
    } else if event.is_key("k") {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Whether `event` is Escape.
#[must_use]
pub fn is_escape(event: &KeyEvent) -> bool {
    event.key == "Escape"
}
