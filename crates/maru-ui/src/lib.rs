//! Headless view controllers for the shikamaru docs portal.
//!
//! Models the interactive parts of a docs page without a rendering
//! surface: theme resolution, the search modal, the sidebar, keyboard
//! shortcuts and active heading tracking. Hosts feed events through
//! [`EventTarget`]s and receive [`Subscription`] guards that release their
//! registrations when dropped.

mod keyboard;
mod layout;
mod listeners;
mod scheduler;
mod search_modal;
mod sidebar;
mod theme;
mod tracker;

pub use keyboard::{FocusTarget, KeyEvent, Platform, is_escape, opens_search, sequential_step};
pub use layout::{DocsLayout, Host, LayoutData, Navigate};
pub use listeners::{EventTarget, Subscription};
pub use scheduler::{ManualScheduler, Scheduler};
pub use search_modal::{FOCUS_DELAY, SearchModal};
pub use sidebar::Sidebar;
pub use theme::{DARK_CLASS, RootElement, Theme, ThemeController, ThemeRoot, pre_paint_script};
pub use tracker::{
    ActiveHeadingTracker, IntersectionEntry, IntersectionObserver, ObserverOptions, Rect,
    intersections,
};
