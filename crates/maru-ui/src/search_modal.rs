//! Search modal.
//!
//! Opening grants input focus after a short delay and installs an Escape
//! listener on the window; closing cancels the pending focus and removes
//! the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use maru_site::{NavigationEntry, SearchIndex};

use crate::keyboard::{KeyEvent, is_escape};
use crate::listeners::{EventTarget, Subscription};
use crate::scheduler::Scheduler;

/// Delay before the search input receives focus.
pub const FOCUS_DELAY: Duration = Duration::from_millis(50);

#[derive(Default)]
struct ModalState {
    open: bool,
    query: String,
    input_focused: bool,
    escape: Option<Subscription>,
    focus: Option<Subscription>,
}

struct Inner {
    entries: Vec<NavigationEntry>,
    max_results: usize,
    window: EventTarget<KeyEvent>,
    scheduler: Rc<dyn Scheduler>,
    state: RefCell<ModalState>,
}

/// Search modal controller. Clones share state.
#[derive(Clone)]
pub struct SearchModal {
    inner: Rc<Inner>,
}

impl SearchModal {
    /// Create a closed modal searching `entries`.
    pub fn new(
        entries: Vec<NavigationEntry>,
        max_results: usize,
        window: EventTarget<KeyEvent>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                entries,
                max_results,
                window,
                scheduler,
                state: RefCell::new(ModalState::default()),
            }),
        }
    }

    /// Open the modal. Does nothing if already open.
    pub fn open(&self) {
        if self.is_open() {
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let focus = self.inner.scheduler.schedule(
            FOCUS_DELAY,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut state = inner.state.borrow_mut();
                    if state.open {
                        state.input_focused = true;
                    }
                }
            }),
        );

        let weak = Rc::downgrade(&self.inner);
        let escape = self.inner.window.listen(move |event| {
            if is_escape(event)
                && let Some(inner) = weak.upgrade()
            {
                close(&inner);
            }
        });

        let mut state = self.inner.state.borrow_mut();
        state.open = true;
        state.focus = Some(focus);
        state.escape = Some(escape);
        tracing::debug!("Search modal opened");
    }

    /// Close the modal.
    pub fn close(&self) {
        close(&self.inner);
    }

    /// Backdrop click.
    pub fn click_backdrop(&self) {
        self.close();
    }

    /// Whether the modal is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.state.borrow().open
    }

    /// Whether the search input has focus.
    #[must_use]
    pub fn is_input_focused(&self) -> bool {
        self.inner.state.borrow().input_focused
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> String {
        self.inner.state.borrow().query.clone()
    }

    /// Replace the query text.
    pub fn set_query(&self, query: &str) {
        query.clone_into(&mut self.inner.state.borrow_mut().query);
    }

    /// Results for the current query.
    #[must_use]
    pub fn results(&self) -> Vec<NavigationEntry> {
        let query = self.query();
        SearchIndex::new(&self.inner.entries)
            .with_max_results(self.inner.max_results)
            .search(&query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Select the result at `index`: closes the modal and returns the path
    /// to navigate to. Out-of-range selections change nothing.
    pub fn select(&self, index: usize) -> Option<String> {
        let path = self.results().into_iter().nth(index)?.path;
        self.close();
        Some(path)
    }
}

fn close(inner: &Inner) {
    let (escape, focus) = {
        let mut state = inner.state.borrow_mut();
        if !state.open {
            return;
        }
        state.open = false;
        state.input_focused = false;
        (state.escape.take(), state.focus.take())
    };
    drop(escape);
    drop(focus);
    tracing::debug!("Search modal closed");
}
