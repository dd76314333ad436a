//! Docs page layout.
//!
//! Mounting wires the sidebar, the search shortcut, `j`/`k` navigation and
//! the active heading tracker to the host. Every registration is held as a
//! [`Subscription`] and released on unmount.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use maru_prefs::PreferenceStore;
use maru_site::{CurrentPage, DocPage, NavigationController, NavigationEntry, PrevNext};

use crate::keyboard::{KeyEvent, Platform, opens_search, sequential_step};
use crate::listeners::{EventTarget, Subscription};
use crate::scheduler::Scheduler;
use crate::search_modal::SearchModal;
use crate::sidebar::Sidebar;
use crate::tracker::{ActiveHeadingTracker, IntersectionEntry, IntersectionObserver, ObserverOptions};

/// Callback performing client-side navigation to a path.
pub type Navigate = Rc<dyn Fn(&str)>;

/// What the layout needs from its environment.
#[derive(Clone)]
pub struct Host {
    /// Window keydown events.
    pub window: EventTarget<KeyEvent>,
    /// Sidebar scroll events, carrying the new offset.
    pub sidebar_scroll: EventTarget<f64>,
    /// Timer source.
    pub scheduler: Rc<dyn Scheduler>,
    /// Platform, for the primary modifier.
    pub platform: Platform,
    /// Navigation callback.
    pub navigate: Navigate,
    /// Per-browser preferences.
    pub store: Arc<dyn PreferenceStore>,
}

/// Lists the layout is built from.
pub struct LayoutData<'a> {
    /// Ordered document index, for the sidebar and search.
    pub index: &'a [NavigationEntry],
    /// Static navigation list, for prev/next.
    pub static_nav: &'a [NavigationEntry],
    /// Search result cap.
    pub max_results: usize,
}

/// A mounted docs page.
pub struct DocsLayout<O: IntersectionObserver> {
    page: DocPage,
    navigation: NavigationController,
    sidebar: Rc<RefCell<Sidebar>>,
    modal: SearchModal,
    tracker: ActiveHeadingTracker<O>,
    subscriptions: Vec<Subscription>,
}

impl<O: IntersectionObserver> DocsLayout<O> {
    /// Mount `page`.
    ///
    /// `is_present` tells whether a heading element exists in the host;
    /// `create_observer` is called at most once.
    pub fn mount(
        host: &Host,
        data: &LayoutData<'_>,
        page: DocPage,
        is_present: impl Fn(&str) -> bool,
        create_observer: impl FnOnce(&ObserverOptions) -> O,
    ) -> Self {
        let navigation = NavigationController::new(data.static_nav.to_vec());
        let sidebar = Rc::new(RefCell::new(Sidebar::mount(
            data.index.to_vec(),
            Arc::clone(&host.store),
        )));
        let modal = SearchModal::new(
            data.index.to_vec(),
            data.max_results,
            host.window.clone(),
            Rc::clone(&host.scheduler),
        );

        let mut subscriptions = Vec::with_capacity(3);

        let shortcut_modal = modal.clone();
        let platform = host.platform;
        subscriptions.push(host.window.listen(move |event| {
            if opens_search(event, platform) {
                shortcut_modal.open();
            }
        }));

        let steps = navigation.clone();
        let navigate = Rc::clone(&host.navigate);
        let title = page.title.clone();
        let path = page.path.clone();
        subscriptions.push(host.window.listen(move |event| {
            let Some(direction) = sequential_step(event) else {
                return;
            };
            let current = CurrentPage::new(title.as_deref(), Some(&path));
            if let Some(entry) = steps.step(current, direction) {
                navigate(&entry.path);
            }
        }));

        let scrolled = Rc::downgrade(&sidebar);
        subscriptions.push(host.sidebar_scroll.listen(move |offset| {
            if let Some(sidebar) = scrolled.upgrade() {
                sidebar.borrow_mut().on_scroll(*offset);
            }
        }));

        let tracker = ActiveHeadingTracker::start(&page.toc, is_present, create_observer);
        tracing::debug!(path = %page.path, "Mounted docs layout");

        Self {
            page,
            navigation,
            sidebar,
            modal,
            tracker,
            subscriptions,
        }
    }

    /// The mounted page.
    #[must_use]
    pub fn page(&self) -> &DocPage {
        &self.page
    }

    /// Search modal.
    #[must_use]
    pub fn modal(&self) -> &SearchModal {
        &self.modal
    }

    /// Sidebar filter text.
    #[must_use]
    pub fn sidebar_query(&self) -> String {
        self.sidebar.borrow().query().to_owned()
    }

    /// Change the sidebar filter text.
    pub fn set_sidebar_query(&self, query: &str) {
        self.sidebar.borrow_mut().set_query(query);
    }

    /// Sidebar scroll offset.
    #[must_use]
    pub fn sidebar_scroll(&self) -> f64 {
        self.sidebar.borrow().scroll_top()
    }

    /// Entries currently listed in the sidebar.
    #[must_use]
    pub fn sidebar_entries(&self) -> Vec<NavigationEntry> {
        self.sidebar.borrow().visible().into_iter().cloned().collect()
    }

    /// Footer previous/next links.
    #[must_use]
    pub fn footer(&self) -> PrevNext<'_> {
        self.navigation.neighbours(CurrentPage::new(
            self.page.title.as_deref(),
            Some(&self.page.path),
        ))
    }

    /// Feed an observer report to the tracker.
    pub fn handle_intersections(&mut self, entries: &[IntersectionEntry]) -> Option<&str> {
        self.tracker.handle_entries(entries)
    }

    /// Active heading id.
    #[must_use]
    pub fn active_heading(&self) -> Option<&str> {
        self.tracker.active()
    }

    /// Release every registration.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.modal.close();
        self.tracker.stop();
        self.subscriptions.clear();
    }
}

impl<O: IntersectionObserver> Drop for DocsLayout<O> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use maru_prefs::{MemoryStore, PreferenceStoreExt, keys};
    use maru_site::{HeadingEntry, default_static_nav};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::keyboard::FocusTarget;
    use crate::scheduler::ManualScheduler;
    use crate::tracker::tests::RecordingObserver;

    struct Fixture {
        host: Host,
        scheduler: ManualScheduler,
        visited: Rc<RefCell<Vec<String>>>,
        store: Arc<dyn PreferenceStore>,
        observer: RecordingObserver,
    }

    fn fixture() -> Fixture {
        let scheduler = ManualScheduler::new();
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visited);
        let store: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
        let host = Host {
            window: EventTarget::new(),
            sidebar_scroll: EventTarget::new(),
            scheduler: Rc::new(scheduler.clone()),
            platform: Platform::Other,
            navigate: Rc::new(move |path: &str| sink.borrow_mut().push(path.to_owned())),
            store: Arc::clone(&store),
        };
        Fixture {
            host,
            scheduler,
            visited,
            store,
            observer: RecordingObserver::default(),
        }
    }

    fn page(title: &str, path: &str) -> DocPage {
        DocPage {
            path: path.to_owned(),
            title: Some(title.to_owned()),
            display_title: Some(title.to_owned()),
            html: String::new(),
            toc: vec![
                HeadingEntry {
                    id: "setup".to_owned(),
                    text: "Setup".to_owned(),
                    level: 2,
                },
                HeadingEntry {
                    id: "flags".to_owned(),
                    text: "Flags".to_owned(),
                    level: 3,
                },
            ],
            head: String::new(),
            previous: None,
            next: None,
        }
    }

    fn mount(fx: &Fixture, doc: DocPage) -> DocsLayout<RecordingObserver> {
        let nav = default_static_nav();
        let data = LayoutData {
            index: &nav,
            static_nav: &nav,
            max_results: 20,
        };
        let observer = fx.observer.clone();
        DocsLayout::mount(&fx.host, &data, doc, |_| true, move |_| observer)
    }

    #[test]
    fn test_j_and_k_navigate() {
        let fx = fixture();
        let _layout = mount(&fx, page("Commands", "/docs/commands"));

        fx.host.window.dispatch(&KeyEvent::key("j"));
        fx.host.window.dispatch(&KeyEvent::key("K"));
        fx.host.window.dispatch(&KeyEvent::key("j").on(FocusTarget::Input));
        assert_eq!(
            *fx.visited.borrow(),
            vec!["/docs/configuration", "/docs/getting-started"]
        );
    }

    #[test]
    fn test_boundaries_and_unknown_pages_do_nothing() {
        let fx = fixture();
        let first = mount(&fx, page("Getting Started", "/docs/getting-started"));
        fx.host.window.dispatch(&KeyEvent::key("k"));
        first.unmount();

        let _unknown = mount(&fx, page("Changelog", "/docs/changelog"));
        fx.host.window.dispatch(&KeyEvent::key("j"));
        assert!(fx.visited.borrow().is_empty());
    }

    #[test]
    fn test_footer_uses_path_when_title_unknown() {
        let fx = fixture();
        let layout = mount(&fx, page("Ports", "/docs/ports"));
        let footer = layout.footer();
        assert_eq!(footer.previous.map(|e| e.title.as_str()), Some("Infra: Docker vs External"));
        assert_eq!(footer.next.map(|e| e.title.as_str()), Some("Troubleshooting"));
    }

    #[test]
    fn test_search_shortcut_opens_modal() {
        let fx = fixture();
        let layout = mount(&fx, page("Commands", "/docs/commands"));

        fx.host.window.dispatch(&KeyEvent::key("/").on(FocusTarget::TextArea));
        assert!(!layout.modal().is_open());

        fx.host.window.dispatch(&KeyEvent::key("k").with_ctrl());
        assert!(layout.modal().is_open());
        assert!(fx.visited.borrow().is_empty());

        fx.scheduler.advance(Duration::from_millis(50));
        assert!(layout.modal().is_input_focused());

        fx.host.window.dispatch(&KeyEvent::key("Escape"));
        assert!(!layout.modal().is_open());
    }

    #[test]
    fn test_sidebar_scroll_is_persisted() {
        let fx = fixture();
        let layout = mount(&fx, page("Commands", "/docs/commands"));
        fx.host.sidebar_scroll.dispatch(&320.0);
        assert!((layout.sidebar_scroll() - 320.0).abs() < f64::EPSILON);
        assert_eq!(fx.store.get_lossy(keys::SIDEBAR_SCROLL).as_deref(), Some("320"));

        layout.set_sidebar_query("conf");
        let titles: Vec<_> = layout.sidebar_entries().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Configuration"]);
    }

    #[test]
    fn test_tracks_active_heading() {
        let fx = fixture();
        let mut layout = mount(&fx, page("Commands", "/docs/commands"));
        assert_eq!(*fx.observer.log.borrow(), vec!["observe setup", "observe flags"]);

        let entries = [
            IntersectionEntry {
                id: "flags".to_owned(),
                is_intersecting: true,
                top: 180.0,
            },
            IntersectionEntry {
                id: "setup".to_owned(),
                is_intersecting: false,
                top: 20.0,
            },
        ];
        assert_eq!(layout.handle_intersections(&entries), Some("flags"));
        assert_eq!(layout.active_heading(), Some("flags"));
    }

    #[test]
    fn test_unmount_releases_everything_once() {
        let fx = fixture();
        let layout = mount(&fx, page("Commands", "/docs/commands"));
        layout.modal().open();
        assert_eq!(fx.host.window.listener_count(), 3);
        assert_eq!(fx.host.sidebar_scroll.listener_count(), 1);

        layout.unmount();
        assert_eq!(fx.host.window.listener_count(), 0);
        assert_eq!(fx.host.sidebar_scroll.listener_count(), 0);
        assert_eq!(fx.scheduler.pending(), 0);
        let disconnects = fx.observer.log.borrow().iter().filter(|l| *l == "disconnect").count();
        assert_eq!(disconnects, 1);

        fx.host.window.dispatch(&KeyEvent::key("j"));
        assert!(fx.visited.borrow().is_empty());
    }

    #[test]
    fn test_rendered_site_page() {
        use maru_content::MockContentSource;
        use maru_site::{Site, SiteOptions};

        let source = MockContentSource::new()
            .with_document("commands.md", Some("Commands"), Some(2), "## up\n\n### Flags\n")
            .with_document("getting-started.md", Some("Getting Started"), Some(1), "Intro\n");
        let site = Site::load(Arc::new(source), SiteOptions::default()).unwrap();
        let doc = site.render("commands").unwrap();

        let fx = fixture();
        let data = LayoutData {
            index: site.navigation(),
            static_nav: &site.options().static_nav,
            max_results: site.options().max_results,
        };
        let observer = fx.observer.clone();
        let layout = DocsLayout::mount(&fx.host, &data, doc, |_| true, move |_| observer);

        assert_eq!(*fx.observer.log.borrow(), vec!["observe up", "observe flags"]);
        assert_eq!(layout.sidebar_entries().len(), 2);
        assert_eq!(layout.footer().next.map(|e| e.path.as_str()), Some("/docs/configuration"));

        layout.modal().set_query("getting");
        assert_eq!(layout.modal().select(0).as_deref(), Some("/docs/getting-started"));
    }
}
