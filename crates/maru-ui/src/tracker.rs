//! Active heading tracking.
//!
//! The tracker watches the outlined headings of a page through an
//! [`IntersectionObserver`] and reports the heading nearest the top of the
//! observation region as active. The region is the viewport minus a 64px
//! fixed header at the top and the bottom 60%.

use maru_site::HeadingEntry;

/// Observation region and thresholds.
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Pixels excluded at the top (fixed header).
    pub top_margin: f64,
    /// Fraction of the viewport excluded at the bottom.
    pub bottom_fraction: f64,
    /// Visibility ratios at which the observer reports.
    pub thresholds: Vec<f64>,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            top_margin: 64.0,
            bottom_fraction: 0.6,
            thresholds: vec![0.0, 1.0],
        }
    }
}

impl ObserverOptions {
    /// Root margin in CSS notation.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_margin,
            self.bottom_fraction * 100.0
        )
    }

    /// Vertical bounds of the observation region for a viewport height.
    #[must_use]
    pub fn region(&self, viewport_height: f64) -> (f64, f64) {
        (
            self.top_margin,
            viewport_height * (1.0 - self.bottom_fraction),
        )
    }
}

/// Vertical extent of an element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

/// One observation report.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Id of the observed heading.
    pub id: String,
    /// Whether it overlaps the observation region.
    pub is_intersecting: bool,
    /// Top edge relative to the viewport.
    pub top: f64,
}

/// Build observation reports from element positions.
#[must_use]
pub fn intersections(
    elements: &[(&str, Rect)],
    viewport_height: f64,
    options: &ObserverOptions,
) -> Vec<IntersectionEntry> {
    let (region_top, region_bottom) = options.region(viewport_height);
    elements
        .iter()
        .map(|(id, rect)| IntersectionEntry {
            id: (*id).to_owned(),
            is_intersecting: rect.bottom >= region_top && rect.top <= region_bottom,
            top: rect.top,
        })
        .collect()
}

/// Host-side intersection observer.
pub trait IntersectionObserver {
    /// Start observing the element with `id`.
    fn observe(&mut self, id: &str);

    /// Stop observing everything.
    fn disconnect(&mut self);
}

/// Tracks the active heading of one page.
///
/// Created per heading set and never reused. The observer is disconnected
/// exactly once, on [`stop`](Self::stop) or drop.
pub struct ActiveHeadingTracker<O: IntersectionObserver> {
    active: Option<String>,
    observer: Option<O>,
}

impl<O: IntersectionObserver> ActiveHeadingTracker<O> {
    /// Start tracking `headings`.
    ///
    /// `create` builds the observer and is not called when `headings` is
    /// empty. Headings for which `is_present` is false are not observed.
    pub fn start(
        headings: &[HeadingEntry],
        is_present: impl Fn(&str) -> bool,
        create: impl FnOnce(&ObserverOptions) -> O,
    ) -> Self {
        if headings.is_empty() {
            return Self {
                active: None,
                observer: None,
            };
        }

        let mut observer = create(&ObserverOptions::default());
        let mut observed = 0;
        for heading in headings {
            if is_present(&heading.id) {
                observer.observe(&heading.id);
                observed += 1;
            }
        }
        tracing::debug!(headings = headings.len(), observed, "Tracking headings");

        Self {
            active: None,
            observer: Some(observer),
        }
    }

    /// Apply an observer report. Among intersecting entries the one with the
    /// smallest top edge becomes active; without any, the active id is kept.
    pub fn handle_entries(&mut self, entries: &[IntersectionEntry]) -> Option<&str> {
        let nearest = entries
            .iter()
            .filter(|e| e.is_intersecting && !e.id.is_empty())
            .min_by(|a, b| a.top.total_cmp(&b.top));
        if let Some(entry) = nearest {
            self.active = Some(entry.id.clone());
        }
        self.active()
    }

    /// The active heading id.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether an observer is attached.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Disconnect the observer.
    pub fn stop(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl<O: IntersectionObserver> Drop for ActiveHeadingTracker<O> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Records calls made on it.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingObserver {
        pub(crate) log: Rc<RefCell<Vec<String>>>,
    }

    impl IntersectionObserver for RecordingObserver {
        fn observe(&mut self, id: &str) {
            self.log.borrow_mut().push(format!("observe {id}"));
        }

        fn disconnect(&mut self) {
            self.log.borrow_mut().push("disconnect".to_owned());
        }
    }

    fn heading(id: &str) -> HeadingEntry {
        HeadingEntry {
            id: id.to_owned(),
            text: id.to_owned(),
            level: 2,
        }
    }

    fn entry(id: &str, is_intersecting: bool, top: f64) -> IntersectionEntry {
        IntersectionEntry {
            id: id.to_owned(),
            is_intersecting,
            top,
        }
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(ObserverOptions::default().root_margin(), "-64px 0px -60% 0px");
    }

    #[test]
    fn test_smallest_top_wins() {
        let observer = RecordingObserver::default();
        let mut tracker =
            ActiveHeadingTracker::start(&[heading("a"), heading("b")], |_| true, |_| observer.clone());

        let active = tracker.handle_entries(&[entry("b", true, 300.0), entry("a", true, 120.0)]);
        assert_eq!(active, Some("a"));
    }

    #[test]
    fn test_no_intersection_keeps_previous() {
        let mut tracker =
            ActiveHeadingTracker::start(&[heading("a")], |_| true, |_| RecordingObserver::default());
        assert_eq!(tracker.active(), None);

        tracker.handle_entries(&[entry("a", true, 100.0)]);
        assert_eq!(tracker.handle_entries(&[entry("a", false, -40.0)]), Some("a"));
        assert_eq!(tracker.handle_entries(&[]), Some("a"));
    }

    #[test]
    fn test_missing_elements_are_not_observed() {
        let observer = RecordingObserver::default();
        let _tracker = ActiveHeadingTracker::start(
            &[heading("a"), heading("gone"), heading("b")],
            |id| id != "gone",
            |_| observer.clone(),
        );
        assert_eq!(*observer.log.borrow(), vec!["observe a", "observe b"]);
    }

    #[test]
    fn test_empty_headings_create_no_observer() {
        let mut created = false;
        let tracker = ActiveHeadingTracker::start(&[], |_| true, |_| {
            created = true;
            RecordingObserver::default()
        });
        assert!(!tracker.is_observing());
        drop(tracker);
        assert!(!created);
    }

    #[test]
    fn test_disconnects_exactly_once() {
        let observer = RecordingObserver::default();
        let mut tracker = ActiveHeadingTracker::start(&[heading("a")], |_| true, |_| observer.clone());
        tracker.stop();
        tracker.stop();
        drop(tracker);

        let disconnects = observer.log.borrow().iter().filter(|l| *l == "disconnect").count();
        assert_eq!(disconnects, 1);
    }

    #[test]
    fn test_drop_disconnects() {
        let observer = RecordingObserver::default();
        {
            let _tracker = ActiveHeadingTracker::start(&[heading("a")], |_| true, |_| observer.clone());
        }
        assert_eq!(observer.log.borrow().last().map(String::as_str), Some("disconnect"));
    }

    #[test]
    fn test_geometry() {
        let options = ObserverOptions::default();
        // Viewport 1000px: region is 64..400.
        let entries = intersections(
            &[
                ("above", Rect { top: 10.0, bottom: 40.0 }),
                ("inside", Rect { top: 200.0, bottom: 230.0 }),
                ("straddling", Rect { top: 50.0, bottom: 80.0 }),
                ("below", Rect { top: 500.0, bottom: 530.0 }),
            ],
            1000.0,
            &options,
        );
        let hits: Vec<_> = entries.iter().filter(|e| e.is_intersecting).map(|e| e.id.as_str()).collect();
        assert_eq!(hits, vec!["inside", "straddling"]);

        let mut tracker =
            ActiveHeadingTracker::start(&[heading("inside")], |_| true, |_| RecordingObserver::default());
        assert_eq!(tracker.handle_entries(&entries), Some("straddling"));
    }
}
