//! Deferred callbacks.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::listeners::Subscription;

/// Runs callbacks after a delay.
///
/// The returned [`Subscription`] cancels the callback when dropped before it
/// fires. Dropping it afterwards does nothing.
pub trait Scheduler {
    /// Schedule `task` to run once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Subscription;
}

struct Task {
    id: u64,
    due: Duration,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task>,
}

/// Scheduler driven by an explicit clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and run every task that became due, earliest
    /// first. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut queue = self.queue.borrow_mut();
            queue.now += by;
            let now = queue.now;
            let (mut due, pending): (Vec<Task>, Vec<Task>) =
                queue.tasks.drain(..).partition(|t| t.due <= now);
            queue.tasks = pending;
            due.sort_by_key(|t| (t.due, t.id));
            due
        };
        let count = due.len();
        for task in due {
            (task.run)();
        }
        count
    }

    /// Tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().tasks.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Subscription {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.tasks.push(Task { id, due, run: task });
            id
        };
        let queue = Rc::downgrade(&self.queue);
        Subscription::new(move || {
            if let Some(queue) = queue.upgrade() {
                queue.borrow_mut().tasks.retain(|t| t.id != id);
            }
        })
    }
}
