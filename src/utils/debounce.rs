//! Trailing-edge debouncing.
//!
//! A [`Debouncer`] owns the action, the delay and the handle of the one
//! timer it may have outstanding. Every [`Debouncer::call`] drops the old
//! handle (cancelling it) and schedules a fresh one carrying the newest
//! arguments, so the action only runs once the calls go quiet for
//! `delay_ms`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;

/// Something that can run a task later. Dropping the returned handle must
/// cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

impl<S: Scheduler> Scheduler for Rc<S> {
    type Handle = S::Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).schedule(delay_ms, task)
    }
}

/// Browser `setTimeout`, via gloo. `Timeout` clears itself on drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

struct Inner<A, S: Scheduler> {
    action: Rc<dyn Fn(A)>,
    delay_ms: u32,
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    armed: Cell<bool>,
}

pub struct Debouncer<A: 'static, S: Scheduler + 'static = TimeoutScheduler> {
    inner: Rc<Inner<A, S>>,
}

impl<A: 'static> Debouncer<A, TimeoutScheduler> {
    pub fn new(action: impl Fn(A) + 'static, delay_ms: u32) -> Self {
        Self::with_scheduler(action, delay_ms, TimeoutScheduler)
    }
}

impl<A: 'static, S: Scheduler + 'static> Debouncer<A, S> {
    pub fn with_scheduler(action: impl Fn(A) + 'static, delay_ms: u32, scheduler: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                action: Rc::new(action),
                delay_ms,
                scheduler,
                pending: RefCell::new(None),
                armed: Cell::new(false),
            }),
        }
    }

    /// Restarts the quiet window; `args` replaces whatever the pending call held.
    pub fn call(&self, args: A) {
        // Cancel first so at most one timer is ever outstanding.
        self.inner.pending.borrow_mut().take();

        let weak: Weak<Inner<A, S>> = Rc::downgrade(&self.inner);
        let action = self.inner.action.clone();
        let task = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                // The handle itself stays put; a timer callback must not drop its own closure.
                inner.armed.set(false);
            }
            action(args);
        });

        self.inner.armed.set(true);
        let handle = self.inner.scheduler.schedule(self.inner.delay_ms, task);
        *self.inner.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        self.inner.armed.set(false);
        self.inner.pending.borrow_mut().take();
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.inner.armed.get()
    }

    pub fn delay_ms(&self) -> u32 {
        self.inner.delay_ms
    }
}

impl<A: 'static, S: Scheduler + 'static> Drop for Debouncer<A, S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Entry {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    /// Deterministic clock for driving debouncers in tests.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        seq: Cell<u64>,
        queue: RefCell<Vec<Entry>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.now.get()
        }

        /// Live (not cancelled) tasks still waiting.
        pub fn outstanding(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|e| !e.cancelled.get())
                .count()
        }

        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    queue.retain(|e| !e.cancelled.get());
                    let idx = queue
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.seq))
                        .map(|(i, _)| i);
                    idx.map(|i| queue.remove(i))
                };
                match next {
                    Some(entry) => {
                        self.now.set(entry.due);
                        (entry.task)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let seq = self.seq.get();
            self.seq.set(seq + 1);
            self.queue.borrow_mut().push(Entry {
                due: self.now.get() + delay_ms as u64,
                seq,
                cancelled: cancelled.clone(),
                task,
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;

    fn recording(
        delay: u32,
    ) -> (
        Rc<ManualScheduler>,
        Rc<RefCell<Vec<(u64, u32)>>>,
        Debouncer<u32, Rc<ManualScheduler>>,
    ) {
        let clock = Rc::new(ManualScheduler::default());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let debouncer = {
            let clock = clock.clone();
            let calls = calls.clone();
            let sched = clock.clone();
            Debouncer::with_scheduler(
                move |v: u32| calls.borrow_mut().push((clock.now(), v)),
                delay,
                sched,
            )
        };
        (clock, calls, debouncer)
    }

    #[test]
    fn burst_collapses_to_last_call() {
        let (clock, calls, debouncer) = recording(100);
        for v in 1..=5 {
            debouncer.call(v);
            clock.advance(30);
        }
        // last call at t=120, nothing yet at t=150
        assert!(calls.borrow().is_empty());
        assert!(debouncer.is_pending());

        clock.advance(100);
        assert_eq!(*calls.borrow(), vec![(220, 5)]);
        assert!(!debouncer.is_pending());

        clock.advance(1_000);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn spaced_calls_each_fire() {
        let (clock, calls, debouncer) = recording(50);
        debouncer.call(1);
        clock.advance(60);
        debouncer.call(2);
        clock.advance(60);
        debouncer.call(3);
        clock.advance(60);
        assert_eq!(*calls.borrow(), vec![(50, 1), (110, 2), (170, 3)]);
    }

    #[test]
    fn call_exactly_at_deadline_lets_previous_fire() {
        let (clock, calls, debouncer) = recording(50);
        debouncer.call(1);
        clock.advance(50);
        debouncer.call(2);
        clock.advance(50);
        assert_eq!(*calls.borrow(), vec![(50, 1), (100, 2)]);
    }

    #[test]
    fn only_one_timer_outstanding() {
        let (clock, _calls, debouncer) = recording(100);
        for v in 0..10 {
            debouncer.call(v);
            assert_eq!(clock.outstanding(), 1);
        }
    }

    #[test]
    fn cancel_drops_pending_call() {
        let (clock, calls, debouncer) = recording(100);
        debouncer.call(7);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        clock.advance(500);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn dropping_debouncer_cancels() {
        let (clock, calls, debouncer) = recording(100);
        debouncer.call(7);
        drop(debouncer);
        clock.advance(500);
        assert!(calls.borrow().is_empty());
        assert_eq!(clock.outstanding(), 0);
    }

    #[test]
    fn zero_delay_still_defers() {
        let (clock, calls, debouncer) = recording(0);
        debouncer.call(1);
        debouncer.call(2);
        assert!(calls.borrow().is_empty());
        clock.advance(0);
        assert_eq!(*calls.borrow(), vec![(0, 2)]);
    }
}
