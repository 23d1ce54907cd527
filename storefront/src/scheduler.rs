//! Single-shot timer scheduling.
//!
//! The hover menus need exactly one kind of asynchronous primitive: a
//! cancellable "run this once after N milliseconds". [`Scheduler`] abstracts
//! it so the browser timer can be swapped for [`ManualScheduler`], a
//! deterministic clock that only moves when a test calls
//! [`ManualScheduler::advance`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

/// Longest delay `setTimeout` accepts; its argument is a signed 32-bit
/// millisecond count.
pub const MAX_TIMER_DELAY: Duration = Duration::from_millis(i32::MAX as u64);

/// Callback run when a scheduled timer fires.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Something that can run a callback once after a delay.
///
/// Cancelling a handle that already fired (or was already cancelled) must be
/// a no-op.
pub trait Scheduler {
    /// Opaque handle identifying one scheduled callback.
    type Handle;

    /// Run `callback` once after `delay`.
    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle;

    /// Prevent a scheduled callback from running.
    fn cancel(&self, handle: Self::Handle);
}

// ============================================================================
// Browser
// ============================================================================

/// `window.setTimeout` backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> Self::Handle {
        match set_timeout_with_handle(callback, clamp_timer_delay(delay)) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("[storefront][timer] setTimeout rejected: {:?}", err);
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

/// Caps `delay` at [`MAX_TIMER_DELAY`]; longer values make the timer helper
/// throw instead of scheduling.
pub fn clamp_timer_delay(delay: Duration) -> Duration {
    if delay > MAX_TIMER_DELAY {
        log::warn!("[storefront][timer] delay {:?} capped at {:?}", delay, MAX_TIMER_DELAY);
        MAX_TIMER_DELAY
    } else {
        delay
    }
}

// ============================================================================
// Manual clock
// ============================================================================

struct PendingTimer {
    id: u64,
    due: Duration,
    callback: TimerCallback,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
    scheduled_total: usize,
    cancelled_total: usize,
    fired_total: usize,
    max_pending: usize,
}

/// Deterministic scheduler driven by [`advance`](Self::advance).
///
/// Clones share the same clock, so a test can keep one copy while handing
/// another to the code under test.
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use storefront::scheduler::{ManualScheduler, Scheduler};
///
/// let clock = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = fired.clone();
/// clock.schedule(Duration::from_millis(100), Box::new(move || flag.set(true)));
///
/// clock.advance(Duration::from_millis(99));
/// assert!(!fired.get());
/// clock.advance(Duration::from_millis(1));
/// assert!(fired.get());
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    /// A clock starting at zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of callbacks scheduled but neither fired nor cancelled.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Highest value [`pending`](Self::pending) ever reached.
    pub fn max_pending(&self) -> usize {
        self.clock.borrow().max_pending
    }

    /// Number of `schedule` calls so far.
    pub fn scheduled_total(&self) -> usize {
        self.clock.borrow().scheduled_total
    }

    /// Number of `cancel` calls that removed a pending callback.
    pub fn cancelled_total(&self) -> usize {
        self.clock.borrow().cancelled_total
    }

    /// Number of callbacks that actually ran.
    pub fn fired_total(&self) -> usize {
        self.clock.borrow().fired_total
    }

    /// Move the clock forward, running every callback that comes due, in due
    /// order (ties in scheduling order).
    ///
    /// Callbacks run with the clock unborrowed, so they may schedule or
    /// cancel further timers; newly scheduled ones fire in the same call if
    /// they come due before the target time.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due_idx = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| (timer.due, timer.id))
                    .map(|(idx, _)| idx);
                due_idx.map(|idx| {
                    let timer = clock.pending.remove(idx);
                    clock.now = timer.due;
                    clock.fired_total += 1;
                    timer
                })
            };
            match next {
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, callback: TimerCallback) -> u64 {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let due = clock.now + delay;
        clock.pending.push(PendingTimer { id, due, callback });
        clock.scheduled_total += 1;
        clock.max_pending = clock.max_pending.max(clock.pending.len());
        id
    }

    fn cancel(&self, handle: u64) {
        let mut clock = self.clock.borrow_mut();
        let before = clock.pending.len();
        clock.pending.retain(|timer| timer.id != handle);
        if clock.pending.len() < before {
            clock.cancelled_total += 1;
        }
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.pending.len())
            .field("scheduled_total", &clock.scheduled_total)
            .finish()
    }
}
