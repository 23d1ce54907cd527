//! Hover-intent state machine for navigation menus.
//!
//! A menu opens the moment the pointer enters its trigger or panel and closes
//! a short while after the pointer has left both. The grace period lets the
//! pointer cross the gap between the trigger label and the panel below it
//! without the panel flickering shut.
//!
//! ```text
//!             PointerEnter                PointerLeave
//!   Closed ──────────────▶ Open ──────────────────────▶ Closing(token)
//!     ▲                     ▲                                │  │
//!     │                     └──────── PointerEnter ──────────┘  │
//!     │                              (cancel token)             │
//!     └──────────────────── TimerFired(token) ──────────────────┘
//!
//!   any ── Unmount ──▶ Unmounted   (pending timer cancelled)
//! ```
//!
//! [`HoverIntent`] is the pure machine: it never touches a clock, it only
//! answers with the [`TimerCommand`] the caller has to carry out.
//! [`HoverController`] pairs it with a [`Scheduler`] and is what components
//! hold on to.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::scheduler::Scheduler;

/// Grace period between the pointer leaving and the panel closing.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(100);

/// Identifies one scheduled close; a firing timer must present the token of
/// the close it was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Where a menu is in its open/close cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverPhase {
    /// Panel hidden.
    Closed,
    /// Panel shown, pointer inside.
    Open,
    /// Panel shown, pointer left; closes when the token's timer fires.
    Closing(TimerToken),
    /// Owner torn down. Terminal.
    Unmounted,
}

/// What the caller has to do with its timer after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Nothing.
    None,
    /// Start a single-shot timer that reports back with `token`.
    Schedule { token: TimerToken, delay: Duration },
    /// Stop the timer scheduled for `token`.
    Cancel(TimerToken),
}

/// Pure open/close machine for one menu.
#[derive(Clone, Debug)]
pub struct HoverIntent {
    phase: HoverPhase,
    close_delay: Duration,
    next_token: u64,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(DEFAULT_CLOSE_DELAY)
    }
}

impl HoverIntent {
    /// Closed machine with the given grace period.
    pub fn new(close_delay: Duration) -> Self {
        Self {
            phase: HoverPhase::Closed,
            close_delay,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn close_delay(&self) -> Duration {
        self.close_delay
    }

    /// Whether the panel should be rendered. A pending close still counts as
    /// visible.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, HoverPhase::Open | HoverPhase::Closing(_))
    }

    /// Token of the close currently waiting on a timer, if any.
    pub fn pending_close(&self) -> Option<TimerToken> {
        match self.phase {
            HoverPhase::Closing(token) => Some(token),
            _ => None,
        }
    }

    /// Pointer entered trigger or panel. Opens immediately; cancels a pending
    /// close.
    pub fn pointer_enter(&mut self) -> TimerCommand {
        match self.phase {
            HoverPhase::Closed | HoverPhase::Open => {
                self.phase = HoverPhase::Open;
                TimerCommand::None
            }
            HoverPhase::Closing(token) => {
                self.phase = HoverPhase::Open;
                TimerCommand::Cancel(token)
            }
            HoverPhase::Unmounted => TimerCommand::None,
        }
    }

    /// Pointer left trigger or panel. Starts the close timer unless one is
    /// already running.
    pub fn pointer_leave(&mut self) -> TimerCommand {
        match self.phase {
            HoverPhase::Open => {
                let token = TimerToken(self.next_token);
                self.next_token += 1;
                self.phase = HoverPhase::Closing(token);
                TimerCommand::Schedule {
                    token,
                    delay: self.close_delay,
                }
            }
            // Leave events for trigger and panel can both arrive; the first
            // one's timer stands.
            HoverPhase::Closing(_) | HoverPhase::Closed | HoverPhase::Unmounted => {
                TimerCommand::None
            }
        }
    }

    /// A close timer fired. Returns `true` when this closed the panel; stale
    /// tokens are ignored.
    pub fn timer_fired(&mut self, token: TimerToken) -> bool {
        if self.phase == HoverPhase::Closing(token) {
            self.phase = HoverPhase::Closed;
            true
        } else {
            false
        }
    }

    /// Owner is going away. The returned command cancels any pending close.
    pub fn unmount(&mut self) -> TimerCommand {
        let command = match self.phase {
            HoverPhase::Closing(token) => TimerCommand::Cancel(token),
            _ => TimerCommand::None,
        };
        self.phase = HoverPhase::Unmounted;
        command
    }
}

// ============================================================================
// Controller
// ============================================================================

type VisibilityObserver = Box<dyn Fn(bool)>;

struct Shared<S: Scheduler> {
    intent: RefCell<HoverIntent>,
    timer: RefCell<Option<(TimerToken, S::Handle)>>,
    observer: VisibilityObserver,
}

/// [`HoverIntent`] wired to a [`Scheduler`].
///
/// Visibility changes are pushed to the observer given at construction; the
/// component layer uses it to flip a signal. Cloning yields another handle to
/// the same menu.
pub struct HoverController<S: Scheduler> {
    shared: Rc<Shared<S>>,
    scheduler: S,
}

impl<S: Scheduler + Clone> Clone for HoverController<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<S> HoverController<S>
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
{
    pub fn new(scheduler: S, close_delay: Duration, observer: impl Fn(bool) + 'static) -> Self {
        Self {
            shared: Rc::new(Shared {
                intent: RefCell::new(HoverIntent::new(close_delay)),
                timer: RefCell::new(None),
                observer: Box::new(observer),
            }),
            scheduler,
        }
    }

    pub fn is_open(&self) -> bool {
        self.shared.intent.borrow().is_open()
    }

    pub fn phase(&self) -> HoverPhase {
        self.shared.intent.borrow().phase()
    }

    pub fn pointer_enter(&self) {
        let was_open = self.is_open();
        let command = self.shared.intent.borrow_mut().pointer_enter();
        self.apply(command);
        if !was_open && self.is_open() {
            log::debug!("[storefront][hover] open");
            (self.shared.observer)(true);
        }
    }

    pub fn pointer_leave(&self) {
        let command = self.shared.intent.borrow_mut().pointer_leave();
        self.apply(command);
    }

    /// Tear down: cancel the pending close, ignore every later event.
    pub fn unmount(&self) {
        let command = self.shared.intent.borrow_mut().unmount();
        self.apply(command);
        // Unconditional, whatever phase the machine was in.
        if let Some((_, handle)) = self.shared.timer.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }
        log::trace!("[storefront][hover] unmounted");
    }

    fn apply(&self, command: TimerCommand) {
        match command {
            TimerCommand::None => {}
            TimerCommand::Cancel(token) => {
                let current = self.shared.timer.borrow_mut().take();
                if let Some((scheduled, handle)) = current {
                    debug_assert_eq!(scheduled, token);
                    self.scheduler.cancel(handle);
                    log::trace!("[storefront][hover] close cancelled");
                }
            }
            TimerCommand::Schedule { token, delay } => {
                let weak: Weak<Shared<S>> = Rc::downgrade(&self.shared);
                let handle = self.scheduler.schedule(
                    delay,
                    Box::new(move || {
                        if let Some(shared) = weak.upgrade() {
                            Self::on_timer(&shared, token);
                        }
                    }),
                );
                *self.shared.timer.borrow_mut() = Some((token, handle));
                log::trace!("[storefront][hover] close scheduled in {:?}", delay);
            }
        }
    }

    fn on_timer(shared: &Shared<S>, token: TimerToken) {
        {
            let mut timer = shared.timer.borrow_mut();
            if matches!(*timer, Some((scheduled, _)) if scheduled == token) {
                *timer = None;
            }
        }
        let closed = shared.intent.borrow_mut().timer_fired(token);
        if closed {
            log::debug!("[storefront][hover] closed");
            (shared.observer)(false);
        }
    }
}

impl<S: Scheduler> std::fmt::Debug for HoverController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverController")
            .field("intent", &*self.shared.intent.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use pretty_assertions::assert_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Controller on a manual clock recording every visibility change.
    fn harness(
        delay: Duration,
    ) -> (
        HoverController<ManualScheduler>,
        ManualScheduler,
        Rc<RefCell<Vec<bool>>>,
    ) {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let controller = HoverController::new(clock.clone(), delay, move |open| {
            sink.borrow_mut().push(open);
        });
        (controller, clock, log)
    }

    // ------------------------------------------------------------------
    // HoverIntent
    // ------------------------------------------------------------------

    #[test]
    fn starts_closed() {
        let intent = HoverIntent::default();
        assert_eq!(intent.phase(), HoverPhase::Closed);
        assert!(!intent.is_open());
        assert_eq!(intent.close_delay(), DEFAULT_CLOSE_DELAY);
    }

    #[test]
    fn enter_opens_without_timer() {
        let mut intent = HoverIntent::default();
        assert_eq!(intent.pointer_enter(), TimerCommand::None);
        assert_eq!(intent.phase(), HoverPhase::Open);
    }

    #[test]
    fn leave_schedules_and_stays_visible() {
        let mut intent = HoverIntent::new(ms(250));
        intent.pointer_enter();
        let command = intent.pointer_leave();

        let token = intent.pending_close().expect("close pending");
        assert_eq!(command, TimerCommand::Schedule { token, delay: ms(250) });
        assert!(intent.is_open());
    }

    #[test]
    fn reenter_cancels_pending_close() {
        let mut intent = HoverIntent::default();
        intent.pointer_enter();
        intent.pointer_leave();
        let token = intent.pending_close().expect("close pending");

        assert_eq!(intent.pointer_enter(), TimerCommand::Cancel(token));
        assert_eq!(intent.phase(), HoverPhase::Open);
        assert!(!intent.timer_fired(token), "cancelled token must not close");
        assert!(intent.is_open());
    }

    #[test]
    fn second_leave_keeps_first_timer() {
        let mut intent = HoverIntent::default();
        intent.pointer_enter();
        intent.pointer_leave();
        let first = intent.pending_close();

        assert_eq!(intent.pointer_leave(), TimerCommand::None);
        assert_eq!(intent.pending_close(), first);
    }

    #[test]
    fn leave_while_closed_is_ignored() {
        let mut intent = HoverIntent::default();
        assert_eq!(intent.pointer_leave(), TimerCommand::None);
        assert_eq!(intent.phase(), HoverPhase::Closed);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut intent = HoverIntent::default();
        intent.pointer_enter();
        intent.pointer_leave();
        let old = intent.pending_close().expect("first close");
        intent.pointer_enter();
        intent.pointer_leave();
        let fresh = intent.pending_close().expect("second close");

        assert_ne!(old, fresh);
        assert!(!intent.timer_fired(old));
        assert!(intent.timer_fired(fresh));
        assert_eq!(intent.phase(), HoverPhase::Closed);
    }

    #[test]
    fn unmount_is_terminal() {
        let mut intent = HoverIntent::default();
        intent.pointer_enter();
        intent.pointer_leave();
        let token = intent.pending_close().expect("close pending");

        assert_eq!(intent.unmount(), TimerCommand::Cancel(token));
        assert_eq!(intent.phase(), HoverPhase::Unmounted);
        assert_eq!(intent.pointer_enter(), TimerCommand::None);
        assert!(!intent.timer_fired(token));
        assert_eq!(intent.phase(), HoverPhase::Unmounted);
    }

    // ------------------------------------------------------------------
    // HoverController on a manual clock
    // ------------------------------------------------------------------

    #[test]
    fn opens_instantly() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);

        menu.pointer_enter();

        assert!(menu.is_open());
        assert_eq!(*log.borrow(), vec![true]);
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.scheduled_total(), 0);
    }

    #[test]
    fn quick_reentry_never_closes() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();

        menu.pointer_leave();
        clock.advance(ms(60));
        assert!(menu.is_open());
        menu.pointer_enter();
        clock.advance(ms(500));

        assert!(menu.is_open());
        assert_eq!(*log.borrow(), vec![true]);
        assert_eq!(clock.fired_total(), 0);
        assert_eq!(clock.cancelled_total(), 1);
    }

    #[test]
    fn closes_after_delay_not_before() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();
        menu.pointer_leave();

        clock.advance(ms(99));
        assert!(menu.is_open());
        assert_eq!(*log.borrow(), vec![true]);

        clock.advance(ms(1));
        assert!(!menu.is_open());
        assert_eq!(menu.phase(), HoverPhase::Closed);
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn leave_restarts_full_window() {
        let (menu, clock, _log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();
        menu.pointer_leave();
        clock.advance(ms(80));
        menu.pointer_enter();
        menu.pointer_leave();

        clock.advance(ms(80));
        assert!(menu.is_open(), "second leave gets its own 100ms");
        clock.advance(ms(20));
        assert!(!menu.is_open());
    }

    #[test]
    fn at_most_one_pending_timer() {
        let (menu, clock, _log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();

        for step in 0..50u64 {
            menu.pointer_leave();
            menu.pointer_leave();
            clock.advance(ms(step % 7));
            menu.pointer_enter();
            assert!(clock.pending() <= 1);
        }
        menu.pointer_leave();

        assert_eq!(clock.max_pending(), 1);
        assert_eq!(clock.scheduled_total(), 51);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn custom_delay_is_honoured() {
        let (menu, clock, _log) = harness(ms(300));
        menu.pointer_enter();
        menu.pointer_leave();

        clock.advance(ms(299));
        assert!(menu.is_open());
        clock.advance(ms(1));
        assert!(!menu.is_open());
    }

    #[test]
    fn unmount_cancels_pending_close() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();
        menu.pointer_leave();
        assert_eq!(clock.pending(), 1);

        menu.unmount();
        assert_eq!(clock.pending(), 0);
        clock.advance(ms(250));

        assert_eq!(clock.fired_total(), 0);
        assert_eq!(menu.phase(), HoverPhase::Unmounted);
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn events_after_unmount_do_nothing() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);
        menu.unmount();

        menu.pointer_enter();
        menu.pointer_leave();
        clock.advance(ms(250));

        assert!(!menu.is_open());
        assert!(log.borrow().is_empty());
        assert_eq!(clock.scheduled_total(), 0);
    }

    #[test]
    fn dropped_controller_timer_is_inert() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();
        menu.pointer_leave();
        drop(menu);

        clock.advance(ms(250));

        assert_eq!(clock.fired_total(), 1);
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn reopens_after_close() {
        let (menu, clock, log) = harness(DEFAULT_CLOSE_DELAY);
        menu.pointer_enter();
        menu.pointer_leave();
        clock.advance(ms(100));
        menu.pointer_enter();

        assert!(menu.is_open());
        assert_eq!(*log.borrow(), vec![true, false, true]);
    }
}
