//! Sequence the dismissal of nested menus over time.
//!
//! A graceful close runs in two timed steps measured from the close request:
//! first every nested menu retracts, then the root hides.
//!
//! ```text
//! Open ──close_graceful──▶ ClosingChildren ──T1──▶ ClosingRoot ──T2──▶ Closed
//!   └──────────────────── close_immediate (from any phase) ───────────▶ Closed
//! ```
use super::session::Session;
use crate::core::settings::Timing;
use crate::core::time::Instant;
use crate::runtime::{Generation, SessionGate, Timers};

/// The phase of a menu lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The menu is open and reacts to hover.
    Open,
    /// The close sequence started; nested menus are about to retract.
    ClosingChildren,
    /// Nested menus retracted; the root is about to hide.
    ClosingRoot,
    /// No menu is shown.
    Closed,
}

impl Phase {
    /// Returns true while a close sequence is running.
    pub fn is_closing(self) -> bool {
        matches!(self, Phase::ClosingChildren | Phase::ClosingRoot)
    }
}

/// A timed step of the close sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Clear the hover of every level, retracting all nested menus.
    RetractChildren,
    /// Hide the root menu and end the session.
    HideRoot,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    generation: Generation,
    step: Step,
}

/// Schedules the steps of graceful closes and hands them back once due.
#[derive(Debug, Default)]
pub struct CloseChoreographer {
    timers: Timers<Scheduled>,
}

impl CloseChoreographer {
    /// Creates an idle [`CloseChoreographer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the close sequence of `session` at `now`.
    pub(super) fn begin(&mut self, session: &mut Session, now: Instant, timing: &Timing) {
        session.phase = Phase::ClosingChildren;

        let generation = session.generation;
        let retract_at = now + timing.close_children_delay();
        let hide_at = (now + timing.close_root_delay()).max(retract_at);

        let retract = self.timers.schedule(
            retract_at,
            Scheduled {
                generation,
                step: Step::RetractChildren,
            },
        );
        let hide = self.timers.schedule(
            hide_at,
            Scheduled {
                generation,
                step: Step::HideRoot,
            },
        );

        session.timers = vec![retract, hide];
    }

    /// Drops the handles of `session` whose timers already fired.
    pub(super) fn forget_fired(&self, session: &mut Session) {
        session
            .timers
            .retain(|handle| self.timers.is_pending(*handle));
    }

    /// Cancels every pending step, returning how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        self.timers.cancel_all()
    }

    /// Returns true if no step is pending.
    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    /// Returns when the next step becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns the next step due at `now` that still belongs to the live
    /// session. Steps of superseded sessions are discarded.
    pub fn next_due(&mut self, now: Instant, gate: &SessionGate) -> Option<Step> {
        while let Some(scheduled) = self.timers.pop_due(now) {
            if gate.is_current(scheduled.generation) {
                return Some(scheduled.step);
            }

            log::trace!(
                "Dropped stale {:?} of session {}",
                scheduled.step,
                scheduled.generation
            );
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use crate::core::time::milliseconds;

    fn session(gate: &mut SessionGate) -> Session {
        Session::new(gate.advance(), Point::ORIGIN, Point::ORIGIN, Vec::new())
    }

    #[test]
    fn test_steps_are_due_in_order() {
        let start = Instant::now();
        let timing = Timing::default();
        let mut gate = SessionGate::new();
        let mut session = session(&mut gate);
        let mut choreographer = CloseChoreographer::new();

        choreographer.begin(&mut session, start, &timing);

        assert_eq!(session.phase, Phase::ClosingChildren);
        assert_eq!(session.timers.len(), 2);
        assert_eq!(choreographer.next_deadline(), Some(start + milliseconds(20)));
        assert_eq!(choreographer.next_due(start + milliseconds(19), &gate), None);
        assert_eq!(
            choreographer.next_due(start + milliseconds(21), &gate),
            Some(Step::RetractChildren)
        );

        choreographer.forget_fired(&mut session);

        assert_eq!(session.timers.len(), 1);
        assert_eq!(choreographer.next_due(start + milliseconds(139), &gate), None);
        assert_eq!(
            choreographer.next_due(start + milliseconds(141), &gate),
            Some(Step::HideRoot)
        );
        assert!(choreographer.is_idle());
    }

    #[test]
    fn test_steps_of_superseded_sessions_are_dropped() {
        let start = Instant::now();
        let mut gate = SessionGate::new();
        let mut stale = session(&mut gate);
        let mut choreographer = CloseChoreographer::new();

        choreographer.begin(&mut stale, start, &Timing::default());

        let _live = gate.advance();

        assert_eq!(choreographer.next_due(start + milliseconds(500), &gate), None);
        assert!(choreographer.is_idle());
    }

    #[test]
    fn test_root_never_hides_before_children_retract() {
        let start = Instant::now();
        let timing = Timing {
            close_children_delay_ms: 100,
            close_root_delay_ms: 50,
        };
        let mut gate = SessionGate::new();
        let mut session = session(&mut gate);
        let mut choreographer = CloseChoreographer::new();

        choreographer.begin(&mut session, start, &timing);

        assert_eq!(choreographer.next_due(start + milliseconds(60), &gate), None);
        assert_eq!(
            choreographer.next_due(start + milliseconds(100), &gate),
            Some(Step::RetractChildren)
        );
        assert_eq!(
            choreographer.next_due(start + milliseconds(100), &gate),
            Some(Step::HideRoot)
        );
    }

    #[test]
    fn test_phase_is_closing() {
        assert!(!Phase::Open.is_closing());
        assert!(Phase::ClosingChildren.is_closing());
        assert!(Phase::ClosingRoot.is_closing());
        assert!(!Phase::Closed.is_closing());
    }
}
