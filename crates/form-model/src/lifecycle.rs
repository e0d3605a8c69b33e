//! Submission Lifecycle
//!
//! Idle → Validating → Submitting → (Idle | TimedOut).
//! The fallback timer keeps a stalled request from leaving the form locked.

use crate::timer::{Ticket, TimerGate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Submitting,
    TimedOut,
}

impl Phase {
    /// Whether the loading view (overlay, disabled button) is shown
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Submitting)
    }
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision<F> {
    /// Required fields missing, in form order. Browser submit must be cancelled.
    Blocked(Vec<F>),
    /// Let the browser post. Schedule the fallback timer with this ticket.
    Proceed(Ticket),
    /// Already submitting. Browser submit must be cancelled.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionLifecycle {
    phase: Phase,
    timer: TimerGate,
}

impl SubmissionLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the synchronous required-field check and move to the next phase
    pub fn attempt<F>(&mut self, missing_fields: impl FnOnce() -> Vec<F>) -> SubmitDecision<F> {
        if self.phase == Phase::Submitting {
            tracing::debug!("submit ignored, request already in flight");
            return SubmitDecision::Ignored;
        }

        self.phase = Phase::Validating;
        let missing = missing_fields();
        if !missing.is_empty() {
            tracing::info!(missing = missing.len(), "submit blocked by required fields");
            self.phase = Phase::Idle;
            return SubmitDecision::Blocked(missing);
        }

        self.phase = Phase::Submitting;
        tracing::info!("submitting report");
        SubmitDecision::Proceed(self.timer.arm())
    }

    /// Fallback timer callback. True when the view must be restored.
    pub fn timeout(&mut self, ticket: Ticket) -> bool {
        if !self.timer.fire(ticket) || self.phase != Phase::Submitting {
            return false;
        }
        tracing::warn!("submission timed out, restoring form");
        self.phase = Phase::TimedOut;
        true
    }

    /// Force the interactive state (page load, uncaught error).
    /// Returns true if a submission was in flight.
    pub fn reset(&mut self) -> bool {
        self.timer.disarm();
        let was_busy = self.phase.is_busy();
        self.phase = Phase::Idle;
        was_busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proceed(lc: &mut SubmissionLifecycle) -> Ticket {
        match lc.attempt(Vec::<&str>::new) {
            SubmitDecision::Proceed(t) => t,
            other => panic!("expected Proceed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_block_and_return_to_idle() {
        let mut lc = SubmissionLifecycle::new();
        let decision = lc.attempt(|| vec!["cliente", "equipo"]);
        assert_eq!(decision, SubmitDecision::Blocked(vec!["cliente", "equipo"]));
        assert_eq!(lc.phase(), Phase::Idle);
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut lc = SubmissionLifecycle::new();
        proceed(&mut lc);
        assert_eq!(lc.phase(), Phase::Submitting);
        assert!(lc.phase().is_busy());
    }

    #[test]
    fn test_timeout_restores_once() {
        let mut lc = SubmissionLifecycle::new();
        let ticket = proceed(&mut lc);
        assert!(lc.timeout(ticket));
        assert_eq!(lc.phase(), Phase::TimedOut);
        assert!(!lc.phase().is_busy());
        assert!(!lc.timeout(ticket));
    }

    #[test]
    fn test_reset_disarms_timer() {
        let mut lc = SubmissionLifecycle::new();
        let ticket = proceed(&mut lc);
        assert!(lc.reset());
        assert!(!lc.timeout(ticket));
        assert_eq!(lc.phase(), Phase::Idle);
        assert!(!lc.reset());
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut lc = SubmissionLifecycle::new();
        proceed(&mut lc);
        assert_eq!(lc.attempt(Vec::<&str>::new), SubmitDecision::Ignored);
    }

    #[test]
    fn test_retry_after_timeout_uses_fresh_timer() {
        let mut lc = SubmissionLifecycle::new();
        let first = proceed(&mut lc);
        assert!(lc.timeout(first));
        let second = proceed(&mut lc);
        assert!(!lc.timeout(first));
        assert!(lc.timeout(second));
    }
}
