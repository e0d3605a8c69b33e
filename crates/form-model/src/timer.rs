//! Timer Gate
//!
//! Clock-free bookkeeping for one-shot timers. The browser schedules the
//! actual callback; the gate decides whether that callback may still act.
//! Re-arming supersedes the previous ticket, which is how trailing-edge
//! debouncing falls out of the same type.

/// Handle of one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct TimerGate {
    generation: u64,
    armed: bool,
}

impl TimerGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the gate. Any earlier ticket is now stale.
    pub fn arm(&mut self) -> Ticket {
        self.generation += 1;
        self.armed = true;
        Ticket(self.generation)
    }

    /// Cancel the pending ticket, if any
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Consume a ticket. True at most once, and only for the latest ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut gate = TimerGate::new();
        let t = gate.arm();
        assert!(gate.fire(t));
        assert!(!gate.fire(t));
        assert!(!gate.is_armed());
    }

    #[test]
    fn test_disarmed_never_fires() {
        let mut gate = TimerGate::new();
        let t = gate.arm();
        gate.disarm();
        assert!(!gate.fire(t));
    }

    #[test]
    fn test_burst_fires_only_last() {
        let mut gate = TimerGate::new();
        let tickets: Vec<Ticket> = (0..5).map(|_| gate.arm()).collect();
        let fired = tickets.iter().filter(|t| gate.fire(**t)).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_stale_ticket_after_rearm() {
        let mut gate = TimerGate::new();
        let old = gate.arm();
        let new = gate.arm();
        assert!(!gate.fire(old));
        assert!(gate.is_armed());
        assert!(gate.fire(new));
    }
}
