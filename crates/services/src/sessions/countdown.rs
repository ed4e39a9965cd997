//
// ─── TICK OUTCOME ──────────────────────────────────────────────────────────────
//

/// Result of advancing the countdown by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown advanced; this many seconds remain.
    Running(u32),
    /// The countdown just reached zero. Emitted exactly once.
    Expired,
    /// The countdown is stopped or paused; the tick was a no-op.
    Idle,
}

//
// ─── COUNTDOWN ─────────────────────────────────────────────────────────────────
//

/// One-second countdown driven by an external tick source.
///
/// The countdown itself does not schedule anything: the owner calls
/// [`Countdown::tick`] once per second. Reaching zero yields
/// [`TickOutcome::Expired`] on that tick only; every later tick, and every
/// tick after [`Countdown::cancel`], is `Idle`. The remaining time never
/// goes negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    paused: bool,
    stopped: bool,
}

impl Countdown {
    /// Creates a countdown with the given budget in seconds.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            paused: false,
            stopped: false,
        }
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.stopped || self.paused {
            return TickOutcome::Idle;
        }
        if self.remaining == 0 {
            // Zero-budget countdown expires on its first tick.
            self.stopped = true;
            return TickOutcome::Expired;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.stopped = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Running(self.remaining)
        }
    }

    /// Suspends decrementing. Wall-clock elapsed time is unaffected.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes decrementing after a pause.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Stops the countdown. Idempotent; later ticks are no-ops.
    pub fn cancel(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_expires_once() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), TickOutcome::Running(2));
        assert_eq!(countdown.tick(), TickOutcome::Running(1));
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn zero_budget_expires_on_first_tick() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.tick(), TickOutcome::Idle);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut countdown = Countdown::new(10);
        countdown.cancel();
        countdown.cancel();
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn paused_ticks_do_not_decrement() {
        let mut countdown = Countdown::new(5);
        countdown.pause();
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 5);

        countdown.resume();
        assert_eq!(countdown.tick(), TickOutcome::Running(4));
    }
}
