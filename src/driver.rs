use std::time::Duration;
use std::time::Instant;

use tracing::debug;

/// A tick handed out by [`Driver::poll`].
///
/// The tick remembers which chain it belongs to; rescheduling with a tick
/// from a cancelled chain is a no-op.
#[derive(Clone, Copy, Debug)]
pub struct Tick {
    chain: u64,
}

/// Cancellable repeating-tick scheduler.
///
/// Each call to [`start`] begins a new chain of ticks and invalidates every
/// tick of earlier chains. The reference behavior this replaces let a
/// pending callback from before a pause/resume keep running alongside the
/// new one; here a stale tick can fire at most once into [`reschedule`],
/// where its chain token no longer matches and it is dropped.
///
/// [`start`]: Driver::start
/// [`reschedule`]: Driver::reschedule
pub struct Driver {
    /// Delay between one tick's completion and the next tick's due time
    delay: Duration,

    /// Token of the current chain
    chain: u64,

    /// Due time of the scheduled tick, if any
    due: Option<Instant>,
}

impl Driver {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            chain: 0,
            due: None,
        }
    }

    /// Begin a new chain with its first tick due immediately.
    pub fn start(&mut self, now: Instant) {
        self.chain += 1;
        self.due = Some(now);

        debug!(chain = self.chain, "driver chain started");
    }

    /// Stop the current chain. Any outstanding [`Tick`] becomes stale.
    pub fn cancel(&mut self) {
        self.chain += 1;
        self.due = None;

        debug!("driver chain cancelled");
    }

    pub fn is_scheduled(&self) -> bool {
        self.due.is_some()
    }

    /// Due time of the next tick, if one is scheduled.
    pub fn next_due(&self) -> Option<Instant> {
        self.due
    }

    /// Take the scheduled tick if it is due.
    ///
    /// The caller performs one simulation step, then hands the tick back to
    /// [`Driver::reschedule`] to keep the chain going.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        let due = self.due?;

        if now < due {
            return None;
        }

        self.due = None;

        Some(Tick { chain: self.chain })
    }

    /// Schedule the follow-up of `tick` after the configured delay.
    ///
    /// Returns false, and schedules nothing, if `tick` belongs to a chain
    /// that has since been cancelled or restarted.
    pub fn reschedule(&mut self, tick: Tick, now: Instant) -> bool {
        if tick.chain != self.chain {
            debug!(
                stale = tick.chain,
                current = self.chain,
                "dropping tick from stale chain"
            );

            return false;
        }

        self.due = Some(now + self.delay);

        true
    }
}
