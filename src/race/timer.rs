//! Stopwatch-style race timer.
//!
//! Accumulates elapsed time from externally supplied frame deltas. The timer
//! has no clock of its own; the host loop feeds it `tick(dt)` every frame.

use tokio::sync::broadcast;

use super::events::{TimerEvent, EVENT_CHANNEL_CAPACITY};

/// Elapsed-time accumulator with start/stop/reset semantics.
///
/// Invariant: `elapsed_time` only changes through an effective `tick` while
/// running, or through `reset` (back to 0).
pub struct RaceTimer {
    running: bool,
    elapsed: f32,
    event_tx: broadcast::Sender<TimerEvent>,
}

impl RaceTimer {
    /// Create a new stopped timer at 0.
    pub fn new() -> (Self, broadcast::Receiver<TimerEvent>) {
        let (tx, rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        (
            Self {
                running: false,
                elapsed: 0.0,
                event_tx: tx,
            },
            rx,
        )
    }

    /// Whether elapsed time accumulates on tick.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds accumulated since the last reset.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }

    /// Start accumulating. Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop accumulating. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero the timer. Always emits a time-changed event with 0.
    pub fn reset(&mut self) {
        self.running = false;
        self.set_elapsed(0.0);
    }

    /// Advance the timer by `dt` seconds.
    ///
    /// No-op while stopped or for `dt <= 0`; an ignored delta is not an error
    /// and emits nothing.
    pub fn tick(&mut self, dt: f32) {
        if !self.running || dt <= 0.0 {
            return;
        }

        self.set_elapsed(self.elapsed + dt);
    }

    /// Subscribe to time-changed events.
    pub fn subscribe(&self) -> broadcast::Receiver<TimerEvent> {
        self.event_tx.subscribe()
    }

    fn set_elapsed(&mut self, value: f32) {
        self.elapsed = value;
        let _ = self.event_tx.send(TimerEvent::TimeChanged {
            elapsed_seconds: value,
        });
    }
}

impl Default for RaceTimer {
    fn default() -> Self {
        let (timer, _) = Self::new();
        timer
    }
}
