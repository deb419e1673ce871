//! Event types emitted by the race core.
//!
//! Observers (HUD, audio, host glue) subscribe through broadcast channels and
//! drain them once per frame. Sends are synchronous, so events arrive in the
//! order the core produced them.

use crate::race::flow::RaceState;

/// Capacity of the race and timer event channels.
pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Event emitted by [`RaceFlow`](crate::race::flow::RaceFlow).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaceEvent {
    /// The state machine moved to a new state.
    StateChanged(RaceState),
    /// The whole-second countdown display changed. 0 means "countdown over".
    CountdownChanged { seconds: u32 },
    /// The race finished.
    Finished {
        final_time_seconds: f32,
        new_record: bool,
    },
}

/// Event emitted by [`RaceTimer`](crate::race::timer::RaceTimer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    /// Elapsed time changed, either by an effective tick or by a reset.
    TimeChanged { elapsed_seconds: f32 },
}
