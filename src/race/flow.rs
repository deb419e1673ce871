//! Race state machine.
//!
//! Coordinates the countdown, the race timer, and the high-score service.
//! Driven from outside: the host loop calls `tick(dt)` once per frame and
//! forwards start/finish/reset commands.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::config::GameConfig;
use crate::race::events::{RaceEvent, EVENT_CHANNEL_CAPACITY};
use crate::race::high_score::HighScoreService;
use crate::race::timer::RaceTimer;

/// Race state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceState {
    /// Waiting for a start command
    Ready,
    /// Countdown running
    Countdown,
    /// Race running, timer accumulating
    Racing,
    /// Race over, waiting for restart or reset
    Finished,
}

impl RaceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaceState::Ready => "ready",
            RaceState::Countdown => "countdown",
            RaceState::Racing => "racing",
            RaceState::Finished => "finished",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ready" => Some(RaceState::Ready),
            "countdown" => Some(RaceState::Countdown),
            "racing" => Some(RaceState::Racing),
            "finished" => Some(RaceState::Finished),
            _ => None,
        }
    }
}

/// Race state machine: `Ready -> (Countdown) -> Racing -> Finished`.
///
/// The countdown stage is skipped when it is disabled in the config or its
/// duration is zero. Commands in the wrong state are deliberate no-ops, never
/// errors.
pub struct RaceFlow {
    config: GameConfig,
    timer: RaceTimer,
    high_score: HighScoreService,
    state: RaceState,
    /// Continuous countdown remaining, in seconds.
    countdown_remaining: f32,
    /// Whole seconds shown to the player (ceiling of the remaining time).
    countdown_display: u32,
    final_time_seconds: f32,
    new_record: bool,
    event_tx: broadcast::Sender<RaceEvent>,
}

impl RaceFlow {
    /// Create the state machine in `Ready`, owning its timer and high-score
    /// service.
    pub fn new(
        config: GameConfig,
        timer: RaceTimer,
        high_score: HighScoreService,
    ) -> (Self, broadcast::Receiver<RaceEvent>) {
        let (tx, rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        (
            Self {
                config,
                timer,
                high_score,
                state: RaceState::Ready,
                countdown_remaining: 0.0,
                countdown_display: 0,
                final_time_seconds: 0.0,
                new_record: false,
                event_tx: tx,
            },
            rx,
        )
    }

    /// Current state.
    pub fn state(&self) -> RaceState {
        self.state
    }

    /// Continuous countdown remaining. Mainly for debugging.
    pub fn countdown_remaining(&self) -> f32 {
        self.countdown_remaining
    }

    /// Whole seconds of countdown the UI should show.
    pub fn countdown_seconds_display(&self) -> u32 {
        self.countdown_display
    }

    /// Final time of the last finished race, 0 until a race finishes.
    pub fn final_time_seconds(&self) -> f32 {
        self.final_time_seconds
    }

    /// Whether the last finished race set a new record.
    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    /// The owned race timer.
    pub fn timer(&self) -> &RaceTimer {
        &self.timer
    }

    /// The owned high-score service.
    pub fn high_score(&self) -> &HighScoreService {
        &self.high_score
    }

    /// Subscribe to race events.
    pub fn subscribe(&self) -> broadcast::Receiver<RaceEvent> {
        self.event_tx.subscribe()
    }

    /// Advance the state machine by one frame delta. No-op for `dt <= 0`.
    pub fn tick(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        match self.state {
            RaceState::Countdown => self.tick_countdown(dt),
            RaceState::Racing => self.timer.tick(dt),
            RaceState::Ready | RaceState::Finished => {}
        }
    }

    /// Start a race from `Ready` or `Finished`. Ignored in any other state.
    pub fn start_race(&mut self) {
        if self.state != RaceState::Ready && self.state != RaceState::Finished {
            return;
        }

        // Ensures time = 0 and stopped.
        self.timer.reset();

        if self.config.countdown_enabled && self.config.countdown_seconds > 0.0 {
            self.start_countdown();
        } else {
            self.begin_racing();
        }
    }

    /// Finish the race. Ignored unless currently `Racing`.
    pub fn finish_race(&mut self) {
        if self.state != RaceState::Racing {
            return;
        }

        self.timer.stop();

        self.final_time_seconds = self.timer.elapsed_time();
        self.new_record = self.high_score.try_submit_time(self.final_time_seconds);

        tracing::info!(
            "Race finished in {:.3}s (new record: {})",
            self.final_time_seconds,
            self.new_record
        );

        self.go_to(RaceState::Finished);
        let _ = self.event_tx.send(RaceEvent::Finished {
            final_time_seconds: self.final_time_seconds,
            new_record: self.new_record,
        });
    }

    /// Reset everything back to `Ready`.
    pub fn reset_race(&mut self) {
        self.timer.reset();

        self.final_time_seconds = 0.0;
        self.new_record = false;

        self.countdown_remaining = 0.0;
        self.countdown_display = 0;

        self.go_to(RaceState::Ready);
    }

    fn start_countdown(&mut self) {
        self.countdown_remaining = self.config.countdown_seconds;
        self.countdown_display = ceil_non_negative(self.countdown_remaining);

        self.go_to(RaceState::Countdown);
        let _ = self.event_tx.send(RaceEvent::CountdownChanged {
            seconds: self.countdown_display,
        });
    }

    fn tick_countdown(&mut self, dt: f32) {
        self.countdown_remaining -= dt;
        if self.countdown_remaining < 0.0 {
            self.countdown_remaining = 0.0;
        }

        let new_display = ceil_non_negative(self.countdown_remaining);
        if new_display != self.countdown_display {
            self.countdown_display = new_display;
            let _ = self.event_tx.send(RaceEvent::CountdownChanged {
                seconds: self.countdown_display,
            });
        }

        // The tick that drains the countdown is consumed whole; none of it
        // reaches the timer.
        if self.countdown_remaining <= 0.0 {
            self.begin_racing();
        }
    }

    fn begin_racing(&mut self) {
        self.countdown_remaining = 0.0;
        self.countdown_display = 0;

        self.go_to(RaceState::Racing);
        self.timer.start();
    }

    fn go_to(&mut self, next: RaceState) {
        if self.state == next {
            return;
        }

        tracing::debug!("Race state {} -> {}", self.state.as_str(), next.as_str());

        self.state = next;
        let _ = self.event_tx.send(RaceEvent::StateChanged(next));
    }
}

/// Ceiling of a time value, clamped to non-negative.
fn ceil_non_negative(seconds: f32) -> u32 {
    if seconds <= 0.0 {
        return 0;
    }

    let whole = seconds as u32;
    if seconds > whole as f32 {
        whole + 1
    } else {
        whole
    }
}
