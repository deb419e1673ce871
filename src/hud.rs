//! HUD adapter: time formatting and a console-facing display sink.
//!
//! Rendering proper lives in the embedding application; this module only
//! turns core events into display strings.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::config::{GameConfig, TimeFormat};
use crate::race::events::{RaceEvent, TimerEvent};

/// Placeholder shown for times that cannot be rendered (no record yet).
const NO_TIME_TEXT: &str = "--:--";

/// Format a time value for display.
///
/// Non-finite input renders as `--:--`; negative input clamps to 0. The
/// fractional part is truncated, not rounded, so a lap only rolls over to the
/// next displayed hundredth once it has actually elapsed.
pub fn format_time(seconds: f32, format: TimeFormat, millisecond_digits: u8) -> String {
    if !seconds.is_finite() {
        return NO_TIME_TEXT.to_string();
    }

    let seconds = seconds.max(0.0);
    let digits = millisecond_digits.clamp(1, 3) as u32;

    let total_seconds = seconds as u32;
    let minutes = total_seconds / 60;
    let secs = total_seconds % 60;

    let scale = 10u32.pow(digits);
    let fraction = (((seconds - total_seconds as f32) * scale as f32) as u32).min(scale - 1);

    match format {
        TimeFormat::Seconds => format!(
            "{}.{:0width$}",
            total_seconds,
            fraction,
            width = digits as usize
        ),
        TimeFormat::MinutesSeconds => format!("{}:{:02}", minutes, secs),
        TimeFormat::MinutesSecondsMillis => format!(
            "{}:{:02}.{:0width$}",
            minutes,
            secs,
            fraction,
            width = digits as usize
        ),
    }
}

/// Console-facing display sink.
///
/// Drains race and timer events once per frame and keeps the current display
/// strings, the way a screen-space HUD would bind labels.
pub struct HudView {
    time_format: TimeFormat,
    millisecond_digits: u8,
    race_rx: broadcast::Receiver<RaceEvent>,
    timer_rx: broadcast::Receiver<TimerEvent>,
    time_text: String,
    best_time_text: String,
    countdown_text: String,
}

impl HudView {
    /// Create a HUD bound to the given event channels.
    ///
    /// `best_time_seconds` seeds the best-time label; pass the high-score
    /// service's current value.
    pub fn new(
        config: &GameConfig,
        race_rx: broadcast::Receiver<RaceEvent>,
        timer_rx: broadcast::Receiver<TimerEvent>,
        best_time_seconds: f32,
    ) -> Self {
        Self {
            time_format: config.time_format,
            millisecond_digits: config.millisecond_digits,
            race_rx,
            timer_rx,
            time_text: format_time(0.0, config.time_format, config.millisecond_digits),
            best_time_text: format_time(
                best_time_seconds,
                config.time_format,
                config.millisecond_digits,
            ),
            countdown_text: String::new(),
        }
    }

    /// Current race time label.
    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    /// Best time label.
    pub fn best_time_text(&self) -> &str {
        &self.best_time_text
    }

    /// Countdown label; empty when no countdown is showing.
    pub fn countdown_text(&self) -> &str {
        &self.countdown_text
    }

    /// Drain pending events and update the display strings.
    pub fn poll(&mut self) {
        loop {
            match self.timer_rx.try_recv() {
                Ok(TimerEvent::TimeChanged { elapsed_seconds }) => {
                    self.time_text =
                        format_time(elapsed_seconds, self.time_format, self.millisecond_digits);
                }
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }

        loop {
            match self.race_rx.try_recv() {
                Ok(RaceEvent::CountdownChanged { seconds }) => {
                    self.countdown_text = if seconds == 0 {
                        String::new()
                    } else {
                        seconds.to_string()
                    };
                }
                Ok(RaceEvent::Finished {
                    final_time_seconds,
                    new_record,
                }) => {
                    if new_record {
                        self.best_time_text = format_time(
                            final_time_seconds,
                            self.time_format,
                            self.millisecond_digits,
                        );
                    }
                }
                Ok(RaceEvent::StateChanged(_)) => {}
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
    }
}
