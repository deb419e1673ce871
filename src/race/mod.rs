//! Race core: countdown, stopwatch timer, best-time tracking.
//!
//! Everything here is single-threaded and frame-driven; the host loop owns
//! the clock and pushes deltas in through [`RaceFlow::tick`].

pub mod events;
pub mod flow;
pub mod high_score;
pub mod timer;

// Re-export commonly used types
pub use events::{RaceEvent, TimerEvent};
pub use flow::{RaceFlow, RaceState};
pub use high_score::HighScoreService;
pub use timer::RaceTimer;
