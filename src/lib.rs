//! TimeTrial - Minimal 2D Racing Mini-Game Core
//!
//! A car races against the clock to a finish trigger. A countdown optionally
//! precedes the race, elapsed time is tracked by a stopwatch-style timer, and
//! the best time is persisted across sessions through a pluggable key-value
//! save provider. Physics, rendering, and input live in the embedding
//! application; this crate is the race logic and its adapters.

pub mod app;
pub mod config;
pub mod hud;
pub mod race;
pub mod save;

// Re-export commonly used types
pub use app::GameApp;
pub use config::GameConfig;
pub use race::flow::{RaceFlow, RaceState};
pub use race::high_score::HighScoreService;
pub use race::timer::RaceTimer;
pub use save::{FileSaveProvider, MemorySaveProvider, SaveProvider};
