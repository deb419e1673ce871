//! Composition root and headless session driver.
//!
//! Wires the save provider, timer, high-score service, and race flow
//! together with explicit construction, then drives the flow with a fixed
//! timestep the way an engine update loop would.

use crate::config::GameConfig;
use crate::hud::HudView;
use crate::race::flow::{RaceFlow, RaceState};
use crate::race::high_score::{HighScoreError, HighScoreService};
use crate::race::timer::RaceTimer;
use crate::save::SharedSaveProvider;

/// Fixed frame delta for the headless session, in seconds.
const FRAME_DT_SECONDS: f32 = 1.0 / 60.0;

/// Scripted demo car: distance to the finish trigger and constant speed.
/// This is scene glue, not a physics model.
const TRACK_LENGTH_METERS: f32 = 180.0;
const CAR_SPEED_MPS: f32 = 24.0;

/// Hard cap on simulated frames, in case the session never finishes.
const MAX_FRAMES: u32 = 60 * 60 * 10;

/// Outcome of one headless race session.
#[derive(Debug, Clone, Copy)]
pub struct SessionSummary {
    pub final_time_seconds: f32,
    pub new_record: bool,
    pub best_time_seconds: f32,
}

/// The assembled game: race core plus display sink.
pub struct GameApp {
    flow: RaceFlow,
    hud: HudView,
}

impl GameApp {
    /// Build the game from a config and a save provider.
    pub fn new(config: GameConfig, save: SharedSaveProvider) -> Result<Self, HighScoreError> {
        let (timer, timer_rx) = RaceTimer::new();
        let high_score = HighScoreService::new(save, &config.best_time_save_key)?;

        let best_time = high_score.best_time_seconds();
        let (flow, race_rx) = RaceFlow::new(config.clone(), timer, high_score);
        let hud = HudView::new(&config, race_rx, timer_rx, best_time);

        Ok(Self { flow, hud })
    }

    /// The race state machine.
    pub fn flow(&self) -> &RaceFlow {
        &self.flow
    }

    /// Mutable access for hosts that forward their own commands.
    pub fn flow_mut(&mut self) -> &mut RaceFlow {
        &mut self.flow
    }

    /// The display sink.
    pub fn hud(&self) -> &HudView {
        &self.hud
    }

    /// Run one scripted race to the finish trigger and return the outcome.
    ///
    /// Starts the race (countdown included if configured), advances the demo
    /// car at constant speed while racing, and finishes when it crosses the
    /// track length.
    pub fn run_session(&mut self) -> SessionSummary {
        self.flow.start_race();

        let mut distance = 0.0_f32;
        let mut frames = 0_u32;

        while self.flow.state() != RaceState::Finished && frames < MAX_FRAMES {
            self.flow.tick(FRAME_DT_SECONDS);

            if self.flow.state() == RaceState::Racing {
                distance += CAR_SPEED_MPS * FRAME_DT_SECONDS;
                if distance >= TRACK_LENGTH_METERS {
                    self.flow.finish_race();
                }
            }

            self.hud.poll();
            frames += 1;
        }

        SessionSummary {
            final_time_seconds: self.flow.final_time_seconds(),
            new_record: self.flow.is_new_record(),
            best_time_seconds: self.flow.high_score().best_time_seconds(),
        }
    }
}
