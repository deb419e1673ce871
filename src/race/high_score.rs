//! Best-time tracking and persistence.
//!
//! Lower is better. `f32::INFINITY` is the "no valid record yet" sentinel.

use crate::save::SharedSaveProvider;

/// Tracks the best finished time for one save key.
///
/// Loads from the store at construction; only a strictly better finite time
/// replaces the record.
pub struct HighScoreService {
    save: SharedSaveProvider,
    best_time_key: String,
    best_time_seconds: f32,
}

impl HighScoreService {
    /// Create the service and immediately load the stored record.
    ///
    /// Fails if the save key is empty or whitespace.
    pub fn new(save: SharedSaveProvider, best_time_key: &str) -> Result<Self, HighScoreError> {
        if best_time_key.trim().is_empty() {
            return Err(HighScoreError::EmptySaveKey);
        }

        let mut service = Self {
            save,
            best_time_key: best_time_key.to_string(),
            best_time_seconds: f32::INFINITY,
        };
        service.load();

        Ok(service)
    }

    /// Current best time, or `f32::INFINITY` when no valid record exists.
    pub fn best_time_seconds(&self) -> f32 {
        self.best_time_seconds
    }

    /// Re-read the record from the store.
    ///
    /// A stored value that is NaN, infinite, or negative counts as no record.
    pub fn load(&mut self) {
        let stored = self
            .save
            .lock()
            .unwrap()
            .get_float(&self.best_time_key, f32::INFINITY);

        self.best_time_seconds = sanitize_time(stored);
    }

    /// Submit a finished time. Returns true if it became the new record.
    ///
    /// Invalid times (NaN, infinite, negative) never become records and leave
    /// the store untouched. Equal times are not new records.
    pub fn try_submit_time(&mut self, finished_time_seconds: f32) -> bool {
        let time = sanitize_time(finished_time_seconds);

        // No valid time submitted
        if time.is_infinite() {
            return false;
        }

        let new_record = time < self.best_time_seconds;

        if new_record {
            self.best_time_seconds = time;

            let mut save = self.save.lock().unwrap();
            save.set_float(&self.best_time_key, time);
            save.save();

            tracing::info!(
                "New best time {:.3}s saved under {:?}",
                time,
                self.best_time_key
            );
        }

        new_record
    }
}

/// Collapse NaN, infinite, and negative times to the no-record sentinel.
fn sanitize_time(time: f32) -> f32 {
    if time.is_nan() || time.is_infinite() || time < 0.0 {
        f32::INFINITY
    } else {
        time
    }
}

/// High-score errors.
#[derive(Debug, thiserror::Error)]
pub enum HighScoreError {
    #[error("Best time save key cannot be empty")]
    EmptySaveKey,
}
