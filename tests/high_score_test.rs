//! Unit tests for the HighScoreService.

use std::sync::{Arc, Mutex};

use timetrial::race::high_score::{HighScoreError, HighScoreService};
use timetrial::save::{MemorySaveProvider, SaveProvider, SharedSaveProvider};

fn store() -> Arc<Mutex<MemorySaveProvider>> {
    Arc::new(Mutex::new(MemorySaveProvider::new()))
}

fn service(store: &Arc<Mutex<MemorySaveProvider>>, key: &str) -> HighScoreService {
    let shared: SharedSaveProvider = store.clone();
    HighScoreService::new(shared, key).expect("Should create service")
}

#[test]
fn test_empty_key_is_rejected() {
    let shared: SharedSaveProvider = store();
    assert!(matches!(
        HighScoreService::new(shared, ""),
        Err(HighScoreError::EmptySaveKey)
    ));

    let shared: SharedSaveProvider = store();
    assert!(matches!(
        HighScoreService::new(shared, "   "),
        Err(HighScoreError::EmptySaveKey)
    ));
}

#[test]
fn test_no_stored_key_means_no_record() {
    let save = store();
    let service = service(&save, "BEST");

    assert_eq!(service.best_time_seconds(), f32::INFINITY);
}

#[test]
fn test_loads_stored_best_time() {
    let save = store();
    save.lock().unwrap().set_float("BEST", 12.5);

    let service = service(&save, "BEST");

    assert_eq!(service.best_time_seconds(), 12.5);
}

#[test]
fn test_invalid_stored_value_collapses_to_no_record() {
    for bad in [f32::NAN, f32::NEG_INFINITY, -3.0] {
        let save = store();
        save.lock().unwrap().set_float("BEST", bad);

        let service = service(&save, "BEST");

        assert_eq!(service.best_time_seconds(), f32::INFINITY);
    }
}

#[test]
fn test_first_time_becomes_record_and_is_flushed() {
    let save = store();
    let mut service = service(&save, "BEST");

    assert!(service.try_submit_time(10.0));

    assert_eq!(service.best_time_seconds(), 10.0);
    let save = save.lock().unwrap();
    assert!(save.has_key("BEST"));
    assert_eq!(save.get_float("BEST", -1.0), 10.0);
    assert_eq!(save.save_calls(), 1);
}

#[test]
fn test_worse_time_is_not_saved() {
    let save = store();
    save.lock().unwrap().set_float("BEST", 10.0);
    let mut service = service(&save, "BEST");

    assert!(!service.try_submit_time(12.0));

    assert_eq!(service.best_time_seconds(), 10.0);
    let save = save.lock().unwrap();
    assert_eq!(save.get_float("BEST", -1.0), 10.0);
    assert_eq!(save.save_calls(), 0);
}

#[test]
fn test_equal_time_is_not_a_new_record() {
    let save = store();
    save.lock().unwrap().set_float("BEST", 10.0);
    let mut service = service(&save, "BEST");

    assert!(!service.try_submit_time(10.0));
    assert_eq!(save.lock().unwrap().save_calls(), 0);
}

#[test]
fn test_better_time_replaces_record() {
    let save = store();
    save.lock().unwrap().set_float("BEST", 10.0);
    let mut service = service(&save, "BEST");

    assert!(service.try_submit_time(9.5));

    assert_eq!(service.best_time_seconds(), 9.5);
    let save = save.lock().unwrap();
    assert_eq!(save.get_float("BEST", -1.0), 9.5);
    assert_eq!(save.save_calls(), 1);
}

#[test]
fn test_invalid_times_are_rejected_without_writes() {
    let save = store();
    let mut service = service(&save, "BEST");

    assert!(!service.try_submit_time(-1.0));
    assert!(!service.try_submit_time(f32::NAN));
    assert!(!service.try_submit_time(f32::INFINITY));

    assert_eq!(service.best_time_seconds(), f32::INFINITY);
    let save = save.lock().unwrap();
    assert!(!save.has_key("BEST"));
    assert_eq!(save.save_calls(), 0);
}

#[test]
fn test_submit_order_keeps_the_lower_time() {
    let save = store();
    let mut service = service(&save, "BEST");

    assert!(service.try_submit_time(5.0));
    assert!(!service.try_submit_time(7.0));

    assert_eq!(service.best_time_seconds(), 5.0);
    assert_eq!(save.lock().unwrap().get_float("BEST", -1.0), 5.0);
}
