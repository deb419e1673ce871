//! Unit tests for HUD time formatting and the display sink.

use timetrial::config::{GameConfig, TimeFormat};
use timetrial::hud::{format_time, HudView};
use timetrial::race::events::{RaceEvent, TimerEvent};
use timetrial::race::flow::RaceState;
use tokio::sync::broadcast;

#[test]
fn test_non_finite_times_render_as_placeholder() {
    for format in [
        TimeFormat::Seconds,
        TimeFormat::MinutesSeconds,
        TimeFormat::MinutesSecondsMillis,
    ] {
        assert_eq!(format_time(f32::NAN, format, 2), "--:--");
        assert_eq!(format_time(f32::INFINITY, format, 2), "--:--");
    }
}

#[test]
fn test_negative_times_clamp_to_zero() {
    assert_eq!(
        format_time(-5.0, TimeFormat::MinutesSecondsMillis, 2),
        "0:00.00"
    );
}

#[test]
fn test_formats() {
    let t = 83.456;

    assert_eq!(format_time(t, TimeFormat::Seconds, 2), "83.45");
    assert_eq!(format_time(t, TimeFormat::MinutesSeconds, 2), "1:23");
    assert_eq!(format_time(t, TimeFormat::MinutesSecondsMillis, 2), "1:23.45");
    assert_eq!(format_time(t, TimeFormat::MinutesSecondsMillis, 1), "1:23.4");
    assert_eq!(
        format_time(t, TimeFormat::MinutesSecondsMillis, 3),
        "1:23.456"
    );
}

#[test]
fn test_fraction_is_truncated_and_clamped() {
    // 59.999 must not roll over to 1:00.
    assert_eq!(
        format_time(59.999, TimeFormat::MinutesSecondsMillis, 2),
        "0:59.99"
    );
}

#[test]
fn test_hud_view_tracks_events() {
    let (race_tx, race_rx) = broadcast::channel(16);
    let (timer_tx, timer_rx) = broadcast::channel(16);

    let config = GameConfig::default();
    let mut hud = HudView::new(&config, race_rx, timer_rx, f32::INFINITY);

    // No record yet: best time shows the placeholder.
    assert_eq!(hud.time_text(), "0:00.00");
    assert_eq!(hud.best_time_text(), "--:--");
    assert_eq!(hud.countdown_text(), "");

    race_tx
        .send(RaceEvent::CountdownChanged { seconds: 3 })
        .unwrap();
    timer_tx
        .send(TimerEvent::TimeChanged {
            elapsed_seconds: 0.0,
        })
        .unwrap();
    hud.poll();
    assert_eq!(hud.countdown_text(), "3");

    race_tx
        .send(RaceEvent::CountdownChanged { seconds: 0 })
        .unwrap();
    race_tx
        .send(RaceEvent::StateChanged(RaceState::Racing))
        .unwrap();
    timer_tx
        .send(TimerEvent::TimeChanged {
            elapsed_seconds: 12.5,
        })
        .unwrap();
    hud.poll();
    assert_eq!(hud.countdown_text(), "");
    assert_eq!(hud.time_text(), "0:12.50");

    race_tx
        .send(RaceEvent::Finished {
            final_time_seconds: 12.5,
            new_record: true,
        })
        .unwrap();
    hud.poll();
    assert_eq!(hud.best_time_text(), "0:12.50");
}

#[test]
fn test_hud_view_keeps_best_time_when_not_a_record() {
    let (race_tx, race_rx) = broadcast::channel(16);
    let (_timer_tx, timer_rx) = broadcast::channel(16);

    let config = GameConfig::default();
    let mut hud = HudView::new(&config, race_rx, timer_rx, 10.0);

    assert_eq!(hud.best_time_text(), "0:10.00");

    race_tx
        .send(RaceEvent::Finished {
            final_time_seconds: 12.0,
            new_record: false,
        })
        .unwrap();
    hud.poll();

    assert_eq!(hud.best_time_text(), "0:10.00");
}
