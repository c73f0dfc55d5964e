use std::time::Duration;
use worktrack::core::refresh::{RefreshTimer, refresh_status, run_refresh_loop};
use worktrack::core::settings::TrackerSettings;
use worktrack::db::KeyValueStore;
use worktrack::ui::status_bar::{DASHBOARD_COMMAND, StatusBarItem};

mod common;
use common::tracker_at;

#[test]
fn refresh_creates_today_and_fills_the_status_item() {
    let mut tracker = tracker_at(9, 0, TrackerSettings::default());
    let mut status = StatusBarItem::new();
    assert!(!status.is_visible());

    let remaining = refresh_status(&mut tracker, &mut status).unwrap();

    assert_eq!((remaining.hours, remaining.minutes), (8, 0));
    assert_eq!(status.text(), "⏱ 8 hrs 0 mins");
    assert_eq!(
        status.tooltip(),
        "Work since 09:00 today - run 'worktrack menu' to open the dashboard"
    );
    assert_eq!(status.command(), DASHBOARD_COMMAND);
    assert!(status.is_visible());
    assert_eq!(tracker.store().keys().unwrap().len(), 1);
}

#[test]
fn overtime_shows_in_the_status_text() {
    let mut tracker = tracker_at(9, 0, TrackerSettings::default());
    tracker.set_arrival(Some(common::ms_at(7, 0))).unwrap();
    tracker.clock().set(common::local_at(15, 30));

    let mut status = StatusBarItem::new();
    refresh_status(&mut tracker, &mut status).unwrap();

    assert_eq!(status.text(), "⏱ +0 hrs 30 mins");
}

#[tokio::test(start_paused = true)]
async fn loop_renders_once_per_tick() {
    let mut tracker = tracker_at(9, 0, TrackerSettings::default());
    let mut status = StatusBarItem::new();
    let timer = RefreshTimer::new();

    let ticks = run_refresh_loop(
        &mut tracker,
        &mut status,
        Duration::from_secs(60),
        timer.token(),
        Some(3),
    )
    .await
    .unwrap();

    assert_eq!(ticks, 3);
    assert_eq!(status.text(), "⏱ 8 hrs 0 mins");
}

#[tokio::test(start_paused = true)]
async fn cancelled_loop_renders_nothing() {
    let mut tracker = tracker_at(9, 0, TrackerSettings::default());
    let mut status = StatusBarItem::new();

    let timer = RefreshTimer::new();
    let token = timer.token();
    drop(timer);

    let ticks = run_refresh_loop(&mut tracker, &mut status, Duration::from_secs(60), token, None)
        .await
        .unwrap();

    assert_eq!(ticks, 0);
    assert!(!status.is_visible());
}

#[test]
fn dropping_the_timer_cancels_its_token() {
    let timer = RefreshTimer::new();
    let token = timer.token();
    assert!(!token.is_cancelled());

    drop(timer);
    assert!(token.is_cancelled());
}
