//! End-to-end monitor behavior through the recorder and the stores.

use std::time::Duration;

use chrono::{TimeDelta, Utc};

use pethub_core::UserId;
use pethub_database::MonitoredUserStore;
use pethub_entity::action_log::ActionLabel;
use pethub_worker::MonitorScheduler;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_recorded_actions_flag_user() {
    let app = TestApp::new();
    let recorder = &app.recorder;

    recorder.record(UserId(7), ActionLabel::CreatePet(1)).await;
    recorder.record(UserId(7), ActionLabel::UpdatePet(1)).await;
    recorder.record(UserId(7), ActionLabel::UpdatePet(1)).await;
    recorder.record(UserId(7), ActionLabel::DeletePet(1)).await;
    recorder
        .record_detached(UserId(7), ActionLabel::UpdateUser(7))
        .await
        .unwrap();

    let report = app
        .monitor
        .run_cycle(Utc::now() + TimeDelta::milliseconds(1))
        .await
        .unwrap();
    assert_eq!(report.promoted.len(), 1);
    assert_eq!(report.promoted[0].user_id, UserId(7));
}

#[tokio::test]
async fn test_monitored_record_never_changes() {
    let app = TestApp::new();
    let now = Utc::now();
    app.seed_actions(7, 5, now).await;
    app.monitor.run_cycle(now).await.unwrap();
    let first = app.monitored.find_by_user_id(UserId(7)).await.unwrap().unwrap();

    for minutes in 1..4 {
        let later = now + TimeDelta::minutes(minutes);
        app.seed_actions(7, 20, later).await;
        let report = app.monitor.run_cycle(later).await.unwrap();
        assert!(report.promoted.is_empty());
    }

    let last = app.monitored.find_by_user_id(UserId(7)).await.unwrap().unwrap();
    assert_eq!(first, last);
    assert_eq!(app.monitored.len(), 1);
}

#[tokio::test]
async fn test_window_slides_past_old_activity() {
    let app = TestApp::new();
    let now = Utc::now();
    app.seed_actions(3, 5, now).await;

    let report = app
        .monitor
        .run_cycle(now + TimeDelta::seconds(120))
        .await
        .unwrap();
    assert_eq!(report.active_users, 0);
    assert!(app.monitored.is_empty());
}

#[tokio::test]
async fn test_outage_skips_cycle_and_next_one_recovers() {
    let app = TestApp::new();
    let now = Utc::now();
    app.seed_actions(7, 6, now).await;

    app.monitored.set_available(false);
    assert!(app.monitor.run_cycle(now).await.is_err());

    app.monitored.set_available(true);
    let report = app.monitor.run_cycle(now).await.unwrap();
    assert_eq!(report.promoted.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_scheduler_flags_user_and_stops() {
    let app = TestApp::new();
    app.seed_actions(11, 5, Utc::now()).await;

    let handle = MonitorScheduler::spawn_with(
        app.monitor.clone(),
        Duration::from_secs(60),
        Duration::from_secs(5),
    );
    tokio::time::sleep(Duration::from_secs(61)).await;
    assert_eq!(handle.cycles_completed(), 1);
    assert!(app.monitored.find_by_user_id(UserId(11)).await.unwrap().is_some());

    handle.shutdown().await;
}
