//! Integration tests for the routine run lifecycle.

use proptest::prelude::*;
use routinely_core::{
    format_time, AppStore, Event, RoutineDraft, RoutineIcon, RoutineTemplate, RunController,
    RunDriver, RunState, Task,
};
use chrono::NaiveDate;
use std::time::Duration;

fn template(minutes: u32) -> RoutineTemplate {
    RoutineTemplate {
        id: "focus".into(),
        name: "Focus".into(),
        duration_minutes: minutes,
        tasks: vec![Task::new("t1", "Plan"), Task::new("t2", "Execute")],
        icon: RoutineIcon::Day,
    }
}

proptest! {
    #[test]
    fn start_sets_remaining_to_duration_in_seconds(minutes in 1u32..=24 * 60) {
        let mut runs = RunController::new();
        runs.start(&template(minutes));
        prop_assert_eq!(runs.active().unwrap().remaining_secs(), u64::from(minutes) * 60);
    }

    #[test]
    fn double_toggle_is_identity(which in 0usize..2) {
        let t = template(3);
        let mut runs = RunController::new();
        runs.start(&t);
        let id = t.tasks[which].id.clone();
        let before = runs.active().unwrap().tasks().to_vec();
        runs.toggle_task(&id);
        runs.toggle_task(&id);
        prop_assert_eq!(runs.active().unwrap().tasks(), before.as_slice());
        prop_assert_eq!(&t, &template(3));
    }
}

#[test]
fn exact_tick_count_completes_run() {
    let mut runs = RunController::new();
    runs.start(&template(2));
    let total = runs.active().unwrap().remaining_secs();

    let mut completed = 0;
    for _ in 0..total {
        if let Some(Event::RunCompleted { .. }) = runs.tick() {
            completed += 1;
        }
    }
    assert_eq!(completed, 1);
    assert_eq!(runs.state(), RunState::Idle);
    assert!(runs.tick().is_none());
}

#[test]
fn run_started_from_catalog_never_mutates_catalog() {
    let mut store = AppStore::seeded(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let original = store.catalog().get("1").unwrap().clone();

    let mut runs = RunController::new();
    runs.start(store.catalog().get("1").unwrap());
    runs.toggle_task("t1");
    runs.toggle_task("t3");
    runs.tick();
    assert_eq!(runs.active().unwrap().completed_count(), 2);

    assert_eq!(store.catalog().get("1").unwrap(), &original);

    // Catalog edits during a run do not reach the running copy either.
    store.catalog_mut().remove("1");
    assert_eq!(runs.active().unwrap().routine().name, original.name);
}

#[test]
fn created_routine_can_be_run() {
    let mut store = AppStore::new();
    store
        .create_routine(RoutineDraft {
            name: "Two minute tidy".into(),
            duration: "2".into(),
            icon: RoutineIcon::Night,
            tasks: vec!["Desk".into(), "Inbox".into()],
        })
        .unwrap();
    let routine = store.catalog().list()[0].clone();

    let mut runs = RunController::new();
    runs.start(&routine);
    let view = runs.view().unwrap();
    assert_eq!(view.remaining_display, format_time(120));
    assert_eq!(view.tasks.len(), 2);
    assert_eq!(view.progress, 0.0);
}

#[tokio::test(start_paused = true)]
async fn driver_runs_seeded_routine_to_completion() {
    let store = AppStore::seeded(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    let mut driver = RunDriver::new(Duration::from_millis(1));
    driver.start(store.catalog().get("2").unwrap());

    let mut ticks = 0u64;
    while let Some(event) = driver.next_tick().await {
        ticks += 1;
        if event.is_terminal() {
            break;
        }
    }
    assert_eq!(ticks, 120 * 60);
    assert_eq!(driver.state(), RunState::Idle);
    assert!(!driver.is_tick_pending());
}

#[tokio::test(start_paused = true)]
async fn dropping_driver_mid_run_is_clean() {
    let mut driver = RunDriver::new(Duration::from_secs(1));
    driver.start(&template(1));
    driver.next_tick().await;
    assert!(driver.is_tick_pending());
    drop(driver);
}
