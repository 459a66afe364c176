//! Routine run state machine.
//!
//! A run is a private copy of a template plus a countdown. The machine does
//! not own a clock: the caller (see [`RunDriver`](super::RunDriver)) invokes
//! `tick()` once per second.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle   (countdown hits zero, or stop)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut runs = RunController::new();
//! runs.start(&template);
//! runs.toggle_task("t1");
//! // Once per second:
//! runs.tick(); // Returns Event::RunCompleted on the last tick
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::template::{RoutineTemplate, Task};
use crate::events::Event;
use crate::timefmt::format_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Idle,
    Running,
}

/// A live execution of a routine.
///
/// Holds its own copy of the template so checking tasks off never reaches
/// back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineRun {
    routine: RoutineTemplate,
    remaining_secs: u64,
}

impl RoutineRun {
    fn from_template(template: &RoutineTemplate) -> Self {
        Self {
            routine: template.clone(),
            remaining_secs: template.duration_secs(),
        }
    }

    pub fn routine(&self) -> &RoutineTemplate {
        &self.routine
    }

    pub fn tasks(&self) -> &[Task] {
        &self.routine.tasks
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.routine.duration_secs()
    }

    /// 0.0 .. 1.0 elapsed fraction of the run.
    pub fn progress(&self) -> f64 {
        let total = self.total_secs();
        if total == 0 {
            return 0.0;
        }
        (1.0 - self.remaining_secs as f64 / total as f64).clamp(0.0, 1.0)
    }

    pub fn completed_count(&self) -> usize {
        self.routine.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn view(&self) -> RunView {
        RunView {
            routine_id: self.routine.id.clone(),
            name: self.routine.name.clone(),
            remaining_secs: self.remaining_secs,
            remaining_display: format_time(self.remaining_secs),
            progress: self.progress(),
            tasks: self.routine.tasks.clone(),
            completed_tasks: self.completed_count(),
        }
    }
}

/// Display state handed to the presentation layer after each tick or action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunView {
    pub routine_id: String,
    pub name: String,
    pub remaining_secs: u64,
    pub remaining_display: String,
    pub progress: f64,
    pub tasks: Vec<Task>,
    pub completed_tasks: usize,
}

/// Owns at most one active run per session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunController {
    active: Option<RoutineRun>,
}

impl RunController {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> RunState {
        if self.active.is_some() {
            RunState::Running
        } else {
            RunState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&RoutineRun> {
        self.active.as_ref()
    }

    pub fn view(&self) -> Option<RunView> {
        self.active.as_ref().map(RoutineRun::view)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state(),
            run: self.view(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a run from a copy of `template`. No-op unless idle.
    pub fn start(&mut self, template: &RoutineTemplate) -> Option<Event> {
        if let Some(run) = &self.active {
            debug!(active = %run.routine.id, requested = %template.id, "start ignored: run already active");
            return None;
        }
        if template.duration_minutes == 0 {
            warn!(id = %template.id, "start ignored: routine has zero duration");
            return None;
        }
        let run = RoutineRun::from_template(template);
        let event = Event::RunStarted {
            routine_id: run.routine.id.clone(),
            name: run.routine.name.clone(),
            duration_secs: run.remaining_secs,
            at: Utc::now(),
        };
        info!(id = %run.routine.id, secs = run.remaining_secs, "run started");
        self.active = Some(run);
        Some(event)
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `RunTicked` while time remains and `RunCompleted` on the tick
    /// that reaches zero, after which the run is gone. No-op when idle.
    pub fn tick(&mut self) -> Option<Event> {
        let run = self.active.as_mut()?;
        run.remaining_secs = run.remaining_secs.saturating_sub(1);
        if run.remaining_secs > 0 {
            debug!(remaining = run.remaining_secs, "tick");
            return Some(Event::RunTicked {
                routine_id: run.routine.id.clone(),
                remaining_secs: run.remaining_secs,
                at: Utc::now(),
            });
        }

        let run = self.active.take()?;
        info!(id = %run.routine.id, "run completed");
        Some(Event::RunCompleted {
            completed_tasks: run.completed_count(),
            total_tasks: run.routine.tasks.len(),
            routine_id: run.routine.id,
            at: Utc::now(),
        })
    }

    /// Flip completion of one task in the running copy.
    /// Unknown ids and an idle machine are no-ops.
    pub fn toggle_task(&mut self, task_id: &str) -> Option<Event> {
        let run = self.active.as_mut()?;
        let task = run.routine.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.completed = !task.completed;
        debug!(task = task_id, completed = task.completed, "task toggled");
        Some(Event::TaskToggled {
            routine_id: run.routine.id.clone(),
            task_id: task.id.clone(),
            completed: task.completed,
            at: Utc::now(),
        })
    }

    /// Abandon the active run. No-op when idle.
    pub fn stop(&mut self) -> Option<Event> {
        let run = self.active.take()?;
        info!(id = %run.routine.id, remaining = run.remaining_secs, "run stopped");
        Some(Event::RunStopped {
            routine_id: run.routine.id,
            remaining_secs: run.remaining_secs,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::RoutineIcon;

    fn template(minutes: u32) -> RoutineTemplate {
        RoutineTemplate {
            id: "r1".into(),
            name: "Quick".into(),
            duration_minutes: minutes,
            tasks: vec![Task::new("t1", "One"), Task::new("t2", "Two")],
            icon: RoutineIcon::Morning,
        }
    }

    #[test]
    fn start_sets_full_countdown() {
        let mut runs = RunController::new();
        assert_eq!(runs.state(), RunState::Idle);
        assert!(runs.start(&template(2)).is_some());
        assert_eq!(runs.state(), RunState::Running);
        assert_eq!(runs.active().unwrap().remaining_secs(), 120);
        assert_eq!(runs.view().unwrap().remaining_display, "02:00");
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut runs = RunController::new();
        runs.start(&template(2));
        runs.tick();
        let mut other = template(5);
        other.id = "r2".into();
        assert!(runs.start(&other).is_none());
        assert_eq!(runs.active().unwrap().routine().id, "r1");
        assert_eq!(runs.active().unwrap().remaining_secs(), 119);
    }

    #[test]
    fn zero_duration_never_starts() {
        let mut runs = RunController::new();
        assert!(runs.start(&template(0)).is_none());
        assert_eq!(runs.state(), RunState::Idle);
    }

    #[test]
    fn ticks_run_to_completion() {
        let mut runs = RunController::new();
        runs.start(&template(1));
        for _ in 0..59 {
            assert!(matches!(runs.tick(), Some(Event::RunTicked { .. })));
        }
        match runs.tick() {
            Some(Event::RunCompleted { total_tasks, .. }) => assert_eq!(total_tasks, 2),
            other => panic!("Expected RunCompleted, got {other:?}"),
        }
        assert_eq!(runs.state(), RunState::Idle);
        assert!(runs.tick().is_none());
    }

    #[test]
    fn idle_operations_are_noops() {
        let mut runs = RunController::new();
        assert!(runs.tick().is_none());
        assert!(runs.stop().is_none());
        assert!(runs.toggle_task("t1").is_none());
        assert_eq!(runs.state(), RunState::Idle);
    }

    #[test]
    fn toggle_twice_restores_and_never_touches_template() {
        let t = template(1);
        let mut runs = RunController::new();
        runs.start(&t);

        runs.toggle_task("t1");
        assert!(runs.active().unwrap().tasks()[0].completed);
        assert!(!t.tasks[0].completed);

        runs.toggle_task("t1");
        assert!(!runs.active().unwrap().tasks()[0].completed);
        assert!(runs.toggle_task("missing").is_none());
        assert_eq!(t, template(1));
    }

    #[test]
    fn stop_discards_run() {
        let mut runs = RunController::new();
        runs.start(&template(1));
        runs.toggle_task("t2");
        runs.tick();
        match runs.stop() {
            Some(Event::RunStopped { remaining_secs, .. }) => assert_eq!(remaining_secs, 59),
            other => panic!("Expected RunStopped, got {other:?}"),
        }
        assert!(runs.active().is_none());

        // A fresh start begins from a clean copy.
        runs.start(&template(1));
        assert_eq!(runs.active().unwrap().completed_count(), 0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut runs = RunController::new();
        runs.start(&template(1));
        let mut last = runs.active().unwrap().progress();
        assert_eq!(last, 0.0);
        while let Some(run) = runs.active() {
            let p = run.progress();
            assert!(p >= last && (0.0..=1.0).contains(&p));
            last = p;
            runs.tick();
        }
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut runs = RunController::new();
        match runs.snapshot() {
            Event::StateSnapshot { state, run, .. } => {
                assert_eq!(state, RunState::Idle);
                assert!(run.is_none());
            }
            _ => panic!("Expected StateSnapshot"),
        }
        runs.start(&template(1));
        match runs.snapshot() {
            Event::StateSnapshot { state, run, .. } => {
                assert_eq!(state, RunState::Running);
                assert_eq!(run.unwrap().remaining_secs, 60);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
