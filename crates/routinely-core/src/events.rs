use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::EmotionType;
use crate::routine::{RunState, RunView};

/// Every state change in the system produces an Event.
/// Views render from events; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    RoutineCreated {
        routine_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    RunStarted {
        routine_id: String,
        name: String,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    RunTicked {
        routine_id: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TaskToggled {
        routine_id: String,
        task_id: String,
        completed: bool,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero; the run has been discarded.
    RunCompleted {
        routine_id: String,
        completed_tasks: usize,
        total_tasks: usize,
        at: DateTime<Utc>,
    },
    /// User stopped the run early; remaining time and checks are discarded.
    RunStopped {
        routine_id: String,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    EmotionRecorded {
        entry_id: String,
        emotion: EmotionType,
        person_id: Option<String>,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: RunState,
        run: Option<RunView>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// True for events that end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::RunCompleted { .. } | Event::RunStopped { .. })
    }
}
