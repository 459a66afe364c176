//! Explicitly owned application state.
//!
//! Views borrow the store instead of reaching for globals. Everything lives
//! in memory and is rebuilt from seed data on every start.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::config::Config;
use crate::deadline::{self, Deadline, RankedDeadline};
use crate::emotion::{EmotionEntry, EmotionLog, EmotionType};
use crate::error::ValidationError;
use crate::events::Event;
use crate::routine::{RoutineCatalog, RoutineDraft};

#[derive(Debug, Clone, Default)]
pub struct AppStore {
    catalog: RoutineCatalog,
    emotions: EmotionLog,
    deadlines: Vec<Deadline>,
}

impl AppStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store filled with demo routines and deadlines relative to `today`.
    /// The emotion log always starts empty.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            catalog: RoutineCatalog::seeded(),
            emotions: EmotionLog::new(),
            deadlines: Deadline::seeded(today),
        }
    }

    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        if config.seed_demo_data {
            Self::seeded(today)
        } else {
            Self::new()
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn catalog(&self) -> &RoutineCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut RoutineCatalog {
        &mut self.catalog
    }

    pub fn emotions(&self) -> &EmotionLog {
        &self.emotions
    }

    pub fn deadlines(&self) -> &[Deadline] {
        &self.deadlines
    }

    pub fn ranked_deadlines(&self, today: NaiveDate) -> Vec<RankedDeadline> {
        deadline::rank(&self.deadlines, today)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Validate a creation form and add the routine under a fresh id.
    /// On error the catalog is untouched.
    pub fn create_routine(&mut self, draft: RoutineDraft) -> Result<Event, ValidationError> {
        let template = draft.into_template(Uuid::new_v4().to_string()).inspect_err(|e| {
            warn!(error = %e, "routine draft rejected");
        })?;
        let event = Event::RoutineCreated {
            routine_id: template.id.clone(),
            name: template.name.clone(),
            at: Utc::now(),
        };
        self.catalog.add(template)?;
        Ok(event)
    }

    pub fn add_deadline(&mut self, deadline: Deadline) {
        self.deadlines.push(deadline);
    }

    pub fn record_emotion(&mut self, entry: EmotionEntry) -> Event {
        self.emotions.record(entry)
    }

    pub fn record_check_in(&mut self, emotion: EmotionType, at: DateTime<Utc>) -> Event {
        self.emotions.record(EmotionEntry::check_in(emotion, at))
    }

    pub fn record_connection(
        &mut self,
        emotion: EmotionType,
        notes: &str,
        person_id: &str,
        at: DateTime<Utc>,
    ) -> Result<Event, ValidationError> {
        let entry = EmotionEntry::connection(emotion, notes, person_id, at)?;
        Ok(self.emotions.record(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::RoutineIcon;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn draft(name: &str, duration: &str, tasks: &[&str]) -> RoutineDraft {
        RoutineDraft {
            name: name.into(),
            duration: duration.into(),
            icon: RoutineIcon::Day,
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn create_routine_appends() {
        let mut store = AppStore::seeded(today());
        let event = store.create_routine(draft("Lunch reset", "15", &["Walk"])).unwrap();
        let Event::RoutineCreated { routine_id, .. } = event else {
            panic!("Expected RoutineCreated");
        };
        assert_eq!(store.catalog().len(), 3);
        assert_eq!(store.catalog().list().last().unwrap().id, routine_id);
    }

    #[test]
    fn invalid_drafts_leave_catalog_untouched() {
        let mut store = AppStore::seeded(today());
        let before = store.catalog().list().to_vec();
        for bad in [
            draft("", "30", &["a"]),
            draft("Name", "30", &["a", ""]),
            draft("Name", "-5", &["a"]),
            draft("Name", "abc", &["a"]),
        ] {
            assert!(store.create_routine(bad).is_err());
        }
        assert_eq!(store.catalog().list(), before.as_slice());
    }

    #[test]
    fn config_controls_seeding() {
        let mut config = Config::default();
        assert_eq!(AppStore::from_config(&config, today()).catalog().len(), 2);
        config.seed_demo_data = false;
        let empty = AppStore::from_config(&config, today());
        assert!(empty.catalog().is_empty());
        assert!(empty.deadlines().is_empty());
    }

    #[test]
    fn emotions_recorded_newest_first() {
        let mut store = AppStore::new();
        store.record_check_in(EmotionType::Happy, Utc::now());
        store
            .record_connection(EmotionType::Calm, "Paired on the bug", "1", Utc::now())
            .unwrap();
        let first = store.emotions().latest().unwrap();
        assert_eq!(first.primary_emotion, EmotionType::Calm);
        assert_eq!(store.emotions().len(), 2);
        assert!(store.record_connection(EmotionType::Sad, "", "1", Utc::now()).is_err());
        assert_eq!(store.emotions().len(), 2);
    }
}
