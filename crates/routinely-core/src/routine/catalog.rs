//! Ordered, in-memory collection of routine templates.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::template::{RoutineIcon, RoutineTemplate, RoutineUpdate, Task};
use crate::error::ValidationError;

/// Routine catalog.
///
/// Keeps insertion order and enforces id uniqueness. Lookups by id are
/// linear; a catalog holds a handful of routines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineCatalog {
    routines: Vec<RoutineTemplate>,
}

impl RoutineCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the demo routines.
    pub fn seeded() -> Self {
        Self {
            routines: vec![
                RoutineTemplate {
                    id: "1".into(),
                    name: "Morning Focus".into(),
                    duration_minutes: 120,
                    tasks: vec![
                        Task::new("t1", "Check and answer email"),
                        Task::new("t2", "Finish the single most important task"),
                        Task::new("t3", "Prepare for the team meeting"),
                    ],
                    icon: RoutineIcon::Morning,
                },
                RoutineTemplate {
                    id: "2".into(),
                    name: "Night Creative".into(),
                    duration_minutes: 120,
                    tasks: vec![
                        Task::new("t1", "Sketch ideas"),
                        Task::new("t2", "Produce content"),
                        Task::new("t3", "Plan tomorrow"),
                    ],
                    icon: RoutineIcon::Night,
                },
            ],
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Templates in insertion order.
    pub fn list(&self) -> &[RoutineTemplate] {
        &self.routines
    }

    pub fn get(&self, id: &str) -> Option<&RoutineTemplate> {
        self.routines.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.routines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routines.is_empty()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a template. Rejects ids already in the catalog.
    pub fn add(&mut self, template: RoutineTemplate) -> Result<(), ValidationError> {
        if self.contains(&template.id) {
            warn!(id = %template.id, "rejected duplicate routine id");
            return Err(ValidationError::DuplicateId(template.id));
        }
        info!(id = %template.id, name = %template.name, "routine added");
        self.routines.push(template);
        Ok(())
    }

    /// Remove by id. Returns `false` (and does nothing) if absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.routines.len();
        self.routines.retain(|r| r.id != id);
        let removed = self.routines.len() != before;
        if removed {
            info!(id, "routine removed");
        }
        removed
    }

    /// Merge `update` into the template with `id`.
    ///
    /// Returns `Ok(false)` when no template matches. A merge that would break
    /// the template invariants is rejected and leaves the entry untouched.
    pub fn update(&mut self, id: &str, update: &RoutineUpdate) -> Result<bool, ValidationError> {
        let Some(slot) = self.routines.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        let merged = update.merged(slot);
        merged.validate()?;
        *slot = merged;
        info!(id, "routine updated");
        Ok(true)
    }
}
