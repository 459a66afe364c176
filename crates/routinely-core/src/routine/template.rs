//! Routine templates and the creation form that produces them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// One checklist item inside a routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Time-of-day category shown next to a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutineIcon {
    #[default]
    Morning,
    Day,
    Night,
}

impl RoutineIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineIcon::Morning => "morning",
            RoutineIcon::Day => "day",
            RoutineIcon::Night => "night",
        }
    }
}

impl fmt::Display for RoutineIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutineIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(RoutineIcon::Morning),
            "day" => Ok(RoutineIcon::Day),
            "night" => Ok(RoutineIcon::Night),
            other => Err(format!("unknown routine icon '{other}' (expected morning, day or night)")),
        }
    }
}

/// Reusable routine definition held by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTemplate {
    pub id: String,
    pub name: String,
    /// Duration in minutes.
    pub duration_minutes: u32,
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub icon: RoutineIcon,
}

impl RoutineTemplate {
    /// Get template duration in seconds.
    pub fn duration_secs(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }

    /// Check the template invariants: non-empty name, positive duration,
    /// at least one task, no blank task text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration {
                input: self.duration_minutes.to_string(),
            });
        }
        if self.tasks.is_empty() {
            return Err(ValidationError::NoTasks);
        }
        if let Some(pos) = self.tasks.iter().position(|t| t.text.trim().is_empty()) {
            return Err(ValidationError::EmptyTaskText { position: pos + 1 });
        }
        Ok(())
    }
}

/// Raw input from the "create routine" form.
///
/// Duration is kept as the text the user typed; parsing it is part of
/// validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineDraft {
    pub name: String,
    pub duration: String,
    pub icon: RoutineIcon,
    pub tasks: Vec<String>,
}

impl RoutineDraft {
    /// Validate the form and build a template with the given id.
    ///
    /// Checks run in form order (name, tasks, duration) so the first
    /// problem the user would see on screen is the one reported.
    pub fn into_template(self, id: impl Into<String>) -> Result<RoutineTemplate, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.tasks.is_empty() {
            return Err(ValidationError::NoTasks);
        }
        if let Some(pos) = self.tasks.iter().position(|t| t.trim().is_empty()) {
            return Err(ValidationError::EmptyTaskText { position: pos + 1 });
        }
        let duration_minutes = parse_duration(&self.duration)?;

        let tasks = self
            .tasks
            .into_iter()
            .enumerate()
            .map(|(i, text)| Task::new(format!("t{}", i + 1), text.trim()))
            .collect();

        Ok(RoutineTemplate {
            id: id.into(),
            name: self.name.trim().to_string(),
            duration_minutes,
            tasks,
            icon: self.icon,
        })
    }
}

/// Parse a duration field into a positive number of minutes.
///
/// The whole (trimmed) field must be a decimal integer; trailing junk such
/// as `"12abc"` is rejected rather than truncated.
pub fn parse_duration(input: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidDuration {
        input: input.to_string(),
    };
    let value: i64 = input.trim().parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }
    u32::try_from(value).map_err(|_| invalid())
}

/// Partial update merged into an existing template.
///
/// `None` fields are left untouched. The id cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub icon: Option<RoutineIcon>,
}

impl RoutineUpdate {
    /// Apply onto a copy of `template` and return the merged value.
    pub fn merged(&self, template: &RoutineTemplate) -> RoutineTemplate {
        let mut merged = template.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(duration) = self.duration_minutes {
            merged.duration_minutes = duration;
        }
        if let Some(tasks) = &self.tasks {
            merged.tasks = tasks.clone();
        }
        if let Some(icon) = self.icon {
            merged.icon = icon;
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, duration: &str, tasks: &[&str]) -> RoutineDraft {
        RoutineDraft {
            name: name.into(),
            duration: duration.into(),
            icon: RoutineIcon::Night,
            tasks: tasks.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn valid_draft_builds_template() {
        let t = draft("  Evening wind-down ", "45", &["Stretch", " Journal "])
            .into_template("r-1")
            .unwrap();
        assert_eq!(t.id, "r-1");
        assert_eq!(t.name, "Evening wind-down");
        assert_eq!(t.duration_minutes, 45);
        assert_eq!(t.icon, RoutineIcon::Night);
        assert_eq!(t.tasks.len(), 2);
        assert_eq!(t.tasks[1], Task::new("t2", "Journal"));
        assert!(t.tasks.iter().all(|task| !task.completed));
    }

    #[test]
    fn empty_name_rejected() {
        let err = draft("   ", "30", &["x"]).into_template("r").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn blank_task_reports_position() {
        let err = draft("Focus", "30", &["Email", ""]).into_template("r").unwrap_err();
        assert_eq!(err, ValidationError::EmptyTaskText { position: 2 });
    }

    #[test]
    fn no_tasks_rejected() {
        let err = draft("Focus", "30", &[]).into_template("r").unwrap_err();
        assert_eq!(err, ValidationError::NoTasks);
    }

    #[test]
    fn bad_durations_rejected() {
        for input in ["-5", "abc", "0", "", "12abc", "1.5"] {
            let err = parse_duration(input).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidDuration { .. }), "{input}");
        }
        assert_eq!(parse_duration(" 90 ").unwrap(), 90);
    }

    #[test]
    fn name_checked_before_duration() {
        let err = draft("", "abc", &["x"]).into_template("r").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn icon_parses_case_insensitively() {
        assert_eq!("Night".parse::<RoutineIcon>().unwrap(), RoutineIcon::Night);
        assert!("noon".parse::<RoutineIcon>().is_err());
    }

    #[test]
    fn update_merges_only_given_fields() {
        let t = draft("Focus", "30", &["a"]).into_template("r").unwrap();
        let update = RoutineUpdate {
            duration_minutes: Some(50),
            ..Default::default()
        };
        let merged = update.merged(&t);
        assert_eq!(merged.duration_minutes, 50);
        assert_eq!(merged.name, "Focus");
        assert_eq!(merged.id, "r");
    }
}
