//! Deadline countdowns and urgency classification.
//!
//! Purely a display concern: nothing here schedules or notifies.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An upcoming due date shared with teammates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub teammates: Vec<String>,
}

/// Colour band for a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Due today, tomorrow, or already past.
    Urgent,
    /// Due within three days.
    Warning,
    Normal,
}

impl Urgency {
    pub fn from_days(days_remaining: i64) -> Self {
        if days_remaining <= 1 {
            Urgency::Urgent
        } else if days_remaining <= 3 {
            Urgency::Warning
        } else {
            Urgency::Normal
        }
    }
}

/// Whole calendar days from `today` until `due`. Negative once overdue.
pub fn days_remaining(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Human label for a due date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueLabel {
    Today,
    Tomorrow,
    On(NaiveDate),
}

impl DueLabel {
    pub fn for_date(due: NaiveDate, today: NaiveDate) -> Self {
        match days_remaining(due, today) {
            0 => DueLabel::Today,
            1 => DueLabel::Tomorrow,
            _ => DueLabel::On(due),
        }
    }
}

impl fmt::Display for DueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueLabel::Today => f.write_str("Today"),
            DueLabel::Tomorrow => f.write_str("Tomorrow"),
            DueLabel::On(date) => write!(f, "{}", date.format("%b %-d")),
        }
    }
}

/// A deadline with its countdown resolved against a particular day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedDeadline {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub label: String,
    pub days_remaining: i64,
    pub urgency: Urgency,
    pub teammates: Vec<String>,
}

impl Deadline {
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_remaining(self.due_date, today)
    }

    pub fn urgency(&self, today: NaiveDate) -> Urgency {
        Urgency::from_days(self.days_remaining(today))
    }

    pub fn label(&self, today: NaiveDate) -> DueLabel {
        DueLabel::for_date(self.due_date, today)
    }

    pub fn ranked(&self, today: NaiveDate) -> RankedDeadline {
        RankedDeadline {
            id: self.id.clone(),
            title: self.title.clone(),
            due_date: self.due_date,
            label: self.label(today).to_string(),
            days_remaining: self.days_remaining(today),
            urgency: self.urgency(today),
            teammates: self.teammates.clone(),
        }
    }

    /// Demo deadlines relative to `today`.
    pub fn seeded(today: NaiveDate) -> Vec<Deadline> {
        vec![
            Deadline {
                id: "1".into(),
                title: "Submit quarterly report".into(),
                due_date: today + Duration::days(3),
                teammates: vec!["Minsu Kim".into(), "Jiyeon Lee".into()],
            },
            Deadline {
                id: "2".into(),
                title: "Review design drafts".into(),
                due_date: today + Duration::days(1),
                teammates: vec!["Jihoon Park".into()],
            },
        ]
    }
}

/// Resolve every deadline against `today`, soonest first.
/// Deadlines due the same day keep their input order.
pub fn rank(deadlines: &[Deadline], today: NaiveDate) -> Vec<RankedDeadline> {
    let mut ranked: Vec<_> = deadlines.iter().map(|d| d.ranked(today)).collect();
    ranked.sort_by_key(|r| r.days_remaining);
    ranked
}
