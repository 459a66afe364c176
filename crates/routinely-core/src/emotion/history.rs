use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::EmotionType;
use crate::error::ValidationError;
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Person,
    Event,
}

/// Who or what an entry is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTo {
    pub person_id: String,
    pub kind: RelationKind,
}

/// One logged emotional state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub primary_emotion: EmotionType,
    #[serde(default)]
    pub secondary_emotions: Vec<EmotionType>,
    #[serde(default)]
    pub notes: Option<String>,
    pub related_to: Option<RelatedTo>,
}

impl EmotionEntry {
    /// Plain daily check-in: one emotion, not tied to anyone.
    pub fn check_in(emotion: EmotionType, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: at,
            primary_emotion: emotion,
            secondary_emotions: Vec::new(),
            notes: None,
            related_to: None,
        }
    }

    /// Emotion shared with a person. Notes are required.
    pub fn connection(
        emotion: EmotionType,
        notes: &str,
        person_id: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let notes = notes.trim();
        if notes.is_empty() {
            return Err(ValidationError::EmptyNotes);
        }
        Ok(Self {
            notes: Some(notes.to_string()),
            related_to: Some(RelatedTo {
                person_id: person_id.into(),
                kind: RelationKind::Person,
            }),
            ..Self::check_in(emotion, at)
        })
    }

    pub fn with_secondary(mut self, emotions: Vec<EmotionType>) -> Self {
        self.secondary_emotions = emotions;
        self
    }

    /// Attach notes; blank text clears them.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() { None } else { Some(notes) };
        self
    }
}

/// Quick-pick mood used when logging a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Emotion recorded for this quick pick.
    pub fn emotion(&self) -> EmotionType {
        match self {
            Sentiment::Positive => EmotionType::Happy,
            Sentiment::Neutral => EmotionType::Calm,
            Sentiment::Negative => EmotionType::Frustrated,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        f.write_str(s)
    }
}

impl FromStr for Sentiment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ValidationError::UnknownSentiment(s.to_string())),
        }
    }
}

/// Append-only emotion log, newest entry first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmotionLog {
    entries: VecDeque<EmotionEntry>,
}

impl EmotionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry.
    pub fn record(&mut self, entry: EmotionEntry) -> Event {
        let event = Event::EmotionRecorded {
            entry_id: entry.id.clone(),
            emotion: entry.primary_emotion,
            person_id: entry.related_to.as_ref().map(|r| r.person_id.clone()),
            at: entry.date,
        };
        info!(id = %entry.id, emotion = %entry.primary_emotion, "emotion recorded");
        self.entries.push_front(entry);
        event
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &EmotionEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&EmotionEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
