//! Emotion vocabulary and the append-only emotion log.

mod history;

pub use history::{EmotionEntry, EmotionLog, RelatedTo, RelationKind, Sentiment};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Emoji shown for names outside the known set.
pub const FALLBACK_EMOJI: &str = "😐";
/// Colour shown for names outside the known set.
pub const FALLBACK_COLOR: &str = "#CCCCCC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionType {
    Happy,
    Excited,
    Content,
    Calm,
    Anxious,
    Sad,
    Angry,
    Frustrated,
    Motivated,
    Optimistic,
    Grateful,
    Overwhelmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Positive,
    Negative,
}

impl EmotionType {
    /// All emotions in picker order.
    pub const ALL: [EmotionType; 12] = [
        EmotionType::Happy,
        EmotionType::Excited,
        EmotionType::Content,
        EmotionType::Calm,
        EmotionType::Anxious,
        EmotionType::Sad,
        EmotionType::Angry,
        EmotionType::Frustrated,
        EmotionType::Motivated,
        EmotionType::Optimistic,
        EmotionType::Grateful,
        EmotionType::Overwhelmed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionType::Happy => "happy",
            EmotionType::Excited => "excited",
            EmotionType::Content => "content",
            EmotionType::Calm => "calm",
            EmotionType::Anxious => "anxious",
            EmotionType::Sad => "sad",
            EmotionType::Angry => "angry",
            EmotionType::Frustrated => "frustrated",
            EmotionType::Motivated => "motivated",
            EmotionType::Optimistic => "optimistic",
            EmotionType::Grateful => "grateful",
            EmotionType::Overwhelmed => "overwhelmed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            EmotionType::Happy => "😊",
            EmotionType::Excited => "🤩",
            EmotionType::Content | EmotionType::Calm => "😌",
            EmotionType::Anxious => "😟",
            EmotionType::Sad => "😢",
            EmotionType::Angry => "😠",
            EmotionType::Frustrated => "😤",
            EmotionType::Motivated => "💪",
            EmotionType::Optimistic => "🙂",
            EmotionType::Grateful => "🙏",
            EmotionType::Overwhelmed => "😵",
        }
    }

    /// Hex colour (`#RRGGBB`).
    pub fn color(&self) -> &'static str {
        match self {
            EmotionType::Happy => "#FFD166",
            EmotionType::Excited => "#FF9F1C",
            EmotionType::Content => "#4ECDC4",
            EmotionType::Calm => "#83C5BE",
            EmotionType::Anxious => "#FFB347",
            EmotionType::Sad => "#6699CC",
            EmotionType::Angry => "#E84855",
            EmotionType::Frustrated => "#F25F5C",
            EmotionType::Motivated => "#6A0572",
            EmotionType::Optimistic => "#FFC857",
            EmotionType::Grateful => "#98C1D9",
            EmotionType::Overwhelmed => "#7B68EE",
        }
    }

    pub fn valence(&self) -> Valence {
        match self {
            EmotionType::Anxious
            | EmotionType::Sad
            | EmotionType::Angry
            | EmotionType::Frustrated
            | EmotionType::Overwhelmed => Valence::Negative,
            _ => Valence::Positive,
        }
    }

    /// Emotions sharing a valence, in picker order.
    pub fn group(valence: Valence) -> Vec<EmotionType> {
        Self::ALL
            .into_iter()
            .filter(|e| e.valence() == valence)
            .collect()
    }
}

impl fmt::Display for EmotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == needle)
            .ok_or_else(|| ValidationError::UnknownEmotion(s.to_string()))
    }
}

/// Emoji for an emotion given by name, falling back for unknown names.
pub fn emoji_for(name: &str) -> &'static str {
    name.parse::<EmotionType>()
        .map(|e| e.emoji())
        .unwrap_or(FALLBACK_EMOJI)
}

/// Colour for an emotion given by name, falling back for unknown names.
pub fn color_for(name: &str) -> &'static str {
    name.parse::<EmotionType>()
        .map(|e| e.color())
        .unwrap_or(FALLBACK_COLOR)
}
