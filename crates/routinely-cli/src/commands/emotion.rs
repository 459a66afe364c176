//! Emotion log commands.

use chrono::Utc;
use clap::Subcommand;
use routinely_core::{EmotionEntry, EmotionLog, EmotionType, Sentiment};
use serde::Serialize;

use super::load_store;

#[derive(Subcommand)]
pub enum EmotionAction {
    /// Record today's emotion
    Record {
        /// Primary emotion (happy, calm, anxious, ...)
        emotion: EmotionType,
        /// Secondary emotion, repeatable
        #[arg(long = "secondary")]
        secondary: Vec<EmotionType>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Record an emotion shared with a person
    Connect {
        /// positive, neutral, negative, or an emotion name
        mood: String,
        /// Person ID
        #[arg(long, default_value = "1")]
        person: String,
        /// What happened (required)
        #[arg(long)]
        notes: String,
    },
    /// Show emoji and colour for every emotion
    Palette {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct PaletteRow {
    emotion: EmotionType,
    emoji: &'static str,
    color: &'static str,
    valence: routinely_core::Valence,
}

pub fn run(action: EmotionAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut store) = load_store()?;

    match action {
        EmotionAction::Record {
            emotion,
            secondary,
            notes,
        } => {
            let mut entry = EmotionEntry::check_in(emotion, Utc::now()).with_secondary(secondary);
            if let Some(notes) = notes {
                entry = entry.with_notes(notes);
            }
            let event = store.record_emotion(entry);
            println!("{}", serde_json::to_string_pretty(&event)?);
            print_log(store.emotions())?;
        }
        EmotionAction::Connect {
            mood,
            person,
            notes,
        } => {
            let emotion = match mood.parse::<Sentiment>() {
                Ok(sentiment) => sentiment.emotion(),
                Err(_) => mood.parse::<EmotionType>()?,
            };
            let event = store.record_connection(emotion, &notes, &person, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&event)?);
            print_log(store.emotions())?;
        }
        EmotionAction::Palette { json } => {
            let rows: Vec<PaletteRow> = EmotionType::ALL
                .into_iter()
                .map(|emotion| PaletteRow {
                    emotion,
                    emoji: emotion.emoji(),
                    color: emotion.color(),
                    valence: emotion.valence(),
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{} {:<12} {}", row.emoji, row.emotion.as_str(), row.color);
                }
            }
        }
    }
    Ok(())
}

fn print_log(log: &EmotionLog) -> Result<(), serde_json::Error> {
    let entries: Vec<&EmotionEntry> = log.entries().collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
