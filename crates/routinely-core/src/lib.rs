//! # Routinely Core Library
//!
//! This library provides the core logic for Routinely, a routine-and-emotion
//! tracker. The CLI binary is a thin presentation layer over it.
//!
//! ## Architecture
//!
//! - **Routine Catalog**: ordered, id-unique collection of routine templates
//! - **Routine Run**: a state machine that counts a private copy of a
//!   template down one tick at a time while tasks are checked off
//! - **Ticker**: cancellable one-shot delay re-armed after every tick
//! - **Emotion Log**: append-only, newest-first record of emotional states
//! - **Deadlines**: days-remaining and urgency classification
//!
//! ## Key Components
//!
//! - [`RunController`]: Core run state machine
//! - [`RunDriver`]: Run state machine paired with its [`Ticker`]
//! - [`AppStore`]: Owned catalog, emotion log and deadlines
//! - [`Config`]: Application configuration

pub mod config;
pub mod deadline;
pub mod emotion;
pub mod error;
pub mod events;
pub mod routine;
pub mod store;
pub mod timefmt;

pub use config::Config;
pub use deadline::{Deadline, DueLabel, RankedDeadline, Urgency};
pub use emotion::{EmotionEntry, EmotionLog, EmotionType, RelatedTo, RelationKind, Sentiment, Valence};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use routine::{
    RoutineCatalog, RoutineDraft, RoutineIcon, RoutineRun, RoutineTemplate, RoutineUpdate,
    RunController, RunDriver, RunState, RunView, Task, Ticker,
};
pub use store::AppStore;
pub use timefmt::format_time;
