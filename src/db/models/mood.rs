//! Mood check-in models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Angry,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Stressed,
        Mood::Angry,
        Mood::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
            Mood::Angry => "Angry",
            Mood::Neutral => "Neutral",
        }
    }

    /// Label shown in check-in lists.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊 Happy",
            Mood::Sad => "😔 Sad",
            Mood::Stressed => "😰 Stressed",
            Mood::Angry => "😡 Angry",
            Mood::Neutral => "😐 Neutral",
        }
    }
}

/// A single logged mood. Entries are append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: i64,
    pub mood: Mood,
    pub note: Option<String>,
    pub logged_at: DateTime<Utc>,
}
