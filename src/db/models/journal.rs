use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const GRATITUDE_TITLE: &str = "Gratitude Note";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub written_at: DateTime<Utc>,
}

/// Everything in the store, for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub exported_at: DateTime<Utc>,
    pub moods: Vec<super::MoodEntry>,
    pub journals: Vec<JournalEntry>,
}
