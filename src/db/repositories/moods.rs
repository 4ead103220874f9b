use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use rusqlite::{params, Row};

use crate::db::{
    connection::Database,
    helpers::{limit_to_i64, non_blank, parse_datetime, parse_mood},
    models::{Mood, MoodEntry},
};
use crate::log_info;

const ENABLE_LOGS: bool = true;

const SELECT_MOODS: &str = "SELECT id, mood, note, logged_at FROM moods";

fn row_to_mood(row: &Row) -> Result<MoodEntry> {
    let mood: String = row.get("mood")?;
    let logged_at: String = row.get("logged_at")?;

    Ok(MoodEntry {
        id: row.get("id")?,
        mood: parse_mood(&mood)?,
        note: row.get("note")?,
        logged_at: parse_datetime(&logged_at, "logged_at")?,
    })
}

impl Database {
    /// Appends a mood check-in. A blank note is stored as NULL.
    pub async fn log_mood(&self, mood: Mood, note: Option<String>) -> Result<MoodEntry> {
        let note = non_blank(note);
        let entry = self
            .execute(move |conn| {
                let now = Utc::now();
                conn.execute(
                    "INSERT INTO moods (mood, note, logged_at) VALUES (?1, ?2, ?3)",
                    params![mood.as_str(), note, now.to_rfc3339()],
                )
                .with_context(|| "failed to insert mood entry")?;

                let id = conn.last_insert_rowid();
                let mut stmt = conn.prepare(&format!("{SELECT_MOODS} WHERE id = ?1"))?;
                let mut rows = stmt.query(params![id])?;
                let entry = match rows.next()? {
                    Some(row) => row_to_mood(row)?,
                    None => return Err(anyhow!("Mood entry not found after insert")),
                };
                Ok(entry)
            })
            .await?;

        log_info!("Logged mood {} (id {})", entry.mood.as_str(), entry.id);
        Ok(entry)
    }

    /// Most recent check-ins, newest first.
    pub async fn recent_moods(&self, limit: usize) -> Result<Vec<MoodEntry>> {
        let limit = limit_to_i64(limit)?;
        self.execute(move |conn| {
            let mut stmt =
                conn.prepare(&format!("{SELECT_MOODS} ORDER BY id DESC LIMIT ?1"))?;
            let mut rows = stmt.query(params![limit])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_mood(row)?);
            }
            Ok(entries)
        })
        .await
    }

    pub async fn all_moods(&self) -> Result<Vec<MoodEntry>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_MOODS} ORDER BY id ASC"))?;
            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_mood(row)?);
            }
            Ok(entries)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("wellness.db")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_log_mood_stores_trimmed_note() {
        let (_dir, db) = open();
        let entry = db
            .log_mood(Mood::Stressed, Some("  exams tomorrow ".into()))
            .await
            .unwrap();
        assert_eq!(entry.mood, Mood::Stressed);
        assert_eq!(entry.note.as_deref(), Some("exams tomorrow"));

        let blank = db.log_mood(Mood::Happy, Some("   ".into())).await.unwrap();
        assert_eq!(blank.note, None);
    }

    #[tokio::test]
    async fn test_recent_moods_newest_first_and_limited() {
        let (_dir, db) = open();
        for mood in [Mood::Sad, Mood::Neutral, Mood::Happy] {
            db.log_mood(mood, None).await.unwrap();
        }

        let recent = db.recent_moods(2).await.unwrap();
        let moods: Vec<Mood> = recent.iter().map(|entry| entry.mood).collect();
        assert_eq!(moods, vec![Mood::Happy, Mood::Neutral]);

        assert_eq!(db.all_moods().await.unwrap().len(), 3);
        assert!(db.recent_moods(0).await.unwrap().is_empty());
    }
}
