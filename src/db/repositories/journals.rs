use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use rusqlite::{params, Row};

use crate::db::{
    connection::Database,
    helpers::{limit_to_i64, parse_datetime},
    models::{ExportSnapshot, JournalEntry, GRATITUDE_TITLE, UNTITLED},
};
use crate::log_info;

const ENABLE_LOGS: bool = true;

const SELECT_JOURNALS: &str = "SELECT id, title, body, written_at FROM journals";

fn row_to_journal(row: &Row) -> Result<JournalEntry> {
    let written_at: String = row.get("written_at")?;

    Ok(JournalEntry {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        written_at: parse_datetime(&written_at, "written_at")?,
    })
}

impl Database {
    /// Saves a journal entry. The body is trimmed and must not be empty; a blank
    /// title becomes "Untitled".
    pub async fn save_journal(&self, title: &str, body: &str) -> Result<JournalEntry> {
        let body = body.trim().to_string();
        if body.is_empty() {
            bail!("Write something before saving.");
        }
        let title = match title.trim() {
            "" => UNTITLED.to_string(),
            trimmed => trimmed.to_string(),
        };

        let entry = self
            .execute(move |conn| {
                let now = Utc::now();
                conn.execute(
                    "INSERT INTO journals (title, body, written_at) VALUES (?1, ?2, ?3)",
                    params![title, body, now.to_rfc3339()],
                )
                .with_context(|| "failed to insert journal entry")?;

                let id = conn.last_insert_rowid();
                let mut stmt = conn.prepare(&format!("{SELECT_JOURNALS} WHERE id = ?1"))?;
                let mut rows = stmt.query(params![id])?;
                let entry = match rows.next()? {
                    Some(row) => row_to_journal(row)?,
                    None => return Err(anyhow!("Journal entry not found after insert")),
                };
                Ok(entry)
            })
            .await?;

        log_info!("Saved journal entry {} (id {})", entry.title, entry.id);
        Ok(entry)
    }

    pub async fn save_gratitude(&self, note: &str) -> Result<JournalEntry> {
        self.save_journal(GRATITUDE_TITLE, note).await
    }

    /// Most recent entries, newest first.
    pub async fn recent_journals(&self, limit: usize) -> Result<Vec<JournalEntry>> {
        let limit = limit_to_i64(limit)?;
        self.execute(move |conn| {
            let mut stmt =
                conn.prepare(&format!("{SELECT_JOURNALS} ORDER BY id DESC LIMIT ?1"))?;
            let mut rows = stmt.query(params![limit])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_journal(row)?);
            }
            Ok(entries)
        })
        .await
    }

    pub async fn all_journals(&self) -> Result<Vec<JournalEntry>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_JOURNALS} ORDER BY id ASC"))?;
            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_journal(row)?);
            }
            Ok(entries)
        })
        .await
    }

    pub async fn export_snapshot(&self) -> Result<ExportSnapshot> {
        Ok(ExportSnapshot {
            exported_at: Utc::now(),
            moods: self.all_moods().await?,
            journals: self.all_journals().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Mood;

    fn open() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("wellness.db")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn test_blank_title_becomes_untitled() {
        let (_dir, db) = open();
        let entry = db.save_journal("  ", "  slept well  ").await.unwrap();
        assert_eq!(entry.title, UNTITLED);
        assert_eq!(entry.body, "slept well");
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let (_dir, db) = open();
        assert!(db.save_journal("Monday", " \n ").await.is_err());
        assert!(db.recent_journals(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_journals_newest_first() {
        let (_dir, db) = open();
        db.save_journal("First", "one").await.unwrap();
        db.save_gratitude("my friends").await.unwrap();
        db.save_journal("Third", "three").await.unwrap();

        let titles: Vec<String> = db
            .recent_journals(2)
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.title)
            .collect();
        assert_eq!(titles, vec!["Third".to_string(), GRATITUDE_TITLE.to_string()]);
    }

    #[tokio::test]
    async fn test_export_snapshot_contains_everything() {
        let (_dir, db) = open();
        db.log_mood(Mood::Neutral, None).await.unwrap();
        db.save_journal("Entry", "body").await.unwrap();

        let snapshot = db.export_snapshot().await.unwrap();
        assert_eq!(snapshot.moods.len(), 1);
        assert_eq!(snapshot.journals.len(), 1);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["journals"][0]["title"], "Entry");
        assert_eq!(json["moods"][0]["mood"], "neutral");
    }
}
