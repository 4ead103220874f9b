use std::convert::TryFrom;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};

use crate::db::models::Mood;

pub fn limit_to_i64(limit: usize) -> Result<i64> {
    i64::try_from(limit).map_err(|_| anyhow!("limit {limit} exceeds SQLite INTEGER range"))
}

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_mood(value: &str) -> Result<Mood> {
    Mood::ALL
        .into_iter()
        .find(|mood| mood.as_str() == value)
        .ok_or_else(|| anyhow!("unknown mood {value}"))
}

/// Trims free text and maps blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mood_round_trips_names() {
        for mood in Mood::ALL {
            assert_eq!(parse_mood(mood.as_str()).unwrap(), mood);
        }
        assert!(parse_mood("Elated").is_err());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  exams  ".into())), Some("exams".into()));
        assert_eq!(non_blank(Some(" \n ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
