use anyhow::Result;

use crate::cli::args::{MoodCommand, MoodSubcommand};
use crate::AppState;

pub async fn run(state: &AppState, cmd: MoodCommand) -> Result<()> {
    match cmd.subcommand {
        MoodSubcommand::Log { mood, note } => {
            state.db.log_mood(mood, note).await?;
            println!("Thanks — your mood was logged locally. It's okay to feel this way.");
        }
        MoodSubcommand::Recent { limit } => {
            let limit = limit.unwrap_or_else(|| state.settings.recent_limit());
            let entries = state.db.recent_moods(limit).await?;
            if entries.is_empty() {
                println!("No mood entries yet. Try logging one!");
                return Ok(());
            }

            println!("Recent check-ins");
            for entry in entries {
                let logged_at = entry.logged_at.format("%Y-%m-%d %H:%M:%S");
                match entry.note {
                    Some(note) => println!("- {}  — {} UTC  ({})", entry.mood.label(), logged_at, note),
                    None => println!("- {}  — {} UTC", entry.mood.label(), logged_at),
                }
            }
        }
    }
    Ok(())
}
