use anyhow::Result;

use crate::cli::args::{GratitudeArgs, JournalCommand, JournalSubcommand};
use crate::AppState;

pub async fn run(state: &AppState, cmd: JournalCommand) -> Result<()> {
    match cmd.subcommand {
        JournalSubcommand::Write { title, body } => {
            state.db.save_journal(&title, &body).await?;
            println!("Journal saved locally.");
        }
        JournalSubcommand::Recent { limit } => {
            let limit = limit.unwrap_or_else(|| state.settings.recent_limit());
            let entries = state.db.recent_journals(limit).await?;
            if entries.is_empty() {
                println!("No journal entries yet.");
                return Ok(());
            }

            println!("Recent entries");
            for entry in entries {
                println!(
                    "- {}  — {} UTC  (id: {})",
                    entry.title,
                    entry.written_at.format("%Y-%m-%d %H:%M:%S"),
                    entry.id
                );
            }
        }
    }
    Ok(())
}

pub async fn gratitude(state: &AppState, args: GratitudeArgs) -> Result<()> {
    state.db.save_gratitude(&args.text).await?;
    println!("Saved locally. Thank you for reflecting.");
    Ok(())
}
