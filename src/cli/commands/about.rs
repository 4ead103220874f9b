use anyhow::{Context, Result};

use crate::cli::args::ExportArgs;
use crate::AppState;

pub fn home() -> Result<()> {
    println!("🌱 Youth Wellness — a privacy-first companion. This is not a therapist.");
    println!("For emergencies, contact local services.\n");
    println!("What you can do here:");
    println!("  youthwell mood log <mood>     anonymous mood check-ins, stored locally");
    println!("  youthwell chat                supportive chat with an AI companion");
    println!("  youthwell breathe             one minute of guided box breathing");
    println!("  youthwell tip                 a quick well-being tip");
    println!("  youthwell learn [topic]       short psychoeducation topics");
    println!("  youthwell journal write ...   journaling, saved on this machine");
    println!("  youthwell about               where your data lives\n");
    println!("Crisis language in chat is detected and helplines are shown.");
    println!("Privacy: all data is stored locally in SQLite. The default chat backend runs offline.");
    Ok(())
}

pub fn about(state: &AppState) -> Result<()> {
    println!("About");
    println!("A student-focused, privacy-first wellness companion.\n");
    println!("Database: {}", state.db.path().display());
    println!("Settings: {}", state.settings.path().display());
    println!("Open the database with any SQLite viewer, or run `youthwell export` for JSON.");
    Ok(())
}

pub async fn export(state: &AppState, args: ExportArgs) -> Result<()> {
    let out = args
        .out
        .unwrap_or_else(|| state.data_dir.join("youthwell-export.json"));

    let snapshot = state.db.export_snapshot().await?;
    let serialized = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(&out, serialized)
        .with_context(|| format!("failed to write export to {}", out.display()))?;

    println!(
        "Exported {} moods and {} journal entries to {}",
        snapshot.moods.len(),
        snapshot.journals.len(),
        out.display()
    );
    Ok(())
}
