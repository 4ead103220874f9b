//! Clap definitions for the `youthwell` command line.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::content::Topic;
use crate::db::Mood;
use crate::settings::ChatBackend;

/// A privacy-first wellness companion. Not a therapist.
#[derive(Parser, Debug)]
#[command(name = "youthwell", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Page to open; defaults to the welcome page.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Where the database and settings live.
    #[arg(long, global = true, env = "YOUTHWELL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Welcome page and feature overview.
    Home,

    /// Log or review mood check-ins.
    Mood(MoodCommand),

    /// Talk with the AI companion.
    Chat(ChatArgs),

    /// One minute of guided box breathing.
    Breathe,

    /// Show a random well-being tip.
    Tip,

    /// Save a quick gratitude note.
    Gratitude(GratitudeArgs),

    /// Short explanations of common topics.
    Learn(LearnArgs),

    /// Write or review journal entries.
    Journal(JournalCommand),

    /// Check a message for crisis language and show helplines if flagged.
    SafetyCheck(SafetyCheckArgs),

    /// About this app and where its data is stored.
    About,

    /// Export all moods and journals as JSON.
    Export(ExportArgs),

    /// Show or change settings.
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
pub struct MoodCommand {
    #[command(subcommand)]
    pub subcommand: MoodSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MoodSubcommand {
    /// Log how you are feeling today.
    Log {
        #[arg(value_enum)]
        mood: Mood,

        /// Optional note about what's on your mind.
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Recent check-ins, newest first.
    Recent {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Send a single message and exit instead of starting a conversation.
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Args, Debug)]
pub struct GratitudeArgs {
    /// One thing you're grateful for (or any quick note).
    pub text: String,
}

#[derive(Args, Debug)]
pub struct LearnArgs {
    /// Topic to read about; lists all topics when omitted.
    #[arg(value_enum)]
    pub topic: Option<Topic>,
}

#[derive(Args, Debug)]
pub struct JournalCommand {
    #[command(subcommand)]
    pub subcommand: JournalSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JournalSubcommand {
    /// Create a journal entry.
    Write {
        /// Entry title; "Untitled" when omitted.
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry text.
        body: String,
    },

    /// Recent entries, newest first.
    Recent {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(Args, Debug)]
pub struct SafetyCheckArgs {
    pub message: String,

    /// Print the check result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file; defaults to `youthwell-export.json` in the data directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SettingsCommand {
    #[command(subcommand)]
    pub subcommand: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SettingsSubcommand {
    /// Print the current settings.
    Show,

    /// Configure the chat backend.
    Chat {
        #[arg(long, value_enum)]
        backend: Option<ChatBackend>,

        /// Text-generation endpoint for the http backend.
        #[arg(long)]
        endpoint: Option<String>,

        /// Environment variable holding the endpoint's bearer token.
        #[arg(long)]
        token_env: Option<String>,

        #[arg(long)]
        max_length: Option<u32>,

        #[arg(long)]
        top_k: Option<u32>,
    },

    /// Number of entries shown by the recent listings.
    RecentLimit { limit: usize },
}
