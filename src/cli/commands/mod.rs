pub mod about;
pub mod breathe;
pub mod chat;
pub mod journal;
pub mod learn;
pub mod mood;
pub mod safety;
pub mod settings;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::AppState;

pub async fn dispatch(state: &AppState, command: Commands) -> Result<()> {
    match command {
        Commands::Home => about::home(),
        Commands::Mood(cmd) => mood::run(state, cmd).await,
        Commands::Chat(args) => chat::run(state, args).await,
        Commands::Breathe => breathe::run(state).await,
        Commands::Tip => learn::tip(),
        Commands::Gratitude(args) => journal::gratitude(state, args).await,
        Commands::Learn(args) => learn::run(args),
        Commands::Journal(cmd) => journal::run(state, cmd).await,
        Commands::SafetyCheck(args) => safety::run(state, args),
        Commands::About => about::about(state),
        Commands::Export(args) => about::export(state, args).await,
        Commands::Settings(cmd) => settings::run(state, cmd),
    }
}
