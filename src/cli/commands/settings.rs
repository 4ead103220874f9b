use anyhow::Result;

use crate::cli::args::{SettingsCommand, SettingsSubcommand};
use crate::AppState;

pub fn run(state: &AppState, cmd: SettingsCommand) -> Result<()> {
    match cmd.subcommand {
        SettingsSubcommand::Show => {
            println!("{}", serde_json::to_string_pretty(&state.settings.snapshot())?);
        }
        SettingsSubcommand::Chat {
            backend,
            endpoint,
            token_env,
            max_length,
            top_k,
        } => {
            let mut chat = state.settings.chat();
            if let Some(backend) = backend {
                chat.backend = backend;
            }
            if let Some(endpoint) = endpoint {
                chat.endpoint = Some(endpoint);
            }
            if let Some(token_env) = token_env {
                chat.token_env = token_env;
            }
            if let Some(max_length) = max_length {
                chat.max_length = max_length;
            }
            if let Some(top_k) = top_k {
                chat.top_k = top_k;
            }
            state.settings.update_chat(chat)?;
            println!("Chat settings saved to {}", state.settings.path().display());
        }
        SettingsSubcommand::RecentLimit { limit } => {
            state.settings.update_recent_limit(limit)?;
            println!("Recent listings now show {limit} entries.");
        }
    }
    Ok(())
}
