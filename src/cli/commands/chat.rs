use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::chat::{build_model, ChatSession};
use crate::cli::args::ChatArgs;
use crate::safety::SafetyNotice;
use crate::AppState;

use super::safety::print_notice;

const DISCLAIMER: &str = "Disclaimer: the AI is a supportive companion, not a therapist. \
For serious mental health issues, seek professional help.";

async fn exchange(session: &mut ChatSession, input: &str) -> Result<()> {
    let crisis = match session.screen(input) {
        Ok(crisis) => crisis,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };
    if crisis.flagged {
        print_notice(&SafetyNotice::standard());
    }

    match session.respond(input).await {
        Ok(reply) => println!("AI: {reply}"),
        Err(err) => {
            log::error!("Chat generation failed: {err:#}");
            println!("The companion couldn't answer right now ({err}).");
        }
    }
    Ok(())
}

pub async fn run(state: &AppState, args: ChatArgs) -> Result<()> {
    let chat_settings = state.settings.chat();
    let model = build_model(&chat_settings)?;
    let mut session = ChatSession::new(model, state.detector.clone());

    if let Some(message) = args.message {
        exchange(&mut session, &message).await?;
        println!("\n{DISCLAIMER}");
        return Ok(());
    }

    println!("💬 Chat with AI Companion ({})", session.model_name());
    println!("Type a message and press Enter. Type /history to replay, /quit to leave.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"You: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            break;
        };

        match line.trim() {
            "/quit" | "/exit" => break,
            "/history" => {
                for message in session.recent(chat_settings.history_limit) {
                    println!("{}: {}", message.speaker.label(), message.text);
                }
            }
            _ => exchange(&mut session, &line).await?,
        }
    }

    println!("\n{DISCLAIMER}");
    Ok(())
}
