use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::safety::{CrisisCheckResult, CrisisDetector};
use crate::{log_debug, log_warn};

use super::ChatModel;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Speaker {
    You,
    Companion,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::You => "You",
            Speaker::Companion => "AI",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub reply: String,
    pub crisis: CrisisCheckResult,
}

/// Pulls the reply out of a generation that may start by echoing the prompt.
/// Falls back to the whole generation when nothing is left after stripping.
pub fn extract_reply(prompt: &str, generated: &str) -> String {
    let remainder = generated.strip_prefix(prompt).unwrap_or(generated).trim();
    if remainder.is_empty() {
        generated.to_string()
    } else {
        remainder.to_string()
    }
}

/// One in-memory conversation. History is never persisted.
pub struct ChatSession {
    model: Box<dyn ChatModel>,
    detector: CrisisDetector,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(model: Box<dyn ChatModel>, detector: CrisisDetector) -> Self {
        Self {
            model,
            detector,
            history: Vec::new(),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Checks the message for crisis language. Runs before generation so the
    /// safety notice can be shown even if the model fails.
    pub fn screen(&self, input: &str) -> Result<CrisisCheckResult> {
        if input.trim().is_empty() {
            bail!("Please type something before sending.");
        }

        let crisis = self.detector.check(input);
        if crisis.flagged {
            log_warn!("Crisis language detected: {:?}", crisis.matched_terms);
        }
        Ok(crisis)
    }

    /// Asks the model for a reply and records both sides of the exchange.
    pub async fn respond(&mut self, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            bail!("Please type something before sending.");
        }

        let generated = self
            .model
            .generate(input)
            .await
            .with_context(|| format!("{} failed to respond", self.model.name()))?;
        let reply = extract_reply(input, &generated);
        log_debug!("Generated {} chars of reply", reply.len());

        self.history.push(ChatMessage {
            speaker: Speaker::You,
            text: input.to_string(),
        });
        self.history.push(ChatMessage {
            speaker: Speaker::Companion,
            text: reply.clone(),
        });

        Ok(reply)
    }

    pub async fn send(&mut self, input: &str) -> Result<ChatTurn> {
        let crisis = self.screen(input)?;
        let reply = self.respond(input).await?;
        Ok(ChatTurn { reply, crisis })
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// The last `limit` messages, oldest first.
    pub fn recent(&self, limit: usize) -> &[ChatMessage] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoingModel;

    #[async_trait]
    impl ChatModel for EchoingModel {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(format!("{prompt} I hear you."))
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModel for FailingModel {
        fn name(&self) -> &str {
            "offline"
        }

        async fn generate(&self, _prompt: &str) -> Result<String> {
            bail!("connection refused")
        }
    }

    #[test]
    fn test_extract_reply_strips_echoed_prompt() {
        assert_eq!(extract_reply("hi there", "hi there  how are you?"), "how are you?");
    }

    #[test]
    fn test_extract_reply_without_echo_is_trimmed() {
        assert_eq!(extract_reply("hi", "  hello friend "), "hello friend");
    }

    #[test]
    fn test_extract_reply_falls_back_when_empty() {
        assert_eq!(extract_reply("hi there", "hi there   "), "hi there   ");
    }

    #[tokio::test]
    async fn test_send_records_both_turns() {
        let mut session = ChatSession::new(Box::new(EchoingModel), CrisisDetector::default());
        let turn = session.send("rough day").await.unwrap();
        assert_eq!(turn.reply, "I hear you.");
        assert!(!turn.crisis.flagged);

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].speaker, Speaker::You);
        assert_eq!(history[1].text, "I hear you.");
    }

    #[tokio::test]
    async fn test_send_flags_crisis_and_still_replies() {
        let mut session = ChatSession::new(Box::new(EchoingModel), CrisisDetector::default());
        let turn = session.send("I feel worthless").await.unwrap();
        assert!(turn.crisis.flagged);
        assert_eq!(turn.crisis.matched_terms, vec!["worthless".to_string()]);
        assert_eq!(turn.reply, "I hear you.");
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let mut session = ChatSession::new(Box::new(EchoingModel), CrisisDetector::default());
        assert!(session.send("   ").await.is_err());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_leaves_history_untouched() {
        let mut session = ChatSession::new(Box::new(FailingModel), CrisisDetector::default());
        assert!(session.screen("I want to die").unwrap().flagged);
        assert!(session.send("hello").await.is_err());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_recent_keeps_last_messages() {
        let mut session = ChatSession::new(Box::new(EchoingModel), CrisisDetector::default());
        for i in 0..7 {
            session.send(&format!("message {i}")).await.unwrap();
        }
        let recent = session.recent(10);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].text, "message 2");
        assert_eq!(recent[9].text, "I hear you.");
    }
}
