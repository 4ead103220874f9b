use std::{sync::Mutex, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::settings::ChatSettings;

/// Opaque text generator. Returns the raw generation, which may echo the prompt.
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GenerationParameters {
    max_length: u32,
    do_sample: bool,
    top_k: u32,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: String,
}

/// Hosted text-generation endpoint speaking the `{"inputs", "parameters"}`
/// request shape and answering with `[{"generated_text": ...}]`.
pub struct HttpTextGenerator {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    parameters: GenerationParameters,
}

impl HttpTextGenerator {
    pub fn new(settings: &ChatSettings) -> Result<Self> {
        let endpoint = settings
            .endpoint
            .clone()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .ok_or_else(|| anyhow!("the http chat backend needs an endpoint"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            token: std::env::var(&settings.token_env).ok(),
            parameters: GenerationParameters {
                max_length: settings.max_length,
                do_sample: settings.do_sample,
                top_k: settings.top_k,
            },
        })
    }
}

#[async_trait]
impl ChatModel for HttpTextGenerator {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerationRequest {
            inputs: prompt,
            parameters: self.parameters,
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.endpoint))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("text generation failed with {status}: {body}");
        }

        let generations: Vec<Generation> = response
            .json()
            .await
            .context("unexpected text generation response")?;

        generations
            .into_iter()
            .next()
            .map(|generation| generation.generated_text)
            .ok_or_else(|| anyhow!("text generation returned no candidates"))
    }
}

const GENERAL_REPLIES: &[&str] = &[
    "Thank you for sharing that with me. How long have you been feeling this way?",
    "That sounds like a lot to carry. What would feel like one small step right now?",
    "I'm here to listen. Do you want to tell me more about it?",
    "It's okay to feel this way. Who is someone you trust that you could talk to today?",
    "Noticing how you feel is a good first step. What usually helps you unwind?",
];

const TOPIC_REPLIES: &[(&[&str], &str)] = &[
    (
        &["stress", "pressure", "exam", "deadline"],
        "Stress is your body's response to challenges. A short breathing break or writing things down can make it feel lighter.",
    ),
    (
        &["anxious", "anxiety", "panic", "worried", "nervous"],
        "Anxiety can feel overwhelming. Try grounding: name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
    ),
    (
        &["tired", "exhausted", "burnout", "burned out", "drained"],
        "It sounds like you might be running on empty. Rest and small enjoyable activities are real recovery, not wasted time.",
    ),
    (
        &["sleep", "insomnia", "awake"],
        "Sleep troubles are hard. A steady wind-down routine and less screen time before bed can help a little each night.",
    ),
    (
        &["lonely", "alone", "nobody"],
        "Feeling alone is painful. Reaching out to even one friend or family member with a short message can help.",
    ),
];

/// Offline companion that answers with supportive, topic-aware replies.
pub struct ScriptedCompanion {
    rng: Mutex<StdRng>,
}

impl ScriptedCompanion {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn reply_for(&self, prompt: &str) -> &'static str {
        let lowered = prompt.to_ascii_lowercase();
        if let Some((_, reply)) = TOPIC_REPLIES
            .iter()
            .find(|(cues, _)| cues.iter().any(|cue| lowered.contains(cue)))
        {
            return *reply;
        }

        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        GENERAL_REPLIES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(GENERAL_REPLIES[0])
    }
}

impl Default for ScriptedCompanion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for ScriptedCompanion {
    fn name(&self) -> &str {
        "scripted companion"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.reply_for(prompt).to_string())
    }
}
