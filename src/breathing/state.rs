use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BreathPhase {
    Inhale,
    Hold1,
    Exhale,
    Hold2,
}

impl BreathPhase {
    pub const CYCLE: [BreathPhase; 4] = [
        BreathPhase::Inhale,
        BreathPhase::Hold1,
        BreathPhase::Exhale,
        BreathPhase::Hold2,
    ];

    pub fn from_index(index: u64) -> Self {
        Self::CYCLE[(index % 4) as usize]
    }

    /// Short instruction shown next to the progress bar.
    pub fn instruction(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Hold1 | BreathPhase::Hold2 => "Hold",
            BreathPhase::Exhale => "Exhale",
        }
    }
}

/// Durations for one box-breathing exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingConfig {
    pub total_duration: Duration,
    /// Length of each of the four phases.
    pub phase_duration: Duration,
    /// How often the host driver samples a running session.
    pub tick_interval: Duration,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            total_duration: Duration::from_secs(60),
            phase_duration: Duration::from_secs(4),
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl BreathingConfig {
    pub fn cycle_duration(&self) -> Duration {
        self.phase_duration * 4
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreathSample {
    pub phase: BreathPhase,
    pub progress_percent: u8,
    pub is_complete: bool,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl BreathSample {
    /// Derives the sample for a given elapsed time. Phase and progress depend only
    /// on `elapsed`, so irregular sampling can never skip a phase.
    pub fn at(config: &BreathingConfig, elapsed: Duration) -> Self {
        let elapsed_ms = elapsed.as_millis();
        let phase_ms = config.phase_duration.as_millis().max(1);
        let total_ms = config.total_duration.as_millis().max(1);

        let phase_index = (elapsed_ms % (phase_ms * 4)) / phase_ms;
        let progress = elapsed_ms.min(total_ms) * 100 / total_ms;

        Self {
            phase: BreathPhase::from_index(phase_index as u64),
            progress_percent: progress as u8,
            is_complete: elapsed_ms >= total_ms,
            elapsed,
        }
    }

    pub fn status_line(&self, config: &BreathingConfig) -> String {
        format!(
            "{} — {} seconds",
            self.phase.instruction(),
            config.phase_duration.as_secs()
        )
    }
}
