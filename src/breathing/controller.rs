use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{BreathSample, BreathingConfig};

/// Opaque reference to a running exercise. Dropping it cancels the session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    id: String,
    started_at: DateTime<Utc>,
    anchor: Instant,
}

impl SessionHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn anchor(&self) -> Instant {
        self.anchor
    }
}

/// Starts breathing sessions and samples them. Holds no per-session state, so
/// sessions started from the same controller never interact.
#[derive(Debug, Clone, Default)]
pub struct BreathingController {
    config: BreathingConfig,
}

impl BreathingController {
    pub fn new(config: BreathingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BreathingConfig {
        &self.config
    }

    pub fn start(&self) -> SessionHandle {
        self.start_at(Instant::now())
    }

    pub fn start_at(&self, anchor: Instant) -> SessionHandle {
        SessionHandle {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            anchor,
        }
    }

    /// A `now` earlier than the session start counts as zero elapsed time.
    pub fn sample(&self, handle: &SessionHandle, now: Instant) -> BreathSample {
        let elapsed = now.saturating_duration_since(handle.anchor);
        BreathSample::at(&self.config, elapsed)
    }

    pub fn sample_now(&self, handle: &SessionHandle) -> BreathSample {
        self.sample(handle, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breathing::BreathPhase;
    use std::time::Duration;

    #[test]
    fn test_sample_tracks_elapsed_time() {
        let controller = BreathingController::default();
        let start = Instant::now();
        let handle = controller.start_at(start);

        let sample = controller.sample(&handle, start + Duration::from_secs(8));
        assert_eq!(sample.phase, BreathPhase::Exhale);
        assert_eq!(sample.progress_percent, 13);
        assert!(!sample.is_complete);
    }

    #[test]
    fn test_clock_skew_clamps_to_zero() {
        let controller = BreathingController::default();
        let start = Instant::now() + Duration::from_secs(30);
        let handle = controller.start_at(start);

        let sample = controller.sample(&handle, start - Duration::from_secs(5));
        assert_eq!(sample.phase, BreathPhase::Inhale);
        assert_eq!(sample.progress_percent, 0);
        assert!(!sample.is_complete);
    }

    #[test]
    fn test_sampling_after_completion_stays_complete() {
        let controller = BreathingController::default();
        let start = Instant::now();
        let handle = controller.start_at(start);

        for secs in [60, 61, 90, 120, 3_600] {
            let sample = controller.sample(&handle, start + Duration::from_secs(secs));
            assert!(sample.is_complete);
            assert_eq!(sample.progress_percent, 100);
        }
    }

    #[test]
    fn test_sessions_are_independent() {
        let controller = BreathingController::default();
        let base = Instant::now();
        let first = controller.start_at(base);
        let second = controller.start_at(base + Duration::from_secs(4));
        assert_ne!(first.id(), second.id());

        let now = base + Duration::from_secs(8);
        assert_eq!(controller.sample(&first, now).phase, BreathPhase::Exhale);
        assert_eq!(controller.sample(&second, now).phase, BreathPhase::Hold1);
    }

    #[test]
    fn test_irregular_sampling_never_regresses() {
        let controller = BreathingController::default();
        let start = Instant::now();
        let handle = controller.start_at(start);

        let mut last = 0;
        for secs in [0, 1, 7, 7, 19, 33, 34, 58, 59] {
            let sample = controller.sample(&handle, start + Duration::from_secs(secs));
            assert!(sample.progress_percent >= last);
            last = sample.progress_percent;
        }
    }
}
