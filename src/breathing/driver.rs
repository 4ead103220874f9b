use anyhow::{Context, Result};
use tokio::{sync::watch, task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use crate::{log_debug, log_info};

use super::{BreathSample, BreathingController, SessionHandle};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathOutcome {
    Completed(BreathSample),
    Cancelled(BreathSample),
}

impl BreathOutcome {
    pub fn last_sample(&self) -> BreathSample {
        match self {
            BreathOutcome::Completed(sample) | BreathOutcome::Cancelled(sample) => *sample,
        }
    }
}

/// Host-side scheduler for one breathing session.
///
/// Samples the session every `tick_interval` and publishes each sample on a
/// watch channel until the session completes or the driver is cancelled. Phase
/// math stays in [`BreathingController::sample`].
pub struct BreathingDriver {
    samples: watch::Receiver<BreathSample>,
    cancel_token: CancellationToken,
    handle: JoinHandle<BreathOutcome>,
}

impl BreathingDriver {
    pub fn spawn(controller: BreathingController, session: SessionHandle) -> Self {
        let initial = controller.sample(&session, session.anchor());
        let (sample_tx, sample_rx) = watch::channel(initial);
        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(controller.config().tick_interval);
            let mut last = initial;

            log_info!("Breathing session {} started", session.id());

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        log_info!("Breathing session {} cancelled at {}%", session.id(), last.progress_percent);
                        return BreathOutcome::Cancelled(last);
                    }
                    _ = interval.tick() => {}
                }

                last = controller.sample_now(&session);
                sample_tx.send_replace(last);
                log_debug!(
                    "Breathing session {} sampled: {:?} {}%",
                    session.id(),
                    last.phase,
                    last.progress_percent
                );

                if last.is_complete {
                    log_info!("Breathing session {} completed", session.id());
                    return BreathOutcome::Completed(last);
                }
            }
        });

        Self {
            samples: sample_rx,
            cancel_token,
            handle,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BreathSample> {
        self.samples.clone()
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub async fn finished(self) -> Result<BreathOutcome> {
        self.handle
            .await
            .context("breathing driver task failed to join")
    }
}
