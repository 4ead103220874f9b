use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::breathing::{BreathOutcome, BreathingDriver};
use crate::AppState;

const COMPLETION_MESSAGE: &str = "Great — one minute done. How do you feel now?";

pub async fn run(state: &AppState) -> Result<()> {
    let controller = state.breathing.clone();
    let config = *controller.config();

    println!(
        "Box breathing: {}s inhale, {}s hold, {}s exhale, {}s hold. Ctrl+C stops early.",
        config.phase_duration.as_secs(),
        config.phase_duration.as_secs(),
        config.phase_duration.as_secs(),
        config.phase_duration.as_secs()
    );

    let session = controller.start();
    let driver = BreathingDriver::spawn(controller, session);
    let mut samples = driver.subscribe();

    let cancel = driver.cancel_token();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let bar = ProgressBar::new(100);
    bar.set_style(ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")?);

    loop {
        let sample = *samples.borrow_and_update();
        bar.set_position(u64::from(sample.progress_percent));
        bar.set_message(sample.status_line(&config));
        if sample.is_complete || samples.changed().await.is_err() {
            break;
        }
    }

    let outcome = driver.finished().await?;
    interrupt.abort();

    match outcome {
        BreathOutcome::Completed(_) => {
            bar.set_position(100);
            bar.finish_with_message(COMPLETION_MESSAGE);
        }
        BreathOutcome::Cancelled(sample) => {
            bar.abandon_with_message(format!(
                "Stopped at {}% — that's okay, every breath counts.",
                sample.progress_percent
            ));
        }
    }
    Ok(())
}
