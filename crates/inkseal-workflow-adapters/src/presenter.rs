use std::sync::{Arc, Mutex};

use inkseal_workflow_core::{Outcome, PresenterPort};

/// Outcome slot a UI polls from its repaint loop. The workflow writes the
/// settled outcome; the UI takes it on the next frame.
#[derive(Debug, Clone, Default)]
pub struct ChannelPresenter {
    slot: Arc<Mutex<Option<Outcome>>>,
}

impl ChannelPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<Outcome> {
        match self.slot.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl PresenterPort for ChannelPresenter {
    fn present(&self, outcome: &Outcome) {
        match self.slot.lock() {
            Ok(mut guard) => *guard = Some(outcome.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(outcome.clone()),
        }
    }
}

/// Headless presenter: surfaces outcomes through the log stream instead of
/// a UI.
#[derive(Debug, Clone, Default)]
pub struct LogPresenter;

impl PresenterPort for LogPresenter {
    fn present(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Completed(response) if response.succeeded => {
                tracing::info!(body = %response.body, "service responded");
            }
            Outcome::Completed(response) => {
                tracing::warn!(body = %response.body, "service responded with error status");
            }
            Outcome::Failed(err) => {
                tracing::error!(%err, "submission failed");
            }
        }
    }
}
