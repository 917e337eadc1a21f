//! Spinner-backed progress callback

use crate::cli::style::{check, cross, hyperlink_url, spinner_style, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use ost_admin::error::Error;
use ost_admin::submit::{ProgressCallback, SubmissionState};
use ost_admin::types::CommitReceipt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Shows a spinner while remote calls are in flight
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spin(&self, message: String) {
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        let bar = slot.get_or_insert_with(|| {
            let bar = ProgressBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        });
        bar.set_message(message);
    }

    fn stop(&self) {
        if let Some(bar) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            bar.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_state(&self, state: SubmissionState) {
        if state.is_in_flight() {
            self.spin(format!("{state}..."));
        } else {
            self.stop();
        }
    }

    async fn on_committed(&self, content_type: &str, receipt: &CommitReceipt) {
        println!(
            "{} Created content type {}",
            check(),
            content_type.accent()
        );
        if let Some(url) = &receipt.url {
            println!("  {}", hyperlink_url(url));
        }
    }

    async fn on_error(&self, error: &Error) {
        self.stop();
        eprintln!("{} {}", cross(), error.user_message().error());
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.muted());
    }
}
