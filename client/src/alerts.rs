//! User-facing alert delivery
//!
//! The core never renders UI; blocking alerts are handed to the shell
//! through [`AlertSink`]. The default sink logs them, the mobile shell maps
//! them to modal dialogs, and tests record them.

use std::sync::Mutex;

/// A short blocking message with an acknowledgement button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

pub trait AlertSink: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}

/// Default sink: alerts become warn-level log lines
#[derive(Debug, Default)]
pub struct TracingAlerts;

impl AlertSink for TracingAlerts {
    fn alert(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "user alert");
    }
}

/// Records alerts for inspection in tests
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts.lock().expect("alerts lock poisoned"))
    }
}

impl AlertSink for RecordingAlerts {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .expect("alerts lock poisoned")
            .push(Alert {
                title: title.to_string(),
                message: message.to_string(),
            });
    }
}
