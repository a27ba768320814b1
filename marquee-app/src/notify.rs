//! Transient user-facing notifications.
//!
//! Every failure path in the pipeline terminates in one of these toasts
//! plus a state reset, never a crash.

use std::time::Duration;

use tracing::warn;

/// Auto-dismiss duration for input-validation toasts.
pub const VALIDATION_TOAST_DURATION: Duration = Duration::from_secs(2);

/// Auto-dismiss duration for network and server failure toasts.
pub const ERROR_TOAST_DURATION: Duration = Duration::from_secs(5);

/// A transient, dismissible message shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Message text.
    pub message: String,

    /// Label of the manual-dismiss affordance.
    pub action_label: &'static str,

    /// Bounded auto-dismiss duration.
    pub duration: Duration,
}

impl Notification {
    /// Builds a toast with the standard `Close` affordance.
    pub fn toast(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            action_label: "Close",
            duration,
        }
    }
}

/// Sink for transient notifications.
pub trait Notify: Send + Sync {
    /// Surfaces a notification to the user.
    fn notify(&self, notification: Notification);
}

/// Notifier that routes toasts through the log output.
///
/// The terminal front end has no toast widget, so transient messages
/// surface as warnings instead.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, notification: Notification) {
        warn!(
            duration_ms = notification.duration.as_millis() as u64,
            "{}", notification.message
        );
    }
}
