//! Search input controller.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::events::AppEvent;
use crate::notify::{Notification, Notify, VALIDATION_TOAST_DURATION};

/// Toast shown when the held query is empty or whitespace-only.
const INVALID_QUERY_MESSAGE: &str = "Please enter a valid search query";

/// Owns the search input text and validates submissions.
///
/// A valid submission emits the raw, untrimmed query downstream exactly
/// once; an invalid one surfaces a short toast and emits nothing. A
/// rejection is never an error to the caller.
#[derive(Clone)]
pub struct SearchBar {
    input: String,
    events: mpsc::UnboundedSender<AppEvent>,
    notifier: Arc<dyn Notify>,
}

impl SearchBar {
    /// Creates a search bar emitting submissions into `events`.
    pub fn new(events: mpsc::UnboundedSender<AppEvent>, notifier: Arc<dyn Notify>) -> Self {
        Self {
            input: String::new(),
            events,
            notifier,
        }
    }

    /// Replaces the held input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Currently held input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submits the held query.
    ///
    /// Validation gates on the trimmed form, but the emitted value is the
    /// raw held text.
    pub fn submit(&self) {
        if self.input.trim().is_empty() {
            self.notifier.notify(Notification::toast(
                INVALID_QUERY_MESSAGE,
                VALIDATION_TOAST_DURATION,
            ));
            return;
        }

        debug!(query = %self.input, "query submitted");
        let _ = self.events.send(AppEvent::QuerySubmitted(self.input.clone()));
    }
}
