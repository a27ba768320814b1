//! Search orchestration state machine.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use marquee_search::{MovieSearch, SearchError, SearchResponse};

use crate::events::AppEvent;
use crate::notify::{ERROR_TOAST_DURATION, Notification, Notify};
use crate::state::SearchState;

/// Orchestrates the submission → fetch → commit pipeline.
///
/// Two phases: idle and loading. Each submission is tagged with a
/// monotonically increasing generation; a completion whose generation is
/// older than the latest submission is discarded without touching state,
/// so overlapping requests settle deterministically in favor of the
/// last-submitted query regardless of arrival order.
pub struct SearchOrchestrator {
    state: SearchState,
    provider: Arc<dyn MovieSearch>,
    notifier: Arc<dyn Notify>,
    events: mpsc::UnboundedReceiver<AppEvent>,
    completions: mpsc::UnboundedSender<AppEvent>,
    latest_generation: u64,
    in_flight: usize,
}

impl SearchOrchestrator {
    /// Creates an orchestrator consuming `events` (shared with the search
    /// bar) and dispatching requests through `provider`. Settlements are
    /// delivered back through `completions`, which must be a sender for
    /// the same channel as `events`.
    pub fn new(
        provider: Arc<dyn MovieSearch>,
        notifier: Arc<dyn Notify>,
        events: mpsc::UnboundedReceiver<AppEvent>,
        completions: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            state: SearchState::default(),
            provider,
            notifier,
            events,
            completions,
            latest_generation: 0,
            in_flight: 0,
        }
    }

    /// Current view-model snapshot.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Processes buffered events until every outstanding request settles.
    pub async fn run_until_idle(&mut self) {
        while self.in_flight > 0 || !self.events.is_empty() {
            match self.events.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
    }

    /// Applies a single pipeline event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::QuerySubmitted(query) => self.handle_submission(query),
            AppEvent::SearchCompleted { generation, result } => {
                self.handle_completion(generation, result);
            }
        }
    }

    fn handle_submission(&mut self, query: String) {
        self.latest_generation += 1;
        let generation = self.latest_generation;
        self.in_flight += 1;
        self.state.is_loading = true;

        let provider = Arc::clone(&self.provider);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let result = provider.search(&query).await;
            let _ = completions.send(AppEvent::SearchCompleted { generation, result });
        });
    }

    fn handle_completion(&mut self, generation: u64, result: Result<SearchResponse, SearchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if generation < self.latest_generation {
            // A newer submission supersedes this settlement.
            warn!(
                generation,
                latest = self.latest_generation,
                "discarding stale search completion"
            );
            return;
        }

        match result {
            Ok(response) => {
                info!(count = response.data.len(), "search results committed");
                self.state.movies = response.data;
                self.state.is_loading = false;
            }
            Err(error) => {
                self.notifier.notify(Notification::toast(
                    error.user_message(),
                    ERROR_TOAST_DURATION,
                ));
                self.state.is_loading = false;
            }
        }
    }
}
