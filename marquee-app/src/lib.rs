//! Marquee App - search pipeline orchestration
//!
//! Owns the query-submission → fetch → commit pipeline: the search-bar
//! input controller, the transient notification channel, and the
//! orchestrator state machine over the client-held view model.

#![warn(missing_docs)]

pub mod events;
pub mod notify;
pub mod orchestrator;
pub mod search_bar;
pub mod state;

// Re-export main types
pub use events::AppEvent;
pub use notify::{LogNotifier, Notification, Notify};
pub use orchestrator::SearchOrchestrator;
pub use search_bar::SearchBar;
pub use state::SearchState;
