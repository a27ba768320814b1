//! Client-held view model of the current search.

use marquee_search::Movie;

/// Mutable view model consumed by downstream rendering.
///
/// Created once per session and mutated in place by the orchestrator.
/// `is_loading` is true only between a submission and its settlement; a
/// failed request resets `is_loading` while `movies` keeps its previous
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Current result set, in server order.
    pub movies: Vec<Movie>,

    /// Whether a submission is awaiting settlement.
    pub is_loading: bool,
}
