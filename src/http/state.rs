//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::catalog::CatalogStore;
use crate::models::time::{LocalClock, WeekdayTagMap};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Reloadable catalog handle; handlers take a snapshot per request
    pub catalog: Arc<CatalogStore>,
    /// Clock fixed to the configured campus time zone
    pub clock: LocalClock,
    /// Calendar weekday -> catalog weekday vocabulary
    pub weekday_tags: Arc<WeekdayTagMap>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(catalog: Arc<CatalogStore>, clock: LocalClock, weekday_tags: WeekdayTagMap) -> Self {
        Self {
            catalog,
            clock,
            weekday_tags: Arc::new(weekday_tags),
        }
    }
}
