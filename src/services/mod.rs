//! Service layer: the availability aggregation engine.
//!
//! Pure computation over an in-memory catalog snapshot. The HTTP layer
//! resolves the clock and caller position, then delegates here.

pub mod availability;

pub mod classifier;

pub mod geo;

pub mod ranking;

pub mod rollup;

pub use availability::aggregate;
pub use classifier::{classify, classify_window, UPCOMING_WINDOW_MINUTES};
pub use geo::{haversine_km, round_km};
pub use ranking::rank_by_distance;
pub use rollup::rollup;
