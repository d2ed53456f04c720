//! Domain models: the building catalog and wall-clock time handling.

pub mod catalog;
pub mod time;

pub use catalog::{Building, Catalog, CatalogStore, Room, TimeWindow, WeeklySlot};
pub use time::{LocalClock, TimeOfDay, WeekdayTagMap};
