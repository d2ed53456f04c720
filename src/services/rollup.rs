use crate::api::SlotStatus;

/// Reduce a collection of statuses to the single highest-priority one.
///
/// Priority order: `available` > `upcoming` > `unavailable`. An empty
/// input returns `unavailable`, the defined floor. Order-independent over
/// the input multiset. Applied twice per building: once over each room's
/// slot statuses and once over the included rooms' statuses.
pub fn rollup<I>(statuses: I) -> SlotStatus
where
    I: IntoIterator<Item = SlotStatus>,
{
    statuses
        .into_iter()
        .max_by_key(SlotStatus::priority)
        .unwrap_or(SlotStatus::Unavailable)
}
