//! Availability aggregation across the building → room → slot hierarchy.
//!
//! Entry point of the engine: classify every window scheduled for the
//! resolved weekday, roll statuses up per room and per building, and emit
//! one [`BuildingResult`] per building that has scheduled use today.

use std::collections::BTreeMap;

use tracing::warn;

use crate::api::{BuildingResult, RoomAvailability, SlotRecord, SlotStatus};
use crate::models::catalog::{Building, Catalog, CatalogError, Room};
use crate::models::time::TimeOfDay;

use super::classifier::classify_window;
use super::rollup::rollup;

/// Compute one result per building with scheduled use on `weekday_tag`.
///
/// Output order is catalog insertion order; ranking happens afterwards.
/// A building whose record cannot be processed is skipped with a warning
/// and the aggregation continues — one bad record degrades the response,
/// it does not fail the request.
pub fn aggregate(catalog: &Catalog, now: TimeOfDay, weekday_tag: &str) -> Vec<BuildingResult> {
    let mut results = Vec::new();
    for building in &catalog.buildings {
        match building_availability(building, now, weekday_tag) {
            Ok(Some(result)) => results.push(result),
            Ok(None) => {}
            Err(err) => {
                warn!(
                    building = building.code.as_deref().unwrap_or("<unknown>"),
                    %err,
                    "skipping malformed building record"
                );
            }
        }
    }
    results
}

fn building_availability(
    building: &Building,
    now: TimeOfDay,
    weekday_tag: &str,
) -> Result<Option<BuildingResult>, CatalogError> {
    let name = building
        .name
        .clone()
        .ok_or(CatalogError::MissingField("buildingName"))?;
    let code = building
        .code
        .clone()
        .ok_or(CatalogError::MissingField("buildingCode"))?;

    let mut rooms = BTreeMap::new();
    let mut room_statuses: Vec<SlotStatus> = Vec::new();
    for room in &building.rooms {
        let Some(availability) = room_availability(room, now, weekday_tag) else {
            continue;
        };
        room_statuses.push(availability.room_status);
        rooms.insert(room.room_number.clone(), availability);
    }

    // A building with no room scheduled today is omitted entirely.
    if rooms.is_empty() {
        return Ok(None);
    }

    Ok(Some(BuildingResult {
        building: name,
        building_code: code,
        building_status: rollup(room_statuses),
        rooms,
        coords: building.coordinates.clone(),
        distance: None,
    }))
}

/// Classify the room's windows for the requested weekday. `None` when the
/// room has no scheduled use that day — it is omitted from the output, not
/// emitted with an empty status.
fn room_availability(room: &Room, now: TimeOfDay, weekday_tag: &str) -> Option<RoomAvailability> {
    let mut slots = Vec::new();
    for entry in &room.schedule {
        if entry.weekday != weekday_tag {
            continue;
        }
        for window in &entry.windows {
            slots.push(SlotRecord {
                start_time: window.start.clone(),
                end_time: window.end.clone(),
                status: classify_window(now, window),
            });
        }
    }

    if slots.is_empty() {
        return None;
    }

    let room_status = rollup(slots.iter().map(|slot| slot.status));
    Some(RoomAvailability { slots, room_status })
}
