use crate::api::{BuildingResult, GeoPoint};

use super::geo::{haversine_km, round_km};

/// Order building results by distance from the caller.
///
/// Without a caller position this is a no-op: no distance is computed and
/// aggregator (catalog) order is preserved. With one, every result gets a
/// rounded distance and the set is sorted ascending; the sort is stable so
/// exact ties keep catalog order. A building whose coordinates cannot be
/// interpreted keeps its place in the set, carries no distance, and sorts
/// after every building with a valid one.
pub fn rank_by_distance(results: &mut [BuildingResult], caller: Option<GeoPoint>) {
    let Some(caller) = caller else {
        return;
    };

    for result in results.iter_mut() {
        result.distance = result
            .position()
            .map(|position| round_km(haversine_km(caller, position)));
    }

    results.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
}

fn sort_key(result: &BuildingResult) -> f64 {
    result.distance.unwrap_or(f64::INFINITY)
}
