//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Availability of a slot, room, or building relative to "now".
///
/// Ephemeral: recomputed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Upcoming,
    Unavailable,
}

impl SlotStatus {
    /// Rollup priority: higher wins when statuses are reduced.
    pub fn priority(&self) -> u8 {
        match self {
            SlotStatus::Available => 3,
            SlotStatus::Upcoming => 2,
            SlotStatus::Unavailable => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Upcoming => "upcoming",
            SlotStatus::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Interpret a GeoJSON coordinate pair. GeoJSON order is
    /// `[longitude, latitude]`; trailing elements (elevation) are ignored.
    pub fn from_geojson(coords: &[f64]) -> Option<Self> {
        match coords {
            [lng, lat, ..] => Self::new(*lat, *lng).ok(),
            _ => None,
        }
    }
}

/// One classified time window in a room's schedule for today.
///
/// Start/end echo the catalog's `HH:MM:SS` strings verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "EndTime")]
    pub end_time: String,
    #[serde(rename = "Status")]
    pub status: SlotStatus,
}

/// A room's classified slots for today plus its rolled-up status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub slots: Vec<SlotRecord>,
    pub room_status: SlotStatus,
}

/// Per-building availability record, constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingResult {
    /// Building display name
    pub building: String,
    /// Building code
    pub building_code: String,
    /// Rolled-up status over the included rooms
    pub building_status: SlotStatus,
    /// Room number -> classified slots + room status
    pub rooms: BTreeMap<String, RoomAvailability>,
    /// Building coordinates as stored in the catalog (`[lng, lat]`)
    pub coords: Vec<f64>,
    /// Distance from the caller in kilometers; present only when a caller
    /// position was supplied and the building's coordinates were usable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl BuildingResult {
    /// Building position, if the stored coordinates are usable.
    pub fn position(&self) -> Option<GeoPoint> {
        GeoPoint::from_geojson(&self.coords)
    }
}
