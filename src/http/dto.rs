//! Data Transfer Objects for the HTTP API.
//!
//! The availability DTOs are re-exported from the core library since they
//! already derive Serialize/Deserialize; this module adds the request and
//! health types owned by the HTTP layer.

use serde::{Deserialize, Serialize};

pub use crate::api::{BuildingResult, GeoPoint, RoomAvailability, SlotRecord, SlotStatus};

/// Request body carrying the caller's position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationRequest {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl LocationRequest {
    /// Validate into an optional position: both fields or neither, values
    /// finite and within geographic range.
    pub fn into_position(self) -> Result<Option<GeoPoint>, String> {
        match (self.lat, self.lng) {
            (None, None) => Ok(None),
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng).map(Some),
            _ => Err("Invalid location data. 'lat' and 'lng' are required.".to_string()),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Checksum of the currently loaded catalog
    pub catalog_checksum: String,
    /// Number of buildings in the catalog
    pub buildings: usize,
}
