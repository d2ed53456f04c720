// ============================================================================
// Catalog Parsing and Storage
// ============================================================================
//
// The catalog arrives as a GeoJSON-flavoured document: a feature collection
// whose properties carry the building identity and the per-room weekly slot
// schedule. Parsing flattens that wrapper into the Building/Room/WeeklySlot
// hierarchy the availability engine consumes.

use crate::api::GeoPoint;
use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Errors raised while interpreting a single catalog record.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("building feature is missing required field '{0}'")]
    MissingField(&'static str),
}

/// The full building catalog, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub buildings: Vec<Building>,
    /// SHA-256 of the raw JSON document, for diagnostics and cache busting.
    pub checksum: String,
}

/// One campus building with its rooms.
///
/// Identity fields stay optional here: a feature missing them is a
/// per-record failure that the aggregator isolates, not a parse failure
/// that would reject the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub name: Option<String>,
    pub code: Option<String>,
    /// GeoJSON point coordinates, `[lng, lat]`
    pub coordinates: Vec<f64>,
    pub rooms: Vec<Room>,
}

impl Building {
    /// Building position, if the stored coordinates are usable.
    pub fn position(&self) -> Option<GeoPoint> {
        GeoPoint::from_geojson(&self.coordinates)
    }
}

/// A room and its weekly open-slot schedule.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Room {
    #[serde(rename = "roomNumber")]
    pub room_number: String,
    #[serde(rename = "Schedule", default)]
    pub schedule: Vec<WeeklySlot>,
}

/// The open windows a room has on one weekday.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct WeeklySlot {
    /// Catalog weekday tag (catalog vocabulary, e.g. "THURS")
    #[serde(rename = "Weekday")]
    pub weekday: String,
    #[serde(rename = "Slots", default)]
    pub windows: Vec<TimeWindow>,
}

/// A single scheduled open interval, wall-clock `HH:MM:SS` strings.
///
/// Kept as strings so responses echo the catalog verbatim; the classifier
/// parses them and fails closed on malformed values.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct TimeWindow {
    #[serde(rename = "StartTime")]
    pub start: String,
    #[serde(rename = "EndTime")]
    pub end: String,
}

// Wire-shape intermediates, flattened away after deserialization.

#[derive(serde::Deserialize)]
struct CatalogDocument {
    data: FeatureCollection,
}

#[derive(serde::Deserialize, Default)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(serde::Deserialize)]
struct Feature {
    #[serde(default)]
    properties: FeatureProperties,
    #[serde(default)]
    geometry: Geometry,
}

#[derive(serde::Deserialize, Default)]
struct FeatureProperties {
    #[serde(rename = "buildingName")]
    building_name: Option<String>,
    #[serde(rename = "buildingCode")]
    building_code: Option<String>,
    #[serde(rename = "openClassroomSlots", default)]
    open_classroom_slots: SlotCollection,
}

#[derive(serde::Deserialize, Default)]
struct SlotCollection {
    #[serde(default)]
    data: Vec<Room>,
}

#[derive(serde::Deserialize, Default)]
struct Geometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

fn validate_input_catalog(catalog_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(catalog_json).context("Invalid catalog JSON")?;
    let has_data = value.as_object().and_then(|obj| obj.get("data")).is_some();
    if !has_data {
        anyhow::bail!("Missing required 'data' field");
    }
    Ok(())
}

/// Parse the catalog from its JSON document string.
///
/// Deserializes the GeoJSON-flavoured wrapper with Serde, flattens the
/// feature collection into [`Building`] records, and stamps the result
/// with a SHA-256 checksum of the raw document.
pub fn parse_catalog_json_str(catalog_json: &str) -> Result<Catalog> {
    validate_input_catalog(catalog_json)?;

    let document: CatalogDocument = serde_json::from_str(catalog_json)
        .context("Failed to deserialize catalog JSON using Serde")?;

    let buildings = document
        .data
        .features
        .into_iter()
        .map(|feature| Building {
            name: feature.properties.building_name,
            code: feature.properties.building_code,
            coordinates: feature.geometry.coordinates,
            rooms: feature.properties.open_classroom_slots.data,
        })
        .collect();

    Ok(Catalog {
        buildings,
        checksum: compute_catalog_checksum(catalog_json),
    })
}

/// Load and parse the catalog from a file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog_json_str(&raw)
}

/// Compute a checksum for the catalog JSON
fn compute_catalog_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Shared, reloadable catalog handle.
///
/// Requests clone the inner `Arc` and work against a consistent snapshot;
/// an external scheduler may swap in a freshly loaded catalog at any time
/// without readers observing a partial reload.
pub struct CatalogStore {
    inner: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the current catalog.
    pub fn current(&self) -> Arc<Catalog> {
        Arc::clone(&self.inner.read())
    }

    /// Swap in a new catalog.
    pub fn replace(&self, catalog: Catalog) {
        *self.inner.write() = Arc::new(catalog);
    }

    /// Reload from disk. On failure the previous catalog stays in place.
    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<()> {
        let catalog = load_catalog(path)?;
        self.replace(catalog);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
