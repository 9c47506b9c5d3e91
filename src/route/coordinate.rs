//! Route coordinates and their bounding box.

use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// A geographic route point, enriched with road classification when the
/// road-network stage has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Raw highway tag of the matched road, when classified.
    pub highway: Option<String>,
    /// Canonical surface category, when classified.
    pub surface: Option<Surface>,
}

impl Coordinate {
    /// An unclassified coordinate at the given position.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng, highway: None, surface: None }
    }
}

/// Axis-aligned bounds of a coordinate set, in degrees.
///
/// Derived strictly from the coordinates; `min_lat <= max_lat` and
/// `min_lng <= max_lng` hold for any non-empty set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// World tile edge used by web-Mercator zoom computation, pixels.
const TILE_SIZE_PX: f64 = 256.0;
/// Largest zoom level a map widget is asked for.
const MAX_ZOOM: f64 = 21.0;

impl BoundingBox {
    /// Bounds of a non-empty coordinate slice.
    pub(crate) fn enclosing(coordinates: &[Coordinate]) -> Self {
        let first = &coordinates[0];
        let mut bbox = BoundingBox {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        for coordinate in &coordinates[1..] {
            bbox.min_lat = bbox.min_lat.min(coordinate.lat);
            bbox.max_lat = bbox.max_lat.max(coordinate.lat);
            bbox.min_lng = bbox.min_lng.min(coordinate.lng);
            bbox.max_lng = bbox.max_lng.max(coordinate.lng);
        }
        bbox
    }

    /// Visual center of the box.
    ///
    /// The latitude midpoint is taken in Mercator space (Gudermannian of the
    /// mean projected latitude) so the center matches what a map shows, not
    /// the arithmetic mean.
    pub fn center(&self) -> (f64, f64) {
        let top = mercator_y(self.max_lat);
        let bottom = mercator_y(self.min_lat);
        let center_lat = gudermannian((top + bottom) / 2.0).to_degrees();
        (center_lat, (self.max_lng + self.min_lng) / 2.0)
    }

    /// Highest web-Mercator zoom level that fits the box into a viewport of
    /// the given pixel size, capped at level 21.
    pub fn zoom_level(&self, map_width_px: u32, map_height_px: u32) -> i32 {
        let lng_fraction = (self.max_lng - self.min_lng) / 360.0;
        let lat_fraction =
            (mercator_y(self.max_lat) - mercator_y(self.min_lat)) / std::f64::consts::TAU;

        let zoom = |map_px: f64, fraction: f64| (map_px / TILE_SIZE_PX / fraction).log2().floor();
        let lng_zoom = zoom(f64::from(map_width_px), lng_fraction);
        let lat_zoom = zoom(f64::from(map_height_px), lat_fraction);

        // A degenerate axis yields an infinite zoom; the cap absorbs it.
        lat_zoom.min(lng_zoom).min(MAX_ZOOM) as i32
    }
}

/// Mercator-projected latitude.
fn mercator_y(lat_deg: f64) -> f64 {
    let sin_y = lat_deg.to_radians().sin();
    ((1.0 + sin_y) / (1.0 - sin_y)).ln() / 2.0
}

/// Inverse of the Mercator latitude projection, in radians.
fn gudermannian(y: f64) -> f64 {
    y.sinh().atan()
}
