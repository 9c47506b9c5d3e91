//! Route segments: the atomic unit of energy computation.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use crate::geodesy;
use crate::route::Coordinate;
use crate::surface::Surface;

/// The stretch of route between two consecutive coordinates.
///
/// Segments are built once from the coordinate sequence and then enriched in
/// place as elevation, classification, wind and energy stages run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Slope-corrected travel distance in meters.
    pub distance: f64,
    /// Geodesic ground distance in meters, before slope correction.
    ///
    /// Kept so the elevation stage can re-derive `distance` on every pass.
    pub planar_distance: f64,
    /// Heading in the wind-synchronized convention (south origin, clockwise),
    /// radians.
    pub angle: f64,
    /// Midpoint latitude in radians, for the gravity model.
    pub lat: f64,
    /// Mean elevation of the endpoints, meters.
    pub elevation: f64,
    /// Elevation delta over the segment, meters. Negative downhill.
    pub slope: f64,
    /// Wind component along the heading, m/s. Negative is tailwind.
    pub headwind: f64,
    /// Wind component across the heading, m/s.
    pub crosswind: f64,
    /// Raw highway tag inherited from the start coordinate, when classified.
    pub highway: Option<String>,
    /// Surface category inherited from the start coordinate, when classified.
    pub surface: Option<Surface>,
    /// Stored energy for this segment after the carry-forward policy, J.
    pub energy: f64,
}

impl Segment {
    /// Segment between two consecutive coordinates, before any enrichment.
    pub fn between(p0: &Coordinate, p1: &Coordinate) -> Self {
        let planar_distance = geodesy::distance(p0.lat, p0.lng, p1.lat, p1.lng);
        Self {
            distance: planar_distance,
            planar_distance,
            angle: geodesy::wind_angle(p0.lat, p0.lng, p1.lat, p1.lng),
            lat: ((p0.lat + p1.lat) / 2.0).to_radians(),
            elevation: 0.0,
            slope: 0.0,
            headwind: 0.0,
            crosswind: 0.0,
            highway: None,
            surface: None,
            energy: 0.0,
        }
    }

    /// Slope as a rise-over-run ratio.
    ///
    /// A zero-length segment has zero grade; the guard keeps coincident
    /// coordinates from propagating NaN into the power model.
    pub fn grade(&self) -> f64 {
        if self.distance == 0.0 {
            0.0
        } else {
            self.slope / self.distance
        }
    }

    /// Apply an elevation delta and mean, correcting the travel distance to
    /// the slope-adjusted hypotenuse of the geodesic ground distance.
    pub fn apply_slope(&mut self, slope: f64, elevation: f64) {
        self.slope = slope;
        self.elevation = elevation;
        self.distance =
            (self.planar_distance * self.planar_distance + slope * slope).sqrt();
    }

    /// Flip the segment for a route traversed in the opposite direction:
    /// directional quantities negate and the heading rotates by π.
    pub fn invert(&mut self) {
        self.slope = -self.slope;
        self.headwind = -self.headwind;
        self.crosswind = -self.crosswind;
        self.angle = (self.angle + PI).rem_euclid(TAU);
    }
}
