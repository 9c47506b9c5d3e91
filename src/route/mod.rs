//! Route model and enrichment lifecycle.
//!
//! A [`Route`] is built once from raw coordinates and then progressively
//! enriched as external data arrives: elevation samples, road-network
//! classification, a weather observation, and finally an exercise whose
//! energy pass fills the per-segment and aggregate figures. Every enrichment
//! stage is idempotent and re-runnable with fresh data, in any order; the
//! energy pass always recomputes its aggregates from scratch so arrival
//! order cannot corrupt them.

pub mod coordinate;
pub mod energy;
pub mod segment;

pub use coordinate::{BoundingBox, Coordinate};
pub use energy::EnergyTotals;
pub use segment::Segment;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::exercise::Exercise;
use crate::surface::classifier::{self, RoadNetwork};
use crate::weather::{Weather, WeatherObservation};

/// Route construction and orchestration errors.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("a route needs at least two coordinates, got {found}")]
    TooFewCoordinates { found: usize },

    #[error("no exercise attached to the route")]
    MissingExercise,
}

/// One elevation sample as reported by an external source.
///
/// The sample sequence has its own cardinality, independent of the
/// coordinate count; samples map to segments by proportional index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    /// Elevation above sea level, meters.
    pub elevation: f64,
}

/// The furthest enrichment stage whose data is present.
///
/// Construction segments the route immediately, so `Segmented` is the first
/// observable stage. Enrichment may complete out of canonical order; the
/// accessor reports the furthest stage all of whose predecessors are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RouteStage {
    /// Bounding box and segments are built.
    Segmented,
    /// Slope and elevation are applied, distances slope-corrected.
    Elevated,
    /// Surface and highway classification has run.
    Classified,
    /// Wind vectors are resolved against a weather state.
    Weighted,
    /// Per-segment and aggregate energy are computed.
    Energized,
}

/// An ordered geographic route with its derived segments and aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    coordinates: Vec<Coordinate>,
    segments: Vec<Segment>,
    elevations: Vec<ElevationSample>,
    bbox: BoundingBox,
    weather: Option<Weather>,
    exercise: Option<Exercise>,
    energy: EnergyTotals,
    classified: bool,
    energized: bool,
}

impl Route {
    /// Build a route from an ordered list of (latitude, longitude) pairs.
    ///
    /// Needs at least two points. Segments are built immediately:
    /// `segments().len() == coordinates().len() - 1`.
    pub fn new(points: &[(f64, f64)]) -> Result<Self, RouteError> {
        if points.len() < 2 {
            return Err(RouteError::TooFewCoordinates { found: points.len() });
        }
        let coordinates: Vec<Coordinate> =
            points.iter().map(|&(lat, lng)| Coordinate::new(lat, lng)).collect();
        let bbox = BoundingBox::enclosing(&coordinates);
        let segments =
            coordinates.windows(2).map(|pair| Segment::between(&pair[0], &pair[1])).collect();
        Ok(Self {
            coordinates,
            segments,
            elevations: Vec::new(),
            bbox,
            weather: None,
            exercise: None,
            energy: EnergyTotals::default(),
            classified: false,
            energized: false,
        })
    }

    /// Apply an elevation profile, or the failure signal (`None`).
    ///
    /// On failure every sample defaults to sea level, so slopes come out
    /// flat rather than leaving the route partially initialized. Segment
    /// distances are re-derived from the geodesic ground distance on every
    /// call, so repeating the stage never compounds the slope correction.
    pub fn apply_elevations(&mut self, samples: Option<Vec<ElevationSample>>) {
        let samples = match samples {
            Some(samples) if !samples.is_empty() => samples,
            _ => {
                tracing::warn!("elevation data unavailable; defaulting every sample to sea level");
                vec![ElevationSample { elevation: 0.0 }; self.coordinates.len()]
            }
        };
        self.elevations = samples;
        for index in 0..self.segments.len() {
            let first = self.elevations[self.sample_index_for_segment(index)].elevation;
            let second = self.elevations[self.sample_index_for_segment(index + 1)].elevation;
            self.segments[index].apply_slope(second - first, (first + second) / 2.0);
        }
    }

    /// Elevation sample index for a segment boundary, by proportional
    /// rounding over the independent cardinalities.
    pub fn sample_index_for_segment(&self, segment_index: usize) -> usize {
        if self.elevations.is_empty() {
            return 0;
        }
        let ratio = (self.elevations.len() - 1) as f64 / self.segments.len() as f64;
        (ratio * segment_index as f64).round() as usize
    }

    /// Coordinate index a given elevation sample describes, by proportional
    /// rounding. The inverse mapping of [`Route::sample_index_for_segment`].
    pub fn coordinate_index_for_sample(&self, sample_index: usize) -> usize {
        if self.elevations.is_empty() {
            return 0;
        }
        let ratio = (self.coordinates.len() - 1) as f64 / self.elevations.len() as f64;
        (ratio * sample_index as f64).round() as usize
    }

    /// Classify coordinates and segments against a road network.
    ///
    /// A segment inherits highway and surface from its start coordinate only
    /// when **both** endpoints resolved a highway; otherwise it stays in the
    /// "undefined" bucket.
    pub fn apply_road_network(&mut self, network: &RoadNetwork) {
        for coordinate in &mut self.coordinates {
            classifier::classify(network, coordinate);
        }
        for index in 0..self.segments.len() {
            let both_classified = self.coordinates[index].highway.is_some()
                && self.coordinates[index + 1].highway.is_some();
            if both_classified {
                self.segments[index].highway = self.coordinates[index].highway.clone();
                self.segments[index].surface = self.coordinates[index].surface;
            } else {
                self.segments[index].highway = None;
                self.segments[index].surface = None;
            }
        }
        self.classified = true;
    }

    /// Attach a weather observation, or the failure signal (`None`).
    ///
    /// On failure the route falls back to standard conditions. Per-segment
    /// wind vectors are resolved immediately; if an exercise is already
    /// attached the energy pass re-runs so no stale figures survive the new
    /// observation.
    pub fn apply_weather(&mut self, observation: Option<WeatherObservation>) {
        let weather = match observation {
            Some(observation) => Weather::from(observation),
            None => {
                tracing::warn!("weather observation unavailable; using standard conditions");
                Weather::default()
            }
        };
        self.weather = Some(weather);
        self.resolve_winds();
        if let Some(exercise) = self.exercise.clone() {
            self.run_energy_pass(&exercise);
        }
    }

    /// Attach an exercise for the energy pass.
    ///
    /// Swapping the exercise does not merge figures: the next
    /// [`Route::recompute_energy`] zeroes the aggregates and recomputes.
    pub fn set_exercise(&mut self, exercise: Exercise) {
        self.exercise = Some(exercise);
    }

    fn resolve_winds(&mut self) {
        let Some(weather) = self.weather.as_ref() else {
            return;
        };
        for segment in &mut self.segments {
            segment.headwind = weather.headwind(segment.angle);
            segment.crosswind = weather.crosswind(segment.angle);
        }
    }

    /// Reverse the direction of travel.
    ///
    /// Coordinates, elevation samples and segments reverse together;
    /// directional quantities negate and headings rotate by π. Inverting
    /// twice restores the original figures. Re-runs the energy pass when an
    /// exercise is attached.
    pub fn invert(&mut self) {
        self.coordinates.reverse();
        self.elevations.reverse();
        self.segments.reverse();
        for segment in &mut self.segments {
            segment.invert();
        }
        if let Some(exercise) = self.exercise.clone() {
            self.run_energy_pass(&exercise);
        }
    }

    /// The furthest enrichment stage whose data is present.
    pub fn stage(&self) -> RouteStage {
        if self.elevations.is_empty() {
            RouteStage::Segmented
        } else if !self.classified {
            RouteStage::Elevated
        } else if self.weather.is_none() {
            RouteStage::Classified
        } else if !self.energized {
            RouteStage::Weighted
        } else {
            RouteStage::Energized
        }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn elevations(&self) -> &[ElevationSample] {
        &self.elevations
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn weather(&self) -> Option<&Weather> {
        self.weather.as_ref()
    }

    pub fn exercise(&self) -> Option<&Exercise> {
        self.exercise.as_ref()
    }

    /// Aggregate energy figures from the last pass.
    pub fn energy_totals(&self) -> &EnergyTotals {
        &self.energy
    }

    /// Sum of segment travel distances, meters.
    pub fn total_distance(&self) -> f64 {
        self.segments.iter().map(|segment| segment.distance).sum()
    }

    /// Sum of segment elevation deltas, meters.
    pub fn total_slope(&self) -> f64 {
        self.segments.iter().map(|segment| segment.slope).sum()
    }

    /// Travel time at the attached exercise's cruise speed, seconds.
    pub fn total_time(&self) -> Option<f64> {
        self.exercise.as_ref().map(|exercise| self.total_distance() / exercise.cruise_speed)
    }

    /// Distance-weighted mean headwind, m/s. Negative means net tailwind.
    pub fn average_headwind(&self) -> f64 {
        self.distance_weighted(|segment| segment.headwind)
    }

    /// Distance-weighted mean of the absolute headwind, m/s.
    pub fn average_absolute_headwind(&self) -> f64 {
        self.distance_weighted(|segment| segment.headwind.abs())
    }

    /// Distance-weighted mean crosswind, m/s.
    pub fn average_crosswind(&self) -> f64 {
        self.distance_weighted(|segment| segment.crosswind)
    }

    /// Distance-weighted mean of the absolute crosswind, m/s.
    pub fn average_absolute_crosswind(&self) -> f64 {
        self.distance_weighted(|segment| segment.crosswind.abs())
    }

    fn distance_weighted(&self, value: impl Fn(&Segment) -> f64) -> f64 {
        let distance = self.total_distance();
        if distance == 0.0 {
            return 0.0;
        }
        self.segments.iter().map(|segment| value(segment) * segment.distance).sum::<f64>()
            / distance
    }

    /// Net route energy over travel time, W.
    pub fn energy_per_second(&self) -> Option<f64> {
        self.total_time().map(|time| if time == 0.0 { 0.0 } else { self.energy.total / time })
    }

    /// Net route energy over distance, J/m.
    pub fn energy_per_meter(&self) -> f64 {
        let distance = self.total_distance();
        if distance == 0.0 {
            0.0
        } else {
            self.energy.total / distance
        }
    }

    /// Distance covered per surface category, with unclassified segments
    /// under the explicit "undefined" key.
    pub fn distance_by_surface(&self) -> BTreeMap<String, f64> {
        let mut histogram = BTreeMap::new();
        for segment in &self.segments {
            let key = segment
                .surface
                .map_or_else(|| "undefined".to_string(), |surface| surface.to_string());
            *histogram.entry(key).or_insert(0.0) += segment.distance;
        }
        histogram
    }

    /// Distance covered per highway tag, with unclassified segments under
    /// the explicit "undefined" key.
    pub fn distance_by_highway(&self) -> BTreeMap<String, f64> {
        let mut histogram = BTreeMap::new();
        for segment in &self.segments {
            let key = segment.highway.clone().unwrap_or_else(|| "undefined".to_string());
            *histogram.entry(key).or_insert(0.0) += segment.distance;
        }
        histogram
    }

    /// Visual center of the route's bounding box.
    pub fn center_coordinate(&self) -> Coordinate {
        let (lat, lng) = self.bbox.center();
        Coordinate::new(lat, lng)
    }

    /// Web-Mercator zoom level fitting the route into a viewport.
    pub fn map_zoom(&self, map_width_px: u32, map_height_px: u32) -> i32 {
        self.bbox.zoom_level(map_width_px, map_height_px)
    }
}
