//! Energy accumulation over a route.

use serde::{Deserialize, Serialize};

use crate::exercise::Exercise;
use crate::route::{Route, RouteError};

/// Aggregate energy figures for a whole route, in joules.
///
/// Zeroed and fully recomputed on every energy pass; totals are never
/// patched incrementally, so re-running a pass cannot double-count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyTotals {
    /// Net route energy: the signed sum of per-segment energies.
    ///
    /// Downhill segments contribute negative amounts here even though their
    /// stored per-segment energy is clamped at zero, so this total can be
    /// less than the sum of stored segment energies.
    pub total: f64,
    /// Aerodynamic drag component.
    pub drag: f64,
    /// Rolling-resistance / ground-friction component.
    pub friction: f64,
    /// Climb component. Negative on net-descending routes.
    pub climb: f64,
    /// Acceleration and braking component.
    pub acceleration: f64,
}

impl Route {
    /// Run the full energy pass with the attached exercise.
    ///
    /// Re-derives per-segment head/crosswind from the attached weather,
    /// zeroes the aggregates and recomputes everything from scratch. Calling
    /// this twice with unchanged inputs yields bit-identical totals.
    pub fn recompute_energy(&mut self) -> Result<(), RouteError> {
        let exercise = self.exercise.clone().ok_or(RouteError::MissingExercise)?;
        self.run_energy_pass(&exercise);
        Ok(())
    }

    pub(crate) fn run_energy_pass(&mut self, exercise: &Exercise) {
        let weather = self.weather.clone().unwrap_or_default();

        self.energy = EnergyTotals::default();
        let pool_total = exercise.acceleration_distance();
        let mut pool_remaining = pool_total;
        let mut deficit = 0.0;

        for segment in &mut self.segments {
            // Stale wind from a previous pass must never leak into this one.
            segment.headwind = weather.headwind(segment.angle);
            segment.crosswind = weather.crosswind(segment.angle);

            // Each segment consumes from the one-time standstill
            // acceleration pool until it runs dry.
            let consumed = segment.distance.min(pool_remaining);
            pool_remaining -= consumed;
            let acceleration_energy = exercise.acceleration_energy(consumed)
                + exercise.braking_loss(segment, pool_total);

            let segment_energy = exercise.energy(segment, &weather) + acceleration_energy;

            // Free downhill coasting: a running deficit must be absorbed
            // before any later segment stores positive energy again.
            let balance = segment_energy + deficit;
            if balance < 0.0 {
                deficit = balance;
                segment.energy = 0.0;
            } else {
                deficit = 0.0;
                segment.energy = balance;
            }

            self.energy.total += segment_energy;
            self.energy.drag += exercise.drag_energy(segment, &weather);
            self.energy.friction += exercise.friction_energy(segment, &weather);
            self.energy.climb += exercise.climb_energy(segment, &weather);
            self.energy.acceleration += acceleration_energy;
        }

        self.energized = true;
        tracing::debug!(
            segments = self.segments.len(),
            total_joules = self.energy.total,
            "energy pass complete"
        );
    }
}
