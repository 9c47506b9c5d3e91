//! Literature-sourced exercise presets.
//!
//! Cycling drag figures come from "Bicycling Science" (Wilson, 2004) for the
//! tops position and Kyle's 1991 crosswind time-trial measurements for the
//! drops position. The on-foot drag area follows Penwarden, Grigg and
//! Rayment's 1978 wind-tunnel measurements of standing people; running
//! efficiency follows Kyröläinen, Komi and Belli.

use crate::exercise::{Exercise, ExerciseKind};
use crate::units;

impl Exercise {
    /// Stop-start city riding on a 15 kg utility bicycle, tops position.
    ///
    /// Braking losses are estimated: city traffic forces a stop roughly
    /// every 500 m.
    pub fn city_cycling(exerciser_mass: f64) -> Self {
        let cycle_mass = 15.0;
        Self {
            kind: ExerciseKind::Cycling,
            drag_coefficient: 1.15,
            frontal_area: 0.632,
            exerciser_mass,
            mass: exerciser_mass + cycle_mass,
            added_mass: 2.0 * 2.5,
            efficiency: 0.8,
            cruise_speed: units::kph_to_mps(20.0),
            acceleration: 0.5,
            braking_estimated: true,
            brake_distance: 500.0,
        }
    }

    /// Steady riding on a 5 kg race bicycle, drops position.
    pub fn race_cycling(exerciser_mass: f64) -> Self {
        let cycle_mass = 5.0;
        Self {
            kind: ExerciseKind::Cycling,
            drag_coefficient: 0.88,
            frontal_area: 0.32,
            exerciser_mass,
            mass: exerciser_mass + cycle_mass,
            added_mass: 2.0 * 1.0,
            efficiency: 0.95,
            cruise_speed: units::kph_to_mps(30.0),
            acceleration: 1.5,
            braking_estimated: false,
            brake_distance: 500.0,
        }
    }

    /// Distance running at 15 km/h.
    pub fn running(exerciser_mass: f64) -> Self {
        Self {
            kind: ExerciseKind::Running,
            drag_coefficient: 1.27,
            frontal_area: 0.55,
            exerciser_mass,
            mass: exerciser_mass,
            added_mass: 0.0,
            efficiency: 0.55,
            cruise_speed: units::kph_to_mps(15.0),
            acceleration: 2.5,
            braking_estimated: false,
            brake_distance: 500.0,
        }
    }

    /// Walking at 5 km/h.
    pub fn walking(exerciser_mass: f64) -> Self {
        Self {
            kind: ExerciseKind::Walking,
            drag_coefficient: 1.27,
            frontal_area: 0.55,
            exerciser_mass,
            mass: exerciser_mass,
            added_mass: 0.0,
            efficiency: 0.55,
            cruise_speed: units::kph_to_mps(5.0),
            acceleration: 1.0,
            braking_estimated: false,
            brake_distance: 500.0,
        }
    }

    /// Same preset with a different cruising speed in m/s.
    pub fn with_cruise_speed(mut self, speed_mps: f64) -> Self {
        self.cruise_speed = speed_mps;
        self
    }
}
