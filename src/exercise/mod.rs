//! Locomotion power model.
//!
//! One [`Exercise`] value describes the traveler, the vehicle (if any) and
//! the cruising regime. The kind selects which resistance formulas apply;
//! everything else is shared. Power terms are in watts, work integrals in
//! joules over a segment's distance at cruise speed.

pub mod presets;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::route::Segment;
use crate::surface::Surface;
use crate::weather::Weather;

/// Inverted-pendulum stride length for the walking gait model, meters.
const STRIDE_LENGTH_M: f64 = 1.0;

/// Ground-force economy divisor for running (Sprott, "Energetics of Walking
/// and Running").
const RUNNING_ECONOMY_DIVISOR: f64 = 5.0;

/// The closed set of locomotion kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Wheeled locomotion with rolling resistance.
    Cycling,
    /// Foot locomotion with ground friction.
    Running,
    /// Foot locomotion with an inverted-pendulum gait.
    Walking,
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseKind::Cycling => write!(f, "cycling"),
            ExerciseKind::Running => write!(f, "running"),
            ExerciseKind::Walking => write!(f, "walking"),
        }
    }
}

/// Traveler, vehicle and regime parameters for one locomotion mode.
///
/// Build one through the constructors in [`presets`] and adjust fields as
/// needed; selection of the resistance formulas is by `kind`, not by type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub kind: ExerciseKind,
    /// Aerodynamic drag coefficient Cd.
    pub drag_coefficient: f64,
    /// Frontal area in m².
    pub frontal_area: f64,
    /// Mass of the exerciser alone, kg.
    pub exerciser_mass: f64,
    /// Total moved mass (exerciser plus equipment), kg.
    pub mass: f64,
    /// Rotating-mass equivalent added when accelerating (wheels), kg.
    pub added_mass: f64,
    /// Mechanical efficiency η in (0, 1].
    pub efficiency: f64,
    /// Cruising speed vr in m/s.
    pub cruise_speed: f64,
    /// Acceleration from standstill, m/s².
    pub acceleration: f64,
    /// Whether stop-start braking losses are estimated.
    pub braking_estimated: bool,
    /// Distance between braking events for the loss estimate, m.
    pub brake_distance: f64,
}

impl Exercise {
    /// Total distance spent accelerating from standstill to cruise speed.
    ///
    /// Constant-acceleration kinematics: `vr² / (2a)`; zero when `a == 0`.
    pub fn acceleration_distance(&self) -> f64 {
        if self.acceleration == 0.0 {
            0.0
        } else {
            self.cruise_speed * self.cruise_speed / (2.0 * self.acceleration)
        }
    }

    /// Airspeed along the segment: cruise speed plus headwind.
    pub fn true_airspeed(&self, segment: &Segment) -> f64 {
        self.cruise_speed + segment.headwind
    }

    /// Aerodynamic drag force on the segment, N.
    pub fn drag_force(&self, segment: &Segment, weather: &Weather) -> f64 {
        let airspeed = self.true_airspeed(segment);
        0.5 * weather.air_density() * airspeed * airspeed * self.drag_coefficient
            * self.frontal_area
    }

    /// Power against aerodynamic drag, W.
    pub fn drag_power(&self, segment: &Segment, weather: &Weather) -> f64 {
        self.drag_force(segment, weather) * self.true_airspeed(segment)
    }

    /// Power against rolling resistance or ground friction, W.
    pub fn friction_power(&self, segment: &Segment, weather: &Weather) -> f64 {
        let gravity = weather.gravity(segment.lat, segment.elevation);
        let cos_incline = segment.grade().atan().cos();
        let surface = segment.surface.unwrap_or(Surface::Other);
        match self.kind {
            ExerciseKind::Cycling => {
                self.cruise_speed
                    * self.mass
                    * gravity
                    * cos_incline
                    * surface.rolling_resistance(self.cruise_speed)
            }
            ExerciseKind::Running => {
                self.cruise_speed * self.mass * gravity * cos_incline
                    / RUNNING_ECONOMY_DIVISOR
                    / surface.friction_coefficient()
            }
            ExerciseKind::Walking => {
                self.pendulum_power(gravity) * cos_incline / surface.friction_coefficient()
            }
        }
    }

    /// Power against the slope, W. Negative downhill.
    pub fn climb_power(&self, segment: &Segment, weather: &Weather) -> f64 {
        let gravity = weather.gravity(segment.lat, segment.elevation);
        let sin_incline = segment.grade().atan().sin();
        match self.kind {
            ExerciseKind::Cycling => self.cruise_speed * self.mass * gravity * sin_incline,
            ExerciseKind::Running => {
                self.cruise_speed * self.mass * gravity * sin_incline / RUNNING_ECONOMY_DIVISOR
            }
            ExerciseKind::Walking => self.pendulum_power(gravity) * sin_incline,
        }
    }

    /// Power spent accelerating the moved mass to cruise speed, W.
    pub fn acceleration_power(&self) -> f64 {
        self.cruise_speed * (self.mass + self.added_mass) * self.acceleration
    }

    /// Total propulsive power on the segment after mechanical losses, W.
    pub fn total_power(&self, segment: &Segment, weather: &Weather) -> f64 {
        (self.drag_power(segment, weather)
            + self.friction_power(segment, weather)
            + self.climb_power(segment, weather))
            / self.efficiency
    }

    /// Work done sustaining `power` over `distance` at cruise speed, J.
    pub fn power_to_work(&self, power: f64, distance: f64) -> f64 {
        power * distance / self.cruise_speed
    }

    /// Net energy for the segment, J.
    pub fn energy(&self, segment: &Segment, weather: &Weather) -> f64 {
        self.power_to_work(self.total_power(segment, weather), segment.distance)
    }

    /// Drag component of the segment energy after mechanical losses, J.
    pub fn drag_energy(&self, segment: &Segment, weather: &Weather) -> f64 {
        self.power_to_work(self.drag_power(segment, weather), segment.distance) / self.efficiency
    }

    /// Friction component of the segment energy after mechanical losses, J.
    pub fn friction_energy(&self, segment: &Segment, weather: &Weather) -> f64 {
        self.power_to_work(self.friction_power(segment, weather), segment.distance)
            / self.efficiency
    }

    /// Climb component of the segment energy after mechanical losses, J.
    pub fn climb_energy(&self, segment: &Segment, weather: &Weather) -> f64 {
        self.power_to_work(self.climb_power(segment, weather), segment.distance) / self.efficiency
    }

    /// Energy spent accelerating over `distance` meters of the standstill
    /// pool, J.
    pub fn acceleration_energy(&self, distance: f64) -> f64 {
        self.power_to_work(self.acceleration_power(), distance) / self.efficiency
    }

    /// Unrecoverable braking loss apportioned to the segment, J.
    ///
    /// Stop-start presets lose a fraction of the full acceleration energy per
    /// segment, proportional to segment distance over the brake distance.
    pub fn braking_loss(&self, segment: &Segment, acceleration_total_distance: f64) -> f64 {
        if self.braking_estimated {
            self.acceleration_energy(acceleration_total_distance) * segment.distance
                / self.brake_distance
        } else {
            0.0
        }
    }

    /// Resistive power of the inverted-pendulum gait, W.
    ///
    /// Only physical below `√(6gL)/π` ≈ 2.4 m/s; the radicand is clamped at
    /// zero beyond that.
    fn pendulum_power(&self, gravity: f64) -> f64 {
        let vr = self.cruise_speed;
        let radicand =
            (1.0 - PI * PI * vr * vr / (6.0 * gravity * STRIDE_LENGTH_M)).max(0.0);
        (self.mass * gravity / PI)
            * (3.0 * gravity * STRIDE_LENGTH_M / 2.0).sqrt()
            * (1.0 - radicand.sqrt())
    }
}
