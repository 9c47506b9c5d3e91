//! Atmospheric state and the quantities derived from it.
//!
//! A [`Weather`] value is immutable once constructed; air density, local
//! gravity and the wind decomposition along a heading are pure functions of
//! the stored state plus their arguments.

pub mod observation;

pub use observation::WeatherObservation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units;

/// Molar mass of dry air, kg/mol.
const DRY_AIR_MOLAR_MASS: f64 = 0.028964;
/// Molar mass of water vapor, kg/mol.
const VAPOR_MOLAR_MASS: f64 = 0.018016;

/// 16-point compass rose, clockwise from north.
const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Atmospheric state attached to a route.
///
/// Defaults to standard conditions: 101 325 Pa, 293.15 K, 50% relative
/// humidity, no wind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    /// Atmospheric pressure in pascals.
    pub pressure: f64,
    /// Temperature in Kelvin.
    pub temperature: f64,
    /// Relative humidity in [0, 1].
    pub humidity: f64,
    /// Molar gas constant, J/(mol·K).
    pub gas_constant: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Wind direction angle in radians, same convention as segment headings.
    pub wind_angle: f64,
    /// Descriptive fields from the observation, when available.
    pub details: Option<WeatherDetails>,
}

/// Descriptive observation fields with no effect on the energy model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherDetails {
    /// Condition group names, e.g. "Rain".
    pub conditions: Vec<String>,
    /// Human-readable condition descriptions.
    pub descriptions: Vec<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub observed_at: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    /// Cloud cover in [0, 1].
    pub cloudiness: Option<f64>,
    /// Rainfall over the last three hours, mm.
    pub rain_past_3h: Option<f64>,
    /// Snowfall over the last three hours, mm.
    pub snow_past_3h: Option<f64>,
}

impl Default for Weather {
    fn default() -> Self {
        Self {
            pressure: 101_325.0,
            temperature: 293.15,
            humidity: 0.5,
            gas_constant: 8.314,
            wind_speed: 0.0,
            wind_angle: 0.0,
            details: None,
        }
    }
}

impl Weather {
    /// Standard gravity, used where no latitude or altitude is known.
    pub const STANDARD_GRAVITY: f64 = 9.81;

    /// Weather with the given state and no descriptive details.
    pub fn new(
        pressure: f64,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        wind_angle: f64,
    ) -> Self {
        Self { pressure, temperature, humidity, wind_speed, wind_angle, ..Self::default() }
    }

    /// Density of humid air in kg/m³.
    ///
    /// Partial vapor pressure comes from the Tetens saturation curve over
    /// the Celsius temperature; dry-air and vapor contributions are summed
    /// per the ideal gas law. Standard conditions evaluate to ~1.20 kg/m³.
    pub fn air_density(&self) -> f64 {
        let celsius = units::kelvin_to_celsius(self.temperature);
        let saturation_pressure = 6.1078 * 10f64.powf(7.5 * celsius / (celsius + 237.3)) * 100.0;
        let vapor_pressure = self.humidity * saturation_pressure;
        let dry_pressure = self.pressure - vapor_pressure;
        (dry_pressure * DRY_AIR_MOLAR_MASS + vapor_pressure * VAPOR_MOLAR_MASS)
            / (self.gas_constant * self.temperature)
    }

    /// Local gravitational acceleration in m/s².
    ///
    /// Somigliana latitude correction composed with a linear free-air
    /// altitude correction of −3.155e−7 m/s² per meter. Use
    /// [`Weather::STANDARD_GRAVITY`] where neither is known.
    pub fn gravity(&self, latitude_rad: f64, altitude_m: f64) -> f64 {
        let sin_sq = latitude_rad.sin() * latitude_rad.sin();
        let at_sea_level =
            9.7803253359 * (1.0 + 0.00193185265241 * sin_sq) / (1.0 - 0.0066943799013 * sin_sq).sqrt();
        at_sea_level - 3.155e-7 * altitude_m
    }

    /// Wind component along the heading; negative values are tailwind assistance.
    pub fn headwind(&self, heading_angle: f64) -> f64 {
        -(self.wind_angle - heading_angle).cos() * self.wind_speed
    }

    /// Wind component perpendicular to the heading; the sign indicates the side.
    pub fn crosswind(&self, heading_angle: f64) -> f64 {
        (self.wind_angle - heading_angle).sin() * self.wind_speed
    }

    /// Compass point the wind blows from, e.g. "N" for a north wind.
    pub fn wind_compass(&self) -> &'static str {
        let sector = std::f64::consts::PI / 8.0;
        let index = (self.wind_angle / sector).round() as usize % COMPASS_POINTS.len();
        COMPASS_POINTS[index]
    }

    /// Beaufort scale number for the stored wind speed.
    pub fn beaufort_number(&self) -> u8 {
        (self.wind_speed / 0.836).powf(2.0 / 3.0).round() as u8
    }
}
