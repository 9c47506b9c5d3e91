//! Collaborator-facing weather observation shape.
//!
//! Whatever service supplies the observation reports wind in knots and
//! degrees, pressure in hPa and humidity in percent; conversion into the SI
//! units of [`Weather`] happens here, at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units;
use crate::weather::{Weather, WeatherDetails};

/// A weather observation as reported by an external source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Wind speed in knots.
    pub wind_speed_knots: f64,
    /// Meteorological wind direction in degrees.
    pub wind_direction_deg: f64,
    /// Temperature in Kelvin.
    pub temperature_k: f64,
    /// Pressure in hectopascals.
    pub pressure_hpa: f64,
    /// Relative humidity in percent.
    pub humidity_percent: f64,
    /// Condition group names, e.g. "Rain".
    #[serde(default)]
    pub conditions: Vec<String>,
    /// Human-readable condition descriptions.
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub observed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sunrise: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sunset: Option<DateTime<Utc>>,
    /// Cloud cover in percent.
    #[serde(default)]
    pub cloud_cover_percent: Option<f64>,
    /// Rainfall over the last three hours, mm.
    #[serde(default)]
    pub rain_past_3h_mm: Option<f64>,
    /// Snowfall over the last three hours, mm.
    #[serde(default)]
    pub snow_past_3h_mm: Option<f64>,
}

impl From<WeatherObservation> for Weather {
    fn from(observation: WeatherObservation) -> Self {
        let details = WeatherDetails {
            conditions: observation.conditions,
            descriptions: observation.descriptions,
            city: observation.city,
            country: observation.country,
            observed_at: observation.observed_at,
            sunrise: observation.sunrise,
            sunset: observation.sunset,
            cloudiness: observation.cloud_cover_percent.map(|percent| percent / 100.0),
            rain_past_3h: observation.rain_past_3h_mm,
            snow_past_3h: observation.snow_past_3h_mm,
        };
        Weather {
            pressure: observation.pressure_hpa * 100.0,
            temperature: observation.temperature_k,
            humidity: observation.humidity_percent / 100.0,
            wind_speed: units::knots_to_mps(observation.wind_speed_knots),
            wind_angle: observation.wind_direction_deg.to_radians(),
            details: Some(details),
            ..Weather::default()
        }
    }
}
