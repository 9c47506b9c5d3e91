//! Unit conversions and body-energy reference helpers.
//!
//! Wind observations arrive in knots, temperatures in Kelvin and energies are
//! computed in joules; everything user-facing prefers km/h, Celsius and
//! kilocalories. The body-energy helpers translate a route's energy figure
//! into everyday reference values (basal metabolism, fat mass, MET).

/// Energy content of one kilocalorie in joules.
pub const JOULES_PER_KCAL: f64 = 4184.0;

/// Convert knots to meters per second (1 kt = 1.852 km/h).
pub fn knots_to_mps(knots: f64) -> f64 {
    kph_to_mps(1.852 * knots)
}

/// Convert kilometers per hour to meters per second.
pub fn kph_to_mps(kph: f64) -> f64 {
    kph * 1000.0 / 3600.0
}

/// Convert meters per second to kilometers per hour.
pub fn mps_to_kph(mps: f64) -> f64 {
    mps * 3600.0 / 1000.0
}

/// Convert a temperature in Kelvin to Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Convert joules to kilocalories.
pub fn joule_to_kcal(joule: f64) -> f64 {
    joule / JOULES_PER_KCAL
}

/// Usable energy in kilocalories stored in `mass_kg` of body fat.
///
/// Adipose tissue is roughly 87% lipid at ~9000 kcal per kilogram of lipid.
pub fn fat_mass_to_kcal(mass_kg: f64) -> f64 {
    0.87 * mass_kg * 9000.0
}

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor).
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, is_male: bool) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years + if is_male { 5.0 } else { -161.0 }
}

/// Body mass index from weight in kilograms and height in centimeters.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    10_000.0 * weight_kg / height_cm / height_cm
}

/// Metabolic equivalent of task: kilocalories per kilogram of body mass per hour.
pub fn met(energy_kcal: f64, weight_kg: f64, hours: f64) -> f64 {
    energy_kcal / weight_kg / hours
}
