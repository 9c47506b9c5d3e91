//! RustRoute - Route Energy Estimation Engine
//!
//! An open-source library estimating the energy a traveler expends along a
//! geographic route for cycling, running and walking, accounting for terrain
//! slope, wind and surface friction. A route is built once from raw
//! coordinates and then enriched as elevation, road-network and weather data
//! arrive from external sources; the energy pass fills per-segment and
//! aggregate figures and may be re-run at any time.

pub mod exercise;
pub mod geodesy;
pub mod route;
pub mod surface;
pub mod units;
pub mod weather;

// Re-export commonly used types
pub use exercise::{Exercise, ExerciseKind};
pub use route::{
    BoundingBox, Coordinate, ElevationSample, EnergyTotals, Route, RouteError, RouteStage,
    Segment,
};
pub use surface::{
    parse_road_network, RoadDataError, RoadNetwork, RoadNode, RoadTag, RoadWay, Surface,
};
pub use weather::{Weather, WeatherDetails, WeatherObservation};
