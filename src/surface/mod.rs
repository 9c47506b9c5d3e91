//! Surface categories and their resistance coefficients.
//!
//! Road-network tags are mapped to a closed set of surface categories, each
//! carrying a rolling-resistance coefficient for wheeled locomotion and a
//! ground-friction coefficient for foot locomotion. Coefficient values follow
//! the engineering-toolbox rolling-friction tables, the ISEA cycling-comfort
//! road-surface study and the OSM surface key documentation.

pub mod classifier;
pub mod osm;

pub use classifier::{RoadNetwork, RoadNode, RoadTag, RoadWay, NODE_MATCH_TOLERANCE_DEG};
pub use osm::{parse_road_network, RoadDataError};

use serde::{Deserialize, Serialize};

/// Canonical road surface categories.
///
/// Tag values outside this set classify as [`Surface::Solid`], the reference
/// fallthrough coefficient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Wood,
    Tartan,
    Clay,
    Metal,
    Concrete,
    Paved,
    PavingStones,
    Asphalt,
    /// Track grade 1 and the default bucket for unrecognized tags.
    Solid,
    Sett,
    /// Track grade 2.
    MostlySolid,
    GrassPaver,
    FineGravel,
    /// Track grade 3.
    MixedHardSoft,
    /// Track grade 4.
    MostlySoft,
    Cobblestone,
    /// Track grade 5.
    Soft,
    Sand,
    Compacted,
    Pebblestone,
    Unpaved,
    Gravel,
    Earth,
    Grass,
    Dirt,
    Mud,
    /// Pathless or otherwise uncategorizable ground.
    Other,
}

impl Surface {
    /// Map a raw `surface` tag value to its category.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "wood" => Surface::Wood,
            "tartan" => Surface::Tartan,
            "clay" => Surface::Clay,
            "metal" => Surface::Metal,
            "concrete" => Surface::Concrete,
            "paved" => Surface::Paved,
            "paving_stones" | "paving_stones:30" | "concrete:lanes" | "concrete:plates" => {
                Surface::PavingStones
            }
            "asphalt" => Surface::Asphalt,
            "sett" => Surface::Sett,
            "grass_paver" => Surface::GrassPaver,
            "fine_gravel" => Surface::FineGravel,
            "cobblestone" => Surface::Cobblestone,
            "sand" => Surface::Sand,
            "compacted" => Surface::Compacted,
            "pebblestone" => Surface::Pebblestone,
            "unpaved" => Surface::Unpaved,
            "gravel" => Surface::Gravel,
            "earth" => Surface::Earth,
            "grass" => Surface::Grass,
            "dirt" => Surface::Dirt,
            "mud" => Surface::Mud,
            "other" => Surface::Other,
            _ => Surface::Solid,
        }
    }

    /// Map a `tracktype` grade to the solid-to-soft spectrum.
    pub fn from_tracktype(grade: &str) -> Self {
        match grade {
            "grade1" => Surface::Solid,
            "grade2" => Surface::MostlySolid,
            "grade3" => Surface::MixedHardSoft,
            "grade4" => Surface::MostlySoft,
            "grade5" => Surface::Soft,
            _ => Surface::Other,
        }
    }

    /// Base rolling-resistance coefficient for wheeled locomotion.
    pub fn base_rolling_resistance(self) -> f64 {
        use Surface::*;
        match self {
            Wood | Tartan | Clay | Metal => 0.001,
            Concrete => 0.002,
            Paved | PavingStones => 0.003,
            Asphalt => 0.004,
            Solid | Sett => 0.0045,
            MostlySolid | GrassPaver | FineGravel => 0.005,
            MixedHardSoft => 0.006,
            MostlySoft | Cobblestone => 0.007,
            Soft | Sand | Compacted | Pebblestone => 0.008,
            Unpaved | Gravel | Earth | Other => 0.009,
            Grass | Dirt => 0.01,
            Mud => 0.015,
        }
    }

    /// Speed-corrected rolling-resistance coefficient.
    ///
    /// Rolling resistance grows roughly linearly with speed; the correction
    /// factor is `1 + v/20` for `v` in m/s.
    pub fn rolling_resistance(self, cruise_speed: f64) -> f64 {
        self.base_rolling_resistance() * (1.0 + cruise_speed / 20.0)
    }

    /// Ground-friction coefficient for a rubber or PU sole.
    pub fn friction_coefficient(self) -> f64 {
        use Surface::*;
        match self {
            Wood | Tartan | Clay | Metal | Concrete => 1.0,
            Paved | PavingStones => 0.95,
            Asphalt => 0.9,
            Solid | Sett => 0.85,
            MostlySolid | GrassPaver | FineGravel => 0.8,
            MixedHardSoft | Grass | Dirt => 0.75,
            MostlySoft | Cobblestone | Unpaved | Gravel | Earth | Other => 0.7,
            Soft | Sand | Compacted | Pebblestone => 0.65,
            Mud => 0.5,
        }
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Surface::Wood => "wood",
            Surface::Tartan => "tartan",
            Surface::Clay => "clay",
            Surface::Metal => "metal",
            Surface::Concrete => "concrete",
            Surface::Paved => "paved",
            Surface::PavingStones => "paving_stones",
            Surface::Asphalt => "asphalt",
            Surface::Solid => "solid",
            Surface::Sett => "sett",
            Surface::MostlySolid => "mostly solid",
            Surface::GrassPaver => "grass_paver",
            Surface::FineGravel => "fine_gravel",
            Surface::MixedHardSoft => "even mixture of hard and soft materials",
            Surface::MostlySoft => "mostly soft",
            Surface::Cobblestone => "cobblestone",
            Surface::Soft => "soft",
            Surface::Sand => "sand",
            Surface::Compacted => "compacted",
            Surface::Pebblestone => "pebblestone",
            Surface::Unpaved => "unpaved",
            Surface::Gravel => "gravel",
            Surface::Earth => "earth",
            Surface::Grass => "grass",
            Surface::Dirt => "dirt",
            Surface::Mud => "mud",
            Surface::Other => "other",
        };
        write!(f, "{name}")
    }
}
