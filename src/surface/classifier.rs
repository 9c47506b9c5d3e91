//! Road-network data model and per-coordinate surface classification.
//!
//! The network is the generic node/way/tag tree any road-data source
//! produces. Classification matches each route coordinate to a nearby network
//! node, collects the tags of every way referencing that node and derives the
//! coordinate's highway and surface from them.

use serde::{Deserialize, Serialize};

use crate::route::Coordinate;
use crate::surface::Surface;

/// Nearest-node match tolerance on each axis, in degrees.
pub const NODE_MATCH_TOLERANCE_DEG: f64 = 1e-6;

/// A road-network point with a stable identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadNode {
    pub id: i64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// A key/value tag attached to a way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadTag {
    pub key: String,
    pub value: String,
}

/// An ordered run of node references carrying tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadWay {
    /// Identifiers of the nodes the way passes through.
    pub node_refs: Vec<i64>,
    pub tags: Vec<RoadTag>,
}

/// The node/way/tag tree consumed by classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub nodes: Vec<RoadNode>,
    pub ways: Vec<RoadWay>,
}

/// Highway/surface/tracktype values resolved for one matched node.
#[derive(Debug, Default)]
struct ResolvedTags {
    highway: Option<String>,
    surface: Option<String>,
    tracktype: Option<String>,
}

impl RoadNetwork {
    /// Find a node within [`NODE_MATCH_TOLERANCE_DEG`] of the given position.
    ///
    /// A candidate replaces the running best only when it is closer or equal
    /// on **both** axes, scanned in encounter order. This is a heuristic
    /// match, not a true nearest-neighbor search: a node closer in one axis
    /// but farther in the other never wins.
    pub fn nearest_node(&self, lat: f64, lng: f64) -> Option<&RoadNode> {
        let mut best: Option<(f64, f64, &RoadNode)> = None;
        for node in &self.nodes {
            let d_lat = (node.lat - lat).abs();
            let d_lng = (node.lng - lng).abs();
            if d_lat >= NODE_MATCH_TOLERANCE_DEG || d_lng >= NODE_MATCH_TOLERANCE_DEG {
                continue;
            }
            best = match best {
                Some((best_lat, best_lng, _)) if d_lat > best_lat || d_lng > best_lng => best,
                _ => Some((d_lat, d_lng, node)),
            };
        }
        best.map(|(_, _, node)| node)
    }

    /// Collect highway/surface/tracktype tags from every way referencing the node.
    ///
    /// Later ways override earlier ones per key.
    fn resolve_tags(&self, node_id: i64) -> ResolvedTags {
        let mut resolved = ResolvedTags::default();
        for way in &self.ways {
            if !way.node_refs.contains(&node_id) {
                continue;
            }
            for tag in &way.tags {
                match tag.key.as_str() {
                    "highway" => resolved.highway = Some(tag.value.clone()),
                    "surface" => resolved.surface = Some(tag.value.clone()),
                    "tracktype" => resolved.tracktype = Some(tag.value.clone()),
                    _ => {}
                }
            }
        }
        resolved
    }
}

/// Derive a coordinate's highway and surface from the road network.
///
/// A coordinate with no node inside the match tolerance stays unclassified
/// and downstream aggregation buckets its segments under "undefined".
pub fn classify(network: &RoadNetwork, coordinate: &mut Coordinate) {
    let Some(node) = network.nearest_node(coordinate.lat, coordinate.lng) else {
        coordinate.highway = None;
        coordinate.surface = None;
        return;
    };
    let tags = network.resolve_tags(node.id);
    coordinate.surface = Some(match tags.surface {
        Some(ref tag) => Surface::from_tag(tag),
        None => fallback_surface(tags.highway.as_deref(), tags.tracktype.as_deref()),
    });
    coordinate.highway = tags.highway;
}

/// Surface derived from the highway kind when no explicit surface tag exists.
fn fallback_surface(highway: Option<&str>, tracktype: Option<&str>) -> Surface {
    match highway {
        None | Some("path") => Surface::Other,
        Some("track") => tracktype.map_or(Surface::Other, Surface::from_tracktype),
        Some(_) => Surface::Asphalt,
    }
}
