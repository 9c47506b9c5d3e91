//! Unit tests for road-network classification through the route API.

use rustroute::{RoadNetwork, RoadNode, RoadTag, RoadWay, Route, Surface};

fn tag(key: &str, value: &str) -> RoadTag {
    RoadTag { key: key.to_string(), value: value.to_string() }
}

/// A network whose nodes sit exactly on the route coordinates.
fn network(points: &[(f64, f64)], tags: Vec<RoadTag>) -> RoadNetwork {
    let nodes = points
        .iter()
        .enumerate()
        .map(|(index, &(lat, lng))| RoadNode { id: index as i64 + 1, lat, lng })
        .collect::<Vec<_>>();
    let node_refs = nodes.iter().map(|node| node.id).collect();
    RoadNetwork { nodes, ways: vec![RoadWay { node_refs, tags }] }
}

const POINTS: [(f64, f64); 3] = [(51.1000, 17.0300), (51.1009, 17.0309), (51.1018, 17.0300)];

#[test]
fn test_segments_inherit_from_start_coordinate() {
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_road_network(&network(
        &POINTS,
        vec![tag("highway", "residential"), tag("surface", "sett")],
    ));

    for segment in route.segments() {
        assert_eq!(segment.highway.as_deref(), Some("residential"));
        assert_eq!(segment.surface, Some(Surface::Sett));
    }
    let histogram = route.distance_by_surface();
    assert!((histogram["sett"] - route.total_distance()).abs() < 1e-9);
}

#[test]
fn test_segment_needs_both_endpoints_classified() {
    // Only the first two coordinates have a matching node: the second
    // segment must stay unclassified.
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_road_network(&network(&POINTS[..2], vec![tag("highway", "cycleway")]));

    assert_eq!(route.segments()[0].highway.as_deref(), Some("cycleway"));
    assert!(route.segments()[1].highway.is_none());

    let histogram = route.distance_by_highway();
    assert!(histogram.contains_key("cycleway"));
    assert!(histogram.contains_key("undefined"));
}

#[test]
fn test_track_grade_three_classifies_to_mixed_materials() {
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_road_network(&network(
        &POINTS,
        vec![tag("highway", "track"), tag("tracktype", "grade3")],
    ));

    assert_eq!(route.segments()[0].surface, Some(Surface::MixedHardSoft));
    let histogram = route.distance_by_surface();
    assert!(histogram.contains_key("even mixture of hard and soft materials"));
}

#[test]
fn test_untagged_ways_classify_to_other_but_stay_undefined() {
    // Ways referencing the nodes carry no highway tag: coordinates get the
    // "other" surface, but without a highway the segments stay unclassified.
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_road_network(&network(&POINTS, vec![tag("name", "Promenade")]));

    for coordinate in route.coordinates() {
        assert!(coordinate.highway.is_none());
        assert_eq!(coordinate.surface, Some(Surface::Other));
    }
    for segment in route.segments() {
        assert!(segment.surface.is_none());
    }
    assert!(route.distance_by_surface().contains_key("undefined"));
}

#[test]
fn test_reclassification_with_fresh_data_overwrites() {
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_road_network(&network(
        &POINTS,
        vec![tag("highway", "residential"), tag("surface", "asphalt")],
    ));
    assert_eq!(route.segments()[0].surface, Some(Surface::Asphalt));

    // Fresh data without any matching nodes clears the classification.
    route.apply_road_network(&RoadNetwork::default());
    assert!(route.segments()[0].surface.is_none());
    assert!(route.coordinates()[0].highway.is_none());
}

#[test]
fn test_xml_payload_feeds_classification() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="51.1000" lon="17.0300"/>
  <node id="2" lat="51.1009" lon="17.0309"/>
  <node id="3" lat="51.1018" lon="17.0300"/>
  <way id="77">
    <nd ref="1"/>
    <nd ref="2"/>
    <nd ref="3"/>
    <tag k="highway" v="residential"/>
    <tag k="surface" v="cobblestone"/>
  </way>
</osm>"#;
    let network = rustroute::parse_road_network(xml).unwrap();
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_road_network(&network);

    assert_eq!(route.segments()[0].surface, Some(Surface::Cobblestone));
    assert_eq!(route.segments()[1].highway.as_deref(), Some("residential"));
}
