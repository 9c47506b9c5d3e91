//! End-to-end enrichment pipeline: coordinates through energy figures, with
//! payloads arriving in different orders and with partial failures.

use rustroute::{parse_road_network, ElevationSample, Exercise, Route, RouteStage};

const POINTS: [(f64, f64); 4] =
    [(51.1000, 17.0300), (51.1009, 17.0309), (51.1018, 17.0300), (51.1027, 17.0309)];

const ROAD_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <node id="1" lat="51.1000" lon="17.0300"/>
  <node id="2" lat="51.1009" lon="17.0309"/>
  <node id="3" lat="51.1018" lon="17.0300"/>
  <node id="4" lat="51.1027" lon="17.0309"/>
  <way id="900">
    <nd ref="1"/>
    <nd ref="2"/>
    <nd ref="3"/>
    <nd ref="4"/>
    <tag k="highway" v="residential"/>
    <tag k="surface" v="asphalt"/>
  </way>
</osm>"#;

const WEATHER_JSON: &str = r#"{
    "wind_speed_knots": 8.0,
    "wind_direction_deg": 200.0,
    "temperature_k": 290.15,
    "pressure_hpa": 1018.0,
    "humidity_percent": 65.0,
    "conditions": ["Clouds"],
    "descriptions": ["broken clouds"],
    "city": "Wroclaw",
    "country": "PL",
    "cloud_cover_percent": 75.0
}"#;

fn elevations() -> Vec<ElevationSample> {
    [116.0, 119.0, 121.0, 118.0, 122.0, 120.0]
        .iter()
        .map(|&elevation| ElevationSample { elevation })
        .collect()
}

#[test]
fn test_full_pipeline_in_canonical_order() {
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_elevations(Some(elevations()));
    route.apply_road_network(&parse_road_network(ROAD_XML).unwrap());
    route.apply_weather(Some(serde_json::from_str(WEATHER_JSON).unwrap()));
    route.set_exercise(Exercise::city_cycling(78.0));
    route.recompute_energy().unwrap();

    assert_eq!(route.stage(), RouteStage::Energized);
    assert_eq!(route.segments().len(), POINTS.len() - 1);

    let totals = route.energy_totals();
    assert!(totals.total > 0.0 && totals.total.is_finite());
    let recomposed = totals.drag + totals.friction + totals.climb + totals.acceleration;
    assert!((totals.total - recomposed).abs() < 1e-6 * totals.total);

    // Every segment sits on the classified residential asphalt way.
    let surfaces = route.distance_by_surface();
    let highways = route.distance_by_highway();
    assert!((surfaces["asphalt"] - route.total_distance()).abs() < 1e-9);
    assert!((highways["residential"] - route.total_distance()).abs() < 1e-9);
    assert!(!surfaces.contains_key("undefined"));

    // Wind from 200° is mostly behind the northbound route.
    assert!(route.average_headwind() < 0.0);

    assert!(route.energy_per_meter() > 0.0);
    assert!(route.energy_per_second().unwrap() > 0.0);
    assert!(route.total_time().unwrap() > 0.0);
    assert!((route.total_slope() - 4.0).abs() < 1e-9);
}

#[test]
fn test_out_of_order_enrichment_matches_canonical_order() {
    let network = parse_road_network(ROAD_XML).unwrap();

    let mut canonical = Route::new(&POINTS).unwrap();
    canonical.apply_elevations(Some(elevations()));
    canonical.apply_road_network(&network);
    canonical.apply_weather(Some(serde_json::from_str(WEATHER_JSON).unwrap()));
    canonical.set_exercise(Exercise::race_cycling(78.0));
    canonical.recompute_energy().unwrap();

    let mut shuffled = Route::new(&POINTS).unwrap();
    shuffled.apply_weather(Some(serde_json::from_str(WEATHER_JSON).unwrap()));
    shuffled.set_exercise(Exercise::race_cycling(78.0));
    shuffled.apply_road_network(&network);
    shuffled.apply_elevations(Some(elevations()));
    shuffled.recompute_energy().unwrap();

    assert_eq!(canonical.energy_totals(), shuffled.energy_totals());
    assert_eq!(canonical.stage(), shuffled.stage());
    for (a, b) in canonical.segments().iter().zip(shuffled.segments()) {
        assert_eq!(a.energy, b.energy);
        assert_eq!(a.headwind, b.headwind);
        assert_eq!(a.distance, b.distance);
    }
}

#[test]
fn test_partial_failures_degrade_without_aborting() {
    // Elevation and weather retrieval both failed; classification found no
    // nodes. The route still energizes on deterministic defaults.
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_elevations(None);
    route.apply_road_network(&rustroute::RoadNetwork::default());
    route.apply_weather(None);
    route.set_exercise(Exercise::running(78.0));
    route.recompute_energy().unwrap();

    assert_eq!(route.stage(), RouteStage::Energized);
    assert_eq!(route.total_slope(), 0.0);
    assert_eq!(route.average_headwind(), 0.0);
    let totals = route.energy_totals();
    assert!(totals.total > 0.0 && totals.total.is_finite());
    assert!(totals.climb.abs() < 1e-9);
    assert!((route.distance_by_surface()["undefined"] - route.total_distance()).abs() < 1e-9);
}

#[test]
fn test_inverting_an_energized_route_recomputes() {
    let mut route = Route::new(&POINTS).unwrap();
    route.apply_elevations(Some(elevations()));
    route.apply_road_network(&parse_road_network(ROAD_XML).unwrap());
    route.apply_weather(Some(serde_json::from_str(WEATHER_JSON).unwrap()));
    route.set_exercise(Exercise::city_cycling(78.0));
    route.recompute_energy().unwrap();

    let outbound = *route.energy_totals();
    let outbound_slope = route.total_slope();
    let outbound_headwind = route.average_headwind();

    route.invert();
    assert!((route.total_slope() + outbound_slope).abs() < 1e-9);
    assert!((route.average_headwind() + outbound_headwind).abs() < 1e-6);
    // The return leg faces the opposite wind and slopes, so its figures
    // legitimately differ from the outbound leg.
    assert!(route.energy_totals().total.is_finite());

    // Inverting back restores the outbound figures up to the rounding of
    // the double angle rotation.
    route.invert();
    let restored = route.energy_totals();
    assert!((restored.total - outbound.total).abs() < 1e-6 * outbound.total.abs());
    assert!((restored.climb - outbound.climb).abs() < 1e-6 * outbound.total.abs());
}
