//! Unit tests comparing locomotion presets over the same route.

use rustroute::{ElevationSample, Exercise, Route};

fn hilly_route() -> Route {
    let mut route = Route::new(&[
        (51.1000, 17.0300),
        (51.1020, 17.0300),
        (51.1040, 17.0300),
        (51.1060, 17.0300),
    ])
    .unwrap();
    route.apply_elevations(Some(
        [120.0, 145.0, 130.0, 150.0]
            .iter()
            .map(|&elevation| ElevationSample { elevation })
            .collect::<Vec<_>>(),
    ));
    route.apply_weather(None);
    route
}

fn totals_for(exercise: Exercise) -> rustroute::EnergyTotals {
    let mut route = hilly_route();
    route.set_exercise(exercise);
    route.recompute_energy().unwrap();
    *route.energy_totals()
}

#[test]
fn test_all_presets_yield_positive_route_energy() {
    for exercise in [
        Exercise::city_cycling(80.0),
        Exercise::race_cycling(80.0),
        Exercise::running(80.0),
        Exercise::walking(80.0),
    ] {
        let totals = totals_for(exercise);
        assert!(totals.total > 0.0);
        assert!(totals.total.is_finite());
        assert!(totals.drag > 0.0);
        assert!(totals.friction > 0.0);
    }
}

#[test]
fn test_race_position_drags_less_than_city_position() {
    let city = totals_for(Exercise::city_cycling(80.0).with_cruise_speed(8.0));
    let race = totals_for(Exercise::race_cycling(80.0).with_cruise_speed(8.0));
    // Same speed, same route: the drops position and smaller frontal area
    // must cost less drag energy.
    assert!(race.drag < city.drag);
}

#[test]
fn test_only_the_city_preset_pays_braking_losses() {
    let city = Exercise::city_cycling(80.0);
    let race = Exercise::race_cycling(80.0);
    let city_totals = totals_for(city.clone());
    let race_totals = totals_for(race.clone());

    let city_pool_energy = city.acceleration_energy(city.acceleration_distance());
    let race_pool_energy = race.acceleration_energy(race.acceleration_distance());
    assert!(city_totals.acceleration > city_pool_energy);
    assert!((race_totals.acceleration - race_pool_energy).abs() < 1e-9);
}

#[test]
fn test_walking_slower_but_cheaper_per_second() {
    let mut walking_route = hilly_route();
    walking_route.set_exercise(Exercise::walking(80.0));
    walking_route.recompute_energy().unwrap();

    let mut running_route = hilly_route();
    running_route.set_exercise(Exercise::running(80.0));
    running_route.recompute_energy().unwrap();

    assert!(walking_route.total_time().unwrap() > running_route.total_time().unwrap());
    assert!(
        walking_route.energy_per_second().unwrap() < running_route.energy_per_second().unwrap()
    );
    assert!(walking_route.energy_per_meter() < running_route.energy_per_meter());
}
