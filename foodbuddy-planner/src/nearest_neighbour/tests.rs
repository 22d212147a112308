//! Tests for the `NearestNeighbourPlanner`.

use super::*;
use foodbuddy_core::test_support::place;
use rstest::{fixture, rstest};

#[fixture]
fn singapore_centre() -> Coord<f64> {
    Coord {
        x: 103.8198,
        y: 1.3521,
    }
}

fn ids(plan: &RoutePlan) -> Vec<&str> {
    plan.order().iter().map(String::as_str).collect()
}

#[rstest]
fn follows_the_nearest_neighbour_chain(singapore_centre: Coord<f64>) {
    // From the city centre B is closest (6.9 km against 8.4 km for A),
    // then C is 3.2 km from B, leaving A last.
    let places = [
        place("A", 1.2805, 103.8447),
        place("B", 1.3067, 103.8617),
        place("C", 1.2806, 103.8505),
    ];
    let plan = NearestNeighbourPlanner::new()
        .plan(&places, singapore_centre)
        .expect("finite input");

    assert_eq!(ids(&plan), ["B", "C", "A"]);
    let distances: Vec<u64> = plan.steps().iter().map(|s| s.distance_metres).collect();
    assert_eq!(distances, [6_869, 3_158, 645]);
    let minutes: Vec<u64> = plan.steps().iter().map(|s| s.walking_minutes).collect();
    assert_eq!(minutes, [82, 38, 8]);
    assert_eq!(plan.total_distance_metres(), 10_672);
    assert_eq!(plan.total_walking_minutes(), 128);
}

#[rstest]
fn start_beside_a_visits_a_then_c_then_b() {
    let places = [
        place("A", 1.2805, 103.8447),
        place("B", 1.3067, 103.8617),
        place("C", 1.2806, 103.8505),
    ];
    let start = Coord {
        x: 103.8430,
        y: 1.2790,
    };
    let plan = NearestNeighbourPlanner::new()
        .plan(&places, start)
        .expect("finite input");
    assert_eq!(ids(&plan), ["A", "C", "B"]);
    assert_eq!(plan.steps().len(), 3);
}

#[rstest]
#[case::one(1)]
#[case::two(2)]
fn small_routes_keep_input_order(#[case] count: usize) {
    // The far place comes first: greedy ordering would swap them.
    let all = [place("far", 0.05, 0.0), place("near", 0.01, 0.0)];
    let places = all.get(..count).expect("at most two places");
    let plan = NearestNeighbourPlanner::new()
        .plan(places, Coord { x: 0.0, y: 0.0 })
        .expect("finite input");
    let expected: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids(&plan), expected);
}

#[rstest]
fn ties_resolve_to_the_earliest_input() {
    // East and west are equidistant from the origin; east is listed first.
    let places = [
        place("north-far", 0.02, 0.0),
        place("east", 0.0, 0.01),
        place("west", 0.0, -0.01),
    ];
    let plan = NearestNeighbourPlanner::new()
        .plan(&places, Coord { x: 0.0, y: 0.0 })
        .expect("finite input");
    assert_eq!(ids(&plan).first(), Some(&"east"));
}

#[rstest]
fn empty_input_yields_empty_plan() {
    let plan = NearestNeighbourPlanner::new()
        .plan(&[], Coord { x: 0.0, y: 0.0 })
        .expect("empty input is not an error");
    assert!(plan.is_empty());
    assert_eq!(plan.total_distance_metres(), 0);
}

#[rstest]
fn non_finite_place_is_rejected() {
    let places = [
        place("a", 0.0, 0.0),
        place("b", f64::NAN, 0.0),
        place("c", 0.1, 0.1),
    ];
    let err = NearestNeighbourPlanner::new()
        .plan(&places, Coord { x: 0.0, y: 0.0 })
        .expect_err("NaN latitude");
    assert_eq!(
        err,
        PlanError::NonFiniteCoordinate {
            place_id: Some("b".to_owned())
        }
    );
}

#[rstest]
fn configured_pace_changes_only_times() {
    let places = [place("a", 0.0, 0.0), place("b", 0.01, 0.0), place("c", 0.02, 0.0)];
    let start = Coord { x: 0.0, y: 0.0 };
    let brisk = NearestNeighbourPlanner::with_config(PlannerConfig {
        pace: WalkingPace::from_kmh(10.0).expect("valid speed"),
    });
    let default_plan = NearestNeighbourPlanner::new().plan(&places, start).expect("plan");
    let brisk_plan = brisk.plan(&places, start).expect("plan");

    assert_eq!(default_plan.order(), brisk_plan.order());
    assert_eq!(
        default_plan.total_distance_metres(),
        brisk_plan.total_distance_metres()
    );
    assert_eq!(default_plan.total_walking_minutes(), 27);
    assert_eq!(brisk_plan.total_walking_minutes(), 13);
}

#[rstest]
fn nearest_index_is_none_for_no_candidates() {
    assert_eq!(nearest_index(&[], Coord { x: 0.0, y: 0.0 }), None);
}
