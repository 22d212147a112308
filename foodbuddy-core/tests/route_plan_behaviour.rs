//! Behavioural tests for measuring route plans.

use std::cell::RefCell;

use foodbuddy_core::{Place, RoutePlan, WalkingPace};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug)]
struct PlanWorld {
    start: RefCell<Coord<f64>>,
    places: RefCell<Vec<Place>>,
    plan: RefCell<Option<RoutePlan>>,
}

impl PlanWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn plan(&self) -> RoutePlan {
        self.plan
            .borrow()
            .clone()
            .expect("plan should be measured before assertions")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld {
        start: RefCell::new(Coord { x: 0.0, y: 0.0 }),
        places: RefCell::new(Vec::new()),
        plan: RefCell::new(None),
    }
}

#[given("a start at the origin")]
fn given_origin(world: &PlanWorld) {
    world.start.replace(Coord { x: 0.0, y: 0.0 });
}

#[given("three places spaced a thousandth of a degree apart due north")]
fn given_three_places(world: &PlanWorld) {
    world.places.replace(vec![
        Place::new("a", "A", Coord { x: 0.0, y: 0.001 }),
        Place::new("b", "B", Coord { x: 0.0, y: 0.002 }),
        Place::new("c", "C", Coord { x: 0.0, y: 0.003 }),
    ]);
}

#[given("a single place at the start")]
fn given_place_at_start(world: &PlanWorld) {
    let start = *world.start.borrow();
    world.places.replace(vec![Place::new("here", "Here", start)]);
}

#[when("the places are measured in order at the default pace")]
fn when_measured(world: &PlanWorld) {
    let start = *world.start.borrow();
    let plan = RoutePlan::measure(start, world.places.borrow().iter(), WalkingPace::DEFAULT);
    world.plan.replace(Some(plan));
}

#[then("every leg is about 111 metres")]
fn then_legs(world: &PlanWorld) {
    let plan = world.plan();
    assert_eq!(plan.steps().len(), 3);
    assert!(plan.steps().iter().all(|step| step.distance_metres == 111));
    assert!(plan.steps().iter().all(|step| step.walking_minutes == 1));
}

#[then("the totals are rounded from the unrounded legs")]
fn then_totals(world: &PlanWorld) {
    let plan = world.plan();
    assert_eq!(plan.total_distance_metres(), 334);
    assert_eq!(plan.total_walking_minutes(), 4);
}

#[then("the only step has zero distance and zero time")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_zero_step(world: &PlanWorld) {
    let plan = world.plan();
    let step = plan.steps().first().expect("one step");
    assert_eq!(step.place_id, "here");
    assert_eq!(step.distance_metres, 0);
    assert_eq!(step.walking_minutes, 0);
    assert_eq!(plan.total_distance_metres(), 0);
}

#[scenario(path = "tests/features/route_plan.feature", index = 0)]
fn legs_and_totals(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_plan.feature", index = 1)]
fn place_at_start(world: PlanWorld) {
    let _ = world;
}
