//! Test-only planners for exercising callers of [`RoutePlanner`].
//!
//! These stand in for misbehaving planners so services can prove they
//! surface planner failures instead of passing them on. Gated behind the
//! `test-support` feature (and `cfg(test)`).

use foodbuddy_core::{Place, PlanError, RoutePlan, RoutePlanner, WalkingPace};
use geo::Coord;

/// A planner that always fails as if a coordinate were non-finite.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingPlanner;

impl RoutePlanner for FailingPlanner {
    fn plan(&self, _places: &[Place], _start: Coord<f64>) -> Result<RoutePlan, PlanError> {
        Err(PlanError::NonFiniteCoordinate { place_id: None })
    }
}

/// A planner that drops the last place, breaking the permutation contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct DroppingPlanner;

impl RoutePlanner for DroppingPlanner {
    fn plan(&self, places: &[Place], start: Coord<f64>) -> Result<RoutePlan, PlanError> {
        let kept = places.split_last().map_or(places, |(_, rest)| rest);
        Ok(RoutePlan::measure(start, kept, WalkingPace::DEFAULT))
    }
}

/// A planner that visits places in input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputOrderPlanner;

impl RoutePlanner for InputOrderPlanner {
    fn plan(&self, places: &[Place], start: Coord<f64>) -> Result<RoutePlan, PlanError> {
        Ok(RoutePlan::measure(start, places, WalkingPace::DEFAULT))
    }
}
