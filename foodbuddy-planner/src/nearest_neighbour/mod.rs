//! `NearestNeighbourPlanner` implementation.

use foodbuddy_core::geodesy::distance_metres;
use foodbuddy_core::{Place, PlanError, RoutePlan, RoutePlanner, WalkingPace, ensure_finite};
use geo::Coord;

/// Lists at or below this size keep their input order.
///
/// From a fixed start with no return leg, two stops admit a single sensible
/// path, so the greedy scan is skipped.
pub const SMALL_ROUTE_LIMIT: usize = 2;

/// Configuration for [`NearestNeighbourPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlannerConfig {
    /// Walking speed used for per-leg and total durations.
    pub pace: WalkingPace,
}

/// Greedy nearest-neighbour planner.
///
/// Each step scans every remaining place and moves to the one strictly
/// closest to the current location. Equidistant candidates resolve to the
/// one listed first in the input. Runs in `O(n²)` distance evaluations.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use foodbuddy_core::{Place, RoutePlanner};
/// use foodbuddy_planner::NearestNeighbourPlanner;
///
/// let places = [
///     Place::new("far", "Far", Coord { x: 0.0, y: 0.03 }),
///     Place::new("near", "Near", Coord { x: 0.0, y: 0.01 }),
///     Place::new("mid", "Mid", Coord { x: 0.0, y: 0.02 }),
/// ];
/// let plan = NearestNeighbourPlanner::new().plan(&places, Coord { x: 0.0, y: 0.0 })?;
/// assert_eq!(plan.order(), ["near", "mid", "far"]);
/// # Ok::<(), foodbuddy_core::PlanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NearestNeighbourPlanner {
    config: PlannerConfig,
}

impl NearestNeighbourPlanner {
    /// Construct a planner walking at [`WalkingPace::DEFAULT`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(PlannerConfig {
            pace: WalkingPace::DEFAULT,
        })
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }
}

impl RoutePlanner for NearestNeighbourPlanner {
    fn plan(&self, places: &[Place], start: Coord<f64>) -> Result<RoutePlan, PlanError> {
        ensure_finite(places, start)?;
        let order = visiting_order(places, start);
        let plan = RoutePlan::measure(start, order, self.config.pace);
        log::debug!(
            "planned {} places: {} m, {} min",
            plan.len(),
            plan.total_distance_metres(),
            plan.total_walking_minutes()
        );
        Ok(plan)
    }
}

fn visiting_order(places: &[Place], start: Coord<f64>) -> Vec<&Place> {
    if places.len() <= SMALL_ROUTE_LIMIT {
        return places.iter().collect();
    }

    let mut remaining: Vec<&Place> = places.iter().collect();
    let mut order = Vec::with_capacity(places.len());
    let mut current = start;
    while let Some(index) = nearest_index(&remaining, current) {
        // `Vec::remove` keeps the survivors in input order, which the
        // tie-break depends on.
        let next = remaining.remove(index);
        current = next.location;
        order.push(next);
    }
    order
}

fn nearest_index(candidates: &[&Place], from: Coord<f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = distance_metres(from, candidate.location);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests;
