//! Outbound response payloads.

use foodbuddy_core::{RoutePlan, Step};
use serde::{Deserialize, Serialize};

/// One leg of an optimised route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    /// Place reached by this leg.
    pub place_id: String,
    /// Its display name.
    pub name: String,
    /// Leg distance in whole metres.
    pub distance: u64,
    /// Leg walking time in whole minutes.
    pub walking_time: u64,
}

impl From<&Step> for RouteStep {
    fn from(step: &Step) -> Self {
        Self {
            place_id: step.place_id.clone(),
            name: step.name.clone(),
            distance: step.distance_metres,
            walking_time: step.walking_minutes,
        }
    }
}

/// Successful result of [`RouteService::optimise`](crate::RouteService::optimise).
///
/// Totals are rounded once from the unrounded legs, so they may differ from
/// the sum of the rounded `steps` by a few units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimiseRouteResponse {
    /// The list that was planned.
    pub list_id: String,
    /// Place identifiers in visiting order.
    pub optimized_order: Vec<String>,
    /// Total distance in whole metres.
    pub total_distance: u64,
    /// Total walking time in whole minutes.
    pub total_walking_time: u64,
    /// Per-leg breakdown in visiting order.
    pub steps: Vec<RouteStep>,
}

impl OptimiseRouteResponse {
    pub(crate) fn from_plan(list_id: &str, plan: &RoutePlan) -> Self {
        Self {
            list_id: list_id.to_owned(),
            optimized_order: plan.order().to_vec(),
            total_distance: plan.total_distance_metres(),
            total_walking_time: plan.total_walking_minutes(),
            steps: plan.steps().iter().map(RouteStep::from).collect(),
        }
    }
}

/// Pairwise distances and walking times between the places of a list.
///
/// Row and column `i` both refer to `place_ids[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceMatrixResponse {
    /// The list measured.
    pub list_id: String,
    /// Place identifiers in list order.
    pub place_ids: Vec<String>,
    /// Distances in whole metres.
    pub distances: Vec<Vec<u64>>,
    /// Walking times in whole minutes.
    pub walking_times: Vec<Vec<u64>>,
}
