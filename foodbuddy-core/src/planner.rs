use geo::Coord;
use thiserror::Error;

use crate::{Place, RoutePlan};

/// Errors returned by [`RoutePlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A coordinate was NaN or infinite.
    ///
    /// `place_id` is `None` when the start coordinate was at fault.
    #[error("{} has a non-finite coordinate", describe(.place_id.as_deref()))]
    NonFiniteCoordinate {
        /// Offending place, or `None` for the start.
        place_id: Option<String>,
    },
}

fn describe(place_id: Option<&str>) -> String {
    place_id.map_or_else(|| "start location".to_owned(), |id| format!("place {id}"))
}

/// Order a set of places into a walking route from a fixed start.
///
/// The route is an open path: it starts at `start`, visits every place
/// exactly once, and does not return. Implementations must:
/// - return a plan whose order is a permutation of `places`;
/// - return [`RoutePlan::empty`] for an empty slice;
/// - be deterministic for identical input.
///
/// Planners must be `Send + Sync` so one instance can serve concurrent
/// requests.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use foodbuddy_core::{Place, PlanError, RoutePlan, RoutePlanner, WalkingPace};
///
/// struct InputOrder;
///
/// impl RoutePlanner for InputOrder {
///     fn plan(&self, places: &[Place], start: Coord<f64>) -> Result<RoutePlan, PlanError> {
///         Ok(RoutePlan::measure(start, places, WalkingPace::DEFAULT))
///     }
/// }
///
/// let places = [Place::new("a", "A", Coord { x: 0.0, y: 0.0 })];
/// let plan = InputOrder.plan(&places, Coord { x: 0.0, y: 0.0 })?;
/// assert_eq!(plan.total_distance_metres(), 0);
/// # Ok::<(), PlanError>(())
/// ```
pub trait RoutePlanner: Send + Sync {
    /// Produce a visiting order and its metrics.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NonFiniteCoordinate`] when `start` or a place
    /// location is not finite.
    fn plan(&self, places: &[Place], start: Coord<f64>) -> Result<RoutePlan, PlanError>;
}

/// Reject non-finite coordinates before planning.
///
/// # Errors
///
/// Returns the first offending coordinate, checking the start first.
pub fn ensure_finite(places: &[Place], start: Coord<f64>) -> Result<(), PlanError> {
    if !is_finite(start) {
        return Err(PlanError::NonFiniteCoordinate { place_id: None });
    }
    match places.iter().find(|place| !is_finite(place.location)) {
        Some(place) => Err(PlanError::NonFiniteCoordinate {
            place_id: Some(place.id.clone()),
        }),
        None => Ok(()),
    }
}

const fn is_finite(coord: Coord<f64>) -> bool {
    coord.x.is_finite() && coord.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn finite_input_passes() {
        let places = [Place::new("a", "A", Coord { x: 1.0, y: 1.0 })];
        assert_eq!(ensure_finite(&places, Coord { x: 0.0, y: 0.0 }), Ok(()));
    }

    #[rstest]
    fn start_is_checked_first() {
        let places = [Place::new("a", "A", Coord { x: f64::NAN, y: 1.0 })];
        let err = ensure_finite(&places, Coord { x: f64::INFINITY, y: 0.0 })
            .expect_err("start is not finite");
        assert_eq!(err, PlanError::NonFiniteCoordinate { place_id: None });
        assert_eq!(err.to_string(), "start location has a non-finite coordinate");
    }

    #[rstest]
    fn offending_place_is_named() {
        let places = [
            Place::new("a", "A", Coord { x: 1.0, y: 1.0 }),
            Place::new("b", "B", Coord { x: 1.0, y: f64::NAN }),
        ];
        let err = ensure_finite(&places, Coord { x: 0.0, y: 0.0 }).expect_err("b is NaN");
        assert_eq!(err.to_string(), "place b has a non-finite coordinate");
    }
}
