//! Route plans: a visiting order with per-leg and aggregate metrics.
//!
//! Per-step fields are rounded from their own leg. Totals are rounded once
//! from the sum of the unrounded legs, so adding up the rounded steps can
//! differ from the reported total by the accumulated rounding.

use std::collections::HashMap;

use geo::Coord;

use crate::Place;
use crate::geodesy::{WalkingPace, distance_metres, round_to_u64};

/// One leg of a route, ending at a place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Identifier of the place reached by this leg.
    pub place_id: String,
    /// Display name of that place.
    pub name: String,
    /// Leg distance in metres, rounded to the nearest integer.
    pub distance_metres: u64,
    /// Leg walking time in minutes, rounded to the nearest integer.
    pub walking_minutes: u64,
}

/// The ordered visiting sequence computed by a [`RoutePlanner`](crate::RoutePlanner).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use foodbuddy_core::{Place, RoutePlan, WalkingPace};
///
/// let start = Coord { x: 0.0, y: 0.0 };
/// let stop = Place::new("a", "A", Coord { x: 0.0, y: 0.01 });
/// let plan = RoutePlan::measure(start, [&stop], WalkingPace::DEFAULT);
///
/// assert_eq!(plan.order(), ["a".to_owned()]);
/// assert_eq!(plan.total_distance_metres(), 1_112);
/// assert_eq!(plan.total_walking_minutes(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    order: Vec<String>,
    steps: Vec<Step>,
    total_distance_metres: u64,
    total_walking_minutes: u64,
}

impl RoutePlan {
    /// Measure a visiting order that begins at `start`.
    ///
    /// Each leg runs from the previous location (the start for the first
    /// leg) to the next place. Distances use the haversine distance and
    /// durations use `pace`.
    pub fn measure<'a, I>(start: Coord<f64>, visiting_order: I, pace: WalkingPace) -> Self
    where
        I: IntoIterator<Item = &'a Place>,
    {
        let mut plan = Self::empty();
        let mut total_distance = 0.0_f64;
        let mut total_minutes = 0.0_f64;
        let mut current = start;

        for place in visiting_order {
            let leg_distance = distance_metres(current, place.location);
            let leg_minutes = pace.minutes_for(leg_distance);
            total_distance = accumulate(total_distance, leg_distance);
            total_minutes = accumulate(total_minutes, leg_minutes);

            plan.order.push(place.id.clone());
            plan.steps.push(Step {
                place_id: place.id.clone(),
                name: place.name.clone(),
                distance_metres: round_to_u64(leg_distance),
                walking_minutes: round_to_u64(leg_minutes),
            });
            current = place.location;
        }

        plan.total_distance_metres = round_to_u64(total_distance);
        plan.total_walking_minutes = round_to_u64(total_minutes);
        plan
    }

    /// A plan that visits nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Place identifiers in visiting order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Steps aligned one-to-one with [`RoutePlan::order`].
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Total distance in metres, rounded once from the unrounded legs.
    #[must_use]
    pub const fn total_distance_metres(&self) -> u64 {
        self.total_distance_metres
    }

    /// Total walking time in minutes, rounded once from the unrounded legs.
    #[must_use]
    pub const fn total_walking_minutes(&self) -> u64 {
        self.total_walking_minutes
    }

    /// Number of places visited.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the plan visits no places.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether the visiting order holds exactly the identifiers of `places`.
    ///
    /// Duplicates, omissions and foreign identifiers all fail the check, as
    /// does a step list that drifted out of line with the order.
    #[must_use]
    pub fn is_permutation_of(&self, places: &[Place]) -> bool {
        if self.order.len() != places.len() || self.steps.len() != self.order.len() {
            return false;
        }
        let aligned = self
            .steps
            .iter()
            .zip(&self.order)
            .all(|(step, id)| &step.place_id == id);
        if !aligned {
            return false;
        }

        let mut remaining: HashMap<&str, usize> = HashMap::new();
        for place in places {
            *remaining.entry(place.id.as_str()).or_default() += 1;
        }
        self.order
            .iter()
            .all(|id| match remaining.get_mut(id.as_str()) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            })
    }
}

#[expect(clippy::float_arithmetic, reason = "running leg totals")]
fn accumulate(total: f64, leg: f64) -> f64 {
    total + leg
}
