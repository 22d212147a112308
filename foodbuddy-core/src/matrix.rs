//! Pairwise great-circle distances between places.

use crate::Place;
use crate::geodesy::{WalkingPace, distance_metres, round_to_u64};

/// Square matrix of haversine distances in metres.
///
/// `metres(i, j)` is the distance from `places[i]` to `places[j]`; the
/// diagonal is zero and the matrix is symmetric.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use foodbuddy_core::{DistanceMatrix, Place};
///
/// let places = [
///     Place::new("a", "A", Coord { x: 0.0, y: 0.0 }),
///     Place::new("b", "B", Coord { x: 0.0, y: 0.01 }),
/// ];
/// let matrix = DistanceMatrix::between(&places);
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.metres(0, 0), Some(0.0));
/// assert_eq!(matrix.metres(0, 1), matrix.metres(1, 0));
/// assert_eq!(matrix.metres(0, 2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceMatrix {
    ids: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Compute the matrix for `places`, keeping their order.
    #[must_use]
    pub fn between(places: &[Place]) -> Self {
        let rows = places
            .iter()
            .map(|from| {
                places
                    .iter()
                    .map(|to| distance_metres(from.location, to.location))
                    .collect()
            })
            .collect();
        Self {
            ids: places.iter().map(|place| place.id.clone()).collect(),
            rows,
        }
    }

    /// Place identifiers labelling rows and columns.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Matrix rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Distance from place `from` to place `to`, if both indices exist.
    #[must_use]
    pub fn metres(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Distances rounded to whole metres.
    #[must_use]
    pub fn rounded_metres(&self) -> Vec<Vec<u64>> {
        self.map_cells(round_to_u64)
    }

    /// Walking times at `pace`, rounded to whole minutes.
    #[must_use]
    pub fn rounded_minutes(&self, pace: WalkingPace) -> Vec<Vec<u64>> {
        self.map_cells(|metres| round_to_u64(pace.minutes_for(metres)))
    }

    fn map_cells(&self, cell: impl Fn(f64) -> u64) -> Vec<Vec<u64>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&metres| cell(metres)).collect())
            .collect()
    }

    /// Number of places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the matrix covers no places.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
