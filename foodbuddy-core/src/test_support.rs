//! Test-only, in-memory `PlaceLookup` implementations and place builders
//! used by unit and behaviour tests.

use std::collections::HashMap;

use geo::Coord;

use crate::{LookupError, Place, PlaceLookup};

/// Build a place from latitude and longitude, named after its identifier.
#[must_use]
pub fn place(id: &str, lat: f64, lng: f64) -> Place {
    Place::new(id, id, Coord { x: lng, y: lat })
}

/// In-memory `PlaceLookup` keyed by list identifier.
#[derive(Default, Debug, Clone)]
pub struct MemoryLookup {
    lists: HashMap<String, Vec<Place>>,
}

impl MemoryLookup {
    /// Add or replace a list, returning `self` for chaining.
    #[must_use]
    pub fn with_list(mut self, list_id: impl Into<String>, places: Vec<Place>) -> Self {
        self.lists.insert(list_id.into(), places);
        self
    }
}

impl PlaceLookup for MemoryLookup {
    fn resolve_places(&self, list_id: &str) -> Result<Vec<Place>, LookupError> {
        self.lists
            .get(list_id)
            .cloned()
            .ok_or_else(|| LookupError::ListNotFound {
                list_id: list_id.to_owned(),
            })
    }
}

/// `PlaceLookup` whose backend is always down.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnavailableLookup;

impl PlaceLookup for UnavailableLookup {
    fn resolve_places(&self, _list_id: &str) -> Result<Vec<Place>, LookupError> {
        Err(LookupError::Unavailable {
            message: "connection refused".to_owned(),
        })
    }
}
