use std::collections::BTreeMap;

use geo::Coord;

/// Free-form attributes carried alongside a place.
///
/// The planner never reads these. They exist so address, notes, ratings and
/// similar details survive a round trip through the engine unchanged.
pub type Attributes = BTreeMap<String, String>;

/// A place that can appear on a food list.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use foodbuddy_core::Place;
///
/// let place = Place::new("place-3", "Lau Pa Sat", Coord { x: 103.8505, y: 1.2806 })
///     .with_attribute("address", "18 Raffles Quay");
///
/// assert_eq!(place.id, "place-3");
/// assert_eq!(place.attribute("address"), Some("18 Raffles Quay"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Identifier, unique within a list.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Opaque passthrough details.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
}

impl Place {
    /// Construct a `Place` without attributes.
    pub fn new(id: impl Into<String>, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            attributes: Attributes::new(),
        }
    }

    /// Add an attribute while returning `self` for chaining.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
