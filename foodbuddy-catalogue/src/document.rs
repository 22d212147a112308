//! Serialised form of a catalogue.

use foodbuddy_core::Place;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// Keys under which [`PlaceRecord::to_place`] stores descriptive fields in
/// [`Place::attributes`].
pub mod attribute_keys {
    /// Street address.
    pub const ADDRESS: &str = "address";
    /// Comma-separated cuisine labels.
    pub const CUISINE: &str = "cuisine";
    /// Comma-separated tags.
    pub const TAGS: &str = "tags";
    /// Average rating.
    pub const RATING: &str = "rating";
    /// Price level from 1 to 4.
    pub const PRICE_LEVEL: &str = "price_level";
    /// The list curator's note for this stop.
    pub const NOTE: &str = "note";
}

/// Latitude/longitude pair as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Whether both components are finite and within the WGS84 range.
    #[must_use]
    pub fn is_in_range(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(value: Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lng: value.x,
        }
    }
}

/// A place as stored in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Location.
    pub location: LatLng,
    /// Cuisine labels.
    #[serde(default)]
    pub cuisine: Vec<String>,
    /// Free-form tags such as `halal` or `late-night`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Average rating, when known.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Price level from 1 (cheap) to 4.
    #[serde(default)]
    pub price_level: Option<u8>,
}

impl PlaceRecord {
    /// Convert into a routable [`Place`], attaching a curator note if any.
    #[must_use]
    pub fn to_place(&self, note: Option<&str>) -> Place {
        let mut place = Place::new(self.id.clone(), self.name.clone(), self.location.into());
        if !self.address.is_empty() {
            place = place.with_attribute(attribute_keys::ADDRESS, self.address.clone());
        }
        if !self.cuisine.is_empty() {
            place = place.with_attribute(attribute_keys::CUISINE, self.cuisine.join(", "));
        }
        if !self.tags.is_empty() {
            place = place.with_attribute(attribute_keys::TAGS, self.tags.join(", "));
        }
        if let Some(rating) = self.rating {
            place = place.with_attribute(attribute_keys::RATING, rating.to_string());
        }
        if let Some(level) = self.price_level {
            place = place.with_attribute(attribute_keys::PRICE_LEVEL, level.to_string());
        }
        if let Some(text) = note {
            place = place.with_attribute(attribute_keys::NOTE, text);
        }
        place
    }

    /// Case-insensitive substring match over name, address, cuisine and tags.
    ///
    /// `needle` must already be lower-case.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        let hit = |text: &str| text.to_lowercase().contains(needle);
        hit(&self.name)
            || hit(&self.address)
            || self.cuisine.iter().any(|label| hit(label))
            || self.tags.iter().any(|tag| hit(tag))
    }
}

/// One stop on a food list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    /// Referenced place.
    pub place_id: String,
    /// Curator's note for this stop.
    #[serde(default)]
    pub note: Option<String>,
}

/// A curated, ordered food list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodList {
    /// Unique identifier.
    pub id: String,
    /// Title shown to readers.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Short code used in share links.
    pub share_code: String,
    /// Category slug such as `hawker` or `cafe`.
    pub category: String,
    /// Whether the list is publicly visible.
    #[serde(default)]
    pub is_public: bool,
    /// Stops in curator order.
    #[serde(default)]
    pub entries: Vec<ListEntry>,
}

/// Top-level catalogue document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogueDocument {
    /// Every place any list may reference.
    #[serde(default)]
    pub places: Vec<PlaceRecord>,
    /// Curated lists.
    #[serde(default)]
    pub lists: Vec<FoodList>,
}
