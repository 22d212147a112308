//! Validated, queryable catalogue.

use std::collections::{HashMap, HashSet};
use std::io::{BufReader, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use foodbuddy_core::{LookupError, Place, PlaceLookup};

use crate::{CatalogueDocument, CatalogueError, FoodList, PlaceRecord};

const SINGAPORE_SEED: &str = include_str!("../../data/singapore.json");

/// A place as it appears on a particular list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListedPlace<'a> {
    /// The catalogue entry for the place.
    pub record: &'a PlaceRecord,
    /// The curator's note for this stop.
    pub note: Option<&'a str>,
}

impl ListedPlace<'_> {
    /// Convert into a routable [`Place`] carrying the note as an attribute.
    #[must_use]
    pub fn to_place(&self) -> Place {
        self.record.to_place(self.note)
    }
}

/// Read-only collection of places and food lists.
///
/// Construction validates the document, so every list entry is known to
/// reference exactly one defined place and no list names a place twice.
///
/// # Examples
/// ```
/// use foodbuddy_catalogue::Catalogue;
///
/// let catalogue = Catalogue::singapore()?;
/// let list = catalogue.list_by_share_code("sgfood01").expect("seeded list");
/// assert_eq!(list.id, "list-1");
/// assert_eq!(catalogue.places_for_list("list-1").map(|p| p.len()), Some(5));
/// # Ok::<(), foodbuddy_catalogue::CatalogueError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Catalogue {
    places: Vec<PlaceRecord>,
    lists: Vec<FoodList>,
    place_index: HashMap<String, usize>,
    list_index: HashMap<String, usize>,
}

impl Catalogue {
    /// Validate a parsed document.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found, checking places before
    /// lists.
    pub fn from_document(document: CatalogueDocument) -> Result<Self, CatalogueError> {
        let CatalogueDocument { places, lists } = document;
        let place_index = index_places(&places)?;
        let list_index = index_lists(&lists, &place_index)?;
        log::debug!(
            "loaded catalogue with {} places and {} lists",
            places.len(),
            lists.len()
        );
        Ok(Self {
            places,
            lists,
            place_index,
            list_index,
        })
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Parse`] for malformed JSON and a validation
    /// variant for inconsistent content.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogueError> {
        let document: CatalogueDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Load a catalogue file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Open`] when the file cannot be opened and
    /// the errors of [`Self::from_reader`] otherwise.
    pub fn open(path: &Utf8Path) -> Result<Self, CatalogueError> {
        let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
            CatalogueError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The bundled Singapore seed dataset.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded document is itself invalid.
    pub fn singapore() -> Result<Self, CatalogueError> {
        Self::from_reader(SINGAPORE_SEED.as_bytes())
    }

    /// All lists in document order.
    #[must_use]
    pub fn lists(&self) -> &[FoodList] {
        &self.lists
    }

    /// All places in document order.
    #[must_use]
    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    /// Look up a list by identifier.
    #[must_use]
    pub fn list(&self, list_id: &str) -> Option<&FoodList> {
        self.list_index
            .get(list_id)
            .and_then(|&index| self.lists.get(index))
    }

    /// Look up a list by its share code.
    #[must_use]
    pub fn list_by_share_code(&self, share_code: &str) -> Option<&FoodList> {
        self.lists.iter().find(|list| list.share_code == share_code)
    }

    /// Look up a place by identifier.
    #[must_use]
    pub fn place(&self, place_id: &str) -> Option<&PlaceRecord> {
        self.place_index
            .get(place_id)
            .and_then(|&index| self.places.get(index))
    }

    /// The places of a list in curator order, or `None` for unknown lists.
    #[must_use]
    pub fn places_for_list(&self, list_id: &str) -> Option<Vec<ListedPlace<'_>>> {
        let list = self.list(list_id)?;
        Some(
            list.entries
                .iter()
                // Entries were checked against the place index at load time.
                .filter_map(|entry| {
                    self.place(&entry.place_id).map(|record| ListedPlace {
                        record,
                        note: entry.note.as_deref(),
                    })
                })
                .collect(),
        )
    }

    /// Places whose name, address, cuisine or tags contain `query`,
    /// ignoring case. An empty query matches everything.
    #[must_use]
    pub fn search_places(&self, query: &str) -> Vec<&PlaceRecord> {
        let needle = query.to_lowercase();
        self.places
            .iter()
            .filter(|place| place.matches(&needle))
            .collect()
    }
}

impl PlaceLookup for Catalogue {
    fn resolve_places(&self, list_id: &str) -> Result<Vec<Place>, LookupError> {
        self.places_for_list(list_id)
            .map(|listed| listed.iter().map(ListedPlace::to_place).collect())
            .ok_or_else(|| LookupError::ListNotFound {
                list_id: list_id.to_owned(),
            })
    }
}

fn index_places(places: &[PlaceRecord]) -> Result<HashMap<String, usize>, CatalogueError> {
    let mut index = HashMap::with_capacity(places.len());
    for (position, place) in places.iter().enumerate() {
        if !place.location.is_in_range() {
            return Err(CatalogueError::CoordinateOutOfRange {
                place_id: place.id.clone(),
                lat: place.location.lat,
                lng: place.location.lng,
            });
        }
        if index.insert(place.id.clone(), position).is_some() {
            return Err(CatalogueError::DuplicatePlace {
                place_id: place.id.clone(),
            });
        }
    }
    Ok(index)
}

fn index_lists(
    lists: &[FoodList],
    place_index: &HashMap<String, usize>,
) -> Result<HashMap<String, usize>, CatalogueError> {
    let mut index = HashMap::with_capacity(lists.len());
    let mut share_codes = HashSet::with_capacity(lists.len());
    for (position, list) in lists.iter().enumerate() {
        if index.insert(list.id.clone(), position).is_some() {
            return Err(CatalogueError::DuplicateList {
                list_id: list.id.clone(),
            });
        }
        if !share_codes.insert(list.share_code.as_str()) {
            return Err(CatalogueError::DuplicateShareCode {
                share_code: list.share_code.clone(),
            });
        }
        check_entries(list, place_index)?;
    }
    Ok(index)
}

fn check_entries(
    list: &FoodList,
    place_index: &HashMap<String, usize>,
) -> Result<(), CatalogueError> {
    let mut seen = HashSet::with_capacity(list.entries.len());
    for entry in &list.entries {
        if !place_index.contains_key(&entry.place_id) {
            return Err(CatalogueError::UnknownPlace {
                list_id: list.id.clone(),
                place_id: entry.place_id.clone(),
            });
        }
        if !seen.insert(entry.place_id.as_str()) {
            return Err(CatalogueError::RepeatedEntry {
                list_id: list.id.clone(),
                place_id: entry.place_id.clone(),
            });
        }
    }
    Ok(())
}
