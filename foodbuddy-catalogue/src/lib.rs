//! Curated food lists and the places they reference.
//!
//! A [`Catalogue`] is loaded from a JSON document holding `places` and
//! `lists`, validated once at load time, and then queried read-only. It
//! implements [`PlaceLookup`](foodbuddy_core::PlaceLookup) so the route
//! service can resolve a list straight from it. [`Catalogue::singapore`]
//! returns the bundled seed dataset of Singapore hawker stalls and cafes.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalogue;
mod document;
mod error;

pub use catalogue::{Catalogue, ListedPlace};
pub use document::{CatalogueDocument, FoodList, LatLng, ListEntry, PlaceRecord, attribute_keys};
pub use error::CatalogueError;
