//! Errors raised while loading a catalogue.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors from loading or validating a [`Catalogue`](crate::Catalogue).
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be opened.
    #[error("failed to open catalogue at {path:?}: {source}")]
    Open {
        /// Path that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid catalogue JSON.
    #[error("failed to parse catalogue JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two places share an identifier.
    #[error("place {place_id} is defined more than once")]
    DuplicatePlace {
        /// Repeated identifier.
        place_id: String,
    },
    /// Two lists share an identifier.
    #[error("list {list_id} is defined more than once")]
    DuplicateList {
        /// Repeated identifier.
        list_id: String,
    },
    /// Two lists share a share code.
    #[error("share code {share_code} is used by more than one list")]
    DuplicateShareCode {
        /// Repeated share code.
        share_code: String,
    },
    /// A list entry names a place the catalogue does not define.
    #[error("list {list_id} references unknown place {place_id}")]
    UnknownPlace {
        /// List holding the entry.
        list_id: String,
        /// Identifier that failed to resolve.
        place_id: String,
    },
    /// A list names the same place twice.
    #[error("list {list_id} contains place {place_id} more than once")]
    RepeatedEntry {
        /// List holding the entries.
        list_id: String,
        /// Repeated place.
        place_id: String,
    },
    /// A place lies outside the valid latitude/longitude range.
    #[error("place {place_id} has out-of-range coordinates ({lat}, {lng})")]
    CoordinateOutOfRange {
        /// Offending place.
        place_id: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
}
