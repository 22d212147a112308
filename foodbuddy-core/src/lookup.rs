//! Resolve the places that belong to a food list.
//!
//! The `PlaceLookup` trait is the read-only seam between the route service
//! and whatever stores lists: the bundled catalogue, a relational database
//! or a document store.

use thiserror::Error;

use crate::Place;

/// Errors from [`PlaceLookup::resolve_places`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No list exists with the requested identifier.
    #[error("list {list_id} was not found")]
    ListNotFound {
        /// Identifier that failed to resolve.
        list_id: String,
    },
    /// The backing store could not answer.
    #[error("place lookup unavailable: {message}")]
    Unavailable {
        /// Backend-specific description of the failure.
        message: String,
    },
}

/// Read-only access to the places of a list.
///
/// Implementations return places in list order. An existing list with no
/// places yields an empty vector rather than an error.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use foodbuddy_core::{LookupError, Place, PlaceLookup};
///
/// struct SingleList(Vec<Place>);
///
/// impl PlaceLookup for SingleList {
///     fn resolve_places(&self, list_id: &str) -> Result<Vec<Place>, LookupError> {
///         if list_id == "only" {
///             Ok(self.0.clone())
///         } else {
///             Err(LookupError::ListNotFound { list_id: list_id.to_owned() })
///         }
///     }
/// }
///
/// let lookup = SingleList(vec![Place::new("a", "A", Coord { x: 0.0, y: 0.0 })]);
/// assert_eq!(lookup.resolve_places("only")?.len(), 1);
/// assert!(lookup.resolve_places("other").is_err());
/// # Ok::<(), LookupError>(())
/// ```
pub trait PlaceLookup: Send + Sync {
    /// Return the places of `list_id` in list order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ListNotFound`] for unknown lists and
    /// [`LookupError::Unavailable`] when the store fails.
    fn resolve_places(&self, list_id: &str) -> Result<Vec<Place>, LookupError>;
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for &T {
    fn resolve_places(&self, list_id: &str) -> Result<Vec<Place>, LookupError> {
        (**self).resolve_places(list_id)
    }
}
