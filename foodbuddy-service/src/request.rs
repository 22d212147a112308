//! Inbound request payloads.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Self {
            x: value.lng,
            y: value.lat,
        }
    }
}

/// Request to order the places of a list into a walking route.
///
/// Both fields are optional on the wire so that a missing `listId` is a
/// validation error rather than a decoding failure.
///
/// # Examples
/// ```
/// use foodbuddy_service::OptimiseRouteRequest;
///
/// let request: OptimiseRouteRequest = serde_json::from_str(
///     r#"{ "listId": "list-1", "startLocation": { "lat": 1.29, "lng": 103.85 } }"#,
/// )?;
/// assert_eq!(request.list_id.as_deref(), Some("list-1"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimiseRouteRequest {
    /// List whose places should be ordered.
    #[serde(default)]
    pub list_id: Option<String>,
    /// Where the walk begins. Defaults to the service's configured start.
    #[serde(default)]
    pub start_location: Option<Coordinates>,
}

impl OptimiseRouteRequest {
    /// Request a route for `list_id` from the default start.
    #[must_use]
    pub fn for_list(list_id: impl Into<String>) -> Self {
        Self {
            list_id: Some(list_id.into()),
            start_location: None,
        }
    }

    /// Set an explicit start.
    #[must_use]
    pub const fn starting_at(mut self, start: Coordinates) -> Self {
        self.start_location = Some(start);
        self
    }

    /// The trimmed list identifier.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the identifier is absent or blank.
    pub fn list_id(&self) -> Result<&str, ServiceError> {
        require_list_id(self.list_id.as_deref())
    }

    /// The start to plan from, falling back to `default_start`.
    ///
    /// # Errors
    ///
    /// Fails with a validation error when the supplied start is non-finite
    /// or outside the valid latitude/longitude range.
    pub fn start(&self, default_start: Coord<f64>) -> Result<Coord<f64>, ServiceError> {
        match self.start_location {
            None => Ok(default_start),
            Some(start) if start.is_valid() => Ok(start.into()),
            Some(_) => Err(ServiceError::validation(
                "startLocation must have lat in [-90, 90] and lng in [-180, 180]",
            )),
        }
    }
}

pub(crate) fn require_list_id(list_id: Option<&str>) -> Result<&str, ServiceError> {
    match list_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ServiceError::validation("listId is required")),
    }
}
