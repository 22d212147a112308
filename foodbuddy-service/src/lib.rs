//! Request validation and response shaping around a [`RoutePlanner`].
//!
//! [`RouteService`] is the boundary between callers and the pure planner:
//! it checks an [`OptimiseRouteRequest`], resolves the list through a
//! [`PlaceLookup`], fills in the configured default start, plans, and maps
//! the result (or a [`ServiceError`]) into the JSON shapes callers see.
//!
//! [`RoutePlanner`]: foodbuddy_core::RoutePlanner
//! [`PlaceLookup`]: foodbuddy_core::PlaceLookup

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod envelope;
mod error;
mod request;
mod response;
mod service;

pub use config::{DEFAULT_START, ServiceConfig};
pub use envelope::{ApiError, Envelope};
pub use error::{ErrorKind, ServiceError};
pub use request::{Coordinates, OptimiseRouteRequest};
pub use response::{DistanceMatrixResponse, OptimiseRouteResponse, RouteStep};
pub use service::RouteService;
