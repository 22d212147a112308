//! Facade crate for the Food Buddy route planner.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! planner, the bundled catalogue and the route service behind feature flags.

#![forbid(unsafe_code)]

pub use foodbuddy_core::{
    Attributes, Coord, DistanceMatrix, LookupError, PaceError, Place, PlaceLookup, PlanError,
    RoutePlan, RoutePlanner, Step, WalkingPace, ensure_finite,
};

#[cfg(feature = "planner-greedy")]
pub use foodbuddy_planner::{NearestNeighbourPlanner, PlannerConfig};

#[cfg(feature = "catalogue")]
pub use foodbuddy_catalogue::{Catalogue, CatalogueError, ListedPlace};

#[cfg(feature = "service")]
pub use foodbuddy_service::{
    Envelope, ErrorKind, OptimiseRouteRequest, OptimiseRouteResponse, RouteService,
    ServiceConfig, ServiceError,
};
