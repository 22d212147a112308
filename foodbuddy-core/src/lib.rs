//! Core domain types for the Food Buddy route planner.
//!
//! This crate defines places, route plans, the great-circle and walking-time
//! model, and the two seams the rest of the workspace plugs into:
//! [`RoutePlanner`] (how places are ordered) and [`PlaceLookup`] (where a
//! list's places come from).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesy;
pub mod lookup;
mod matrix;
mod place;
mod planner;
mod route;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use geo::Coord;
pub use geodesy::{PaceError, WalkingPace};
pub use lookup::{LookupError, PlaceLookup};
pub use matrix::DistanceMatrix;
pub use place::{Attributes, Place};
pub use planner::{PlanError, RoutePlanner, ensure_finite};
pub use route::{RoutePlan, Step};
