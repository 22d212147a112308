//! Greedy route planning for Food Buddy.
//!
//! This crate provides [`NearestNeighbourPlanner`], the default
//! implementation of the [`RoutePlanner`](foodbuddy_core::RoutePlanner)
//! trait. It builds an open walking path from a fixed start by repeatedly
//! stepping to the closest unvisited place. The result is a deterministic
//! approximation, not an optimal tour; stronger planners can replace it
//! behind the same trait without touching callers.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod nearest_neighbour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use nearest_neighbour::{NearestNeighbourPlanner, PlannerConfig, SMALL_ROUTE_LIMIT};
