//! Service configuration.

use foodbuddy_core::WalkingPace;
use geo::Coord;

/// Start used when a request omits `startLocation`: central Singapore.
pub const DEFAULT_START: Coord<f64> = Coord {
    x: 103.8198,
    y: 1.3521,
};

/// Tunables for [`RouteService`](crate::RouteService).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceConfig {
    /// Start location for requests that do not supply one.
    pub default_start: Coord<f64>,
    /// Pace for distance-matrix walking times.
    pub pace: WalkingPace,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_start: DEFAULT_START,
            pace: WalkingPace::DEFAULT,
        }
    }
}
