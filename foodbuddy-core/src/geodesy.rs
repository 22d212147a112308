//! Great-circle distances and walking-time estimates.
//!
//! Distances use the haversine formula over a spherical Earth with the mean
//! radius [`EARTH_RADIUS_METRES`]. Coordinates follow the `geo` convention of
//! `x = longitude` and `y = latitude`, both in degrees. Neither function
//! validates geographic ranges; callers own that check.

use std::cmp::Ordering;

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

/// Walking speed assumed when no pace is configured, in km/h.
pub const DEFAULT_WALKING_SPEED_KMH: f64 = 5.0;

const METRES_PER_KILOMETRE: f64 = 1_000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Great-circle distance between `a` and `b` in metres.
///
/// The result is symmetric bit-for-bit and exactly `0.0` when both
/// coordinates are equal. The haversine term is clamped before the inverse
/// sine so antipodal and near-pole inputs never leave its domain.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use foodbuddy_core::geodesy::distance_metres;
///
/// let maxwell = Coord { x: 103.8447, y: 1.2805 };
/// let lau_pa_sat = Coord { x: 103.8505, y: 1.2806 };
/// let metres = distance_metres(maxwell, lau_pa_sat);
/// assert!((640.0..660.0).contains(&metres));
/// assert_eq!(distance_metres(maxwell, maxwell), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn distance_metres(a: Coord<f64>, b: Coord<f64>) -> f64 {
    if a == b {
        return 0.0;
    }
    // Evaluate in a canonical order so swapping the arguments cannot change
    // rounding in the intermediate terms.
    let (from, to) = match a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x)) {
        Ordering::Greater => (b, a),
        Ordering::Less | Ordering::Equal => (a, b),
    };

    let from_lat = from.y.to_radians();
    let to_lat = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lng = (to.x - from.x).to_radians();

    let haversine = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lng / 2.0).sin().powi(2);
    let central_angle = 2.0 * haversine.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_METRES * central_angle
}

/// Estimated walking time in minutes at [`WalkingPace::DEFAULT`].
///
/// # Examples
/// ```
/// use foodbuddy_core::geodesy::walking_time_minutes;
///
/// assert_eq!(walking_time_minutes(0.0), 0.0);
/// assert!((walking_time_minutes(5_000.0) - 60.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn walking_time_minutes(distance_metres: f64) -> f64 {
    WalkingPace::DEFAULT.minutes_for(distance_metres)
}

/// Round a non-negative metric to the nearest whole unit.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "inputs are non-negative and `as` saturates on overflow"
)]
pub(crate) fn round_to_u64(value: f64) -> u64 {
    value.round() as u64
}

/// Errors returned by [`WalkingPace::from_kmh`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PaceError {
    /// The speed was zero, negative, or not a finite number.
    #[error("walking speed must be a positive finite number of km/h, got {kmh}")]
    InvalidSpeed {
        /// Rejected speed in km/h.
        kmh: f64,
    },
}

/// A constant average walking speed used to turn distances into durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingPace {
    metres_per_minute: f64,
}

impl WalkingPace {
    /// Five kilometres per hour, roughly 83.33 metres per minute.
    pub const DEFAULT: Self = Self {
        metres_per_minute: DEFAULT_WALKING_SPEED_KMH * METRES_PER_KILOMETRE / MINUTES_PER_HOUR,
    };

    /// Build a pace from a speed in km/h.
    ///
    /// # Errors
    ///
    /// Returns [`PaceError::InvalidSpeed`] unless `kmh` is finite and
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use foodbuddy_core::geodesy::WalkingPace;
    ///
    /// let brisk = WalkingPace::from_kmh(6.0)?;
    /// assert_eq!(brisk.metres_per_minute(), 100.0);
    /// assert!(WalkingPace::from_kmh(0.0).is_err());
    /// # Ok::<(), foodbuddy_core::geodesy::PaceError>(())
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "km/h to metres-per-minute conversion"
    )]
    pub fn from_kmh(kmh: f64) -> Result<Self, PaceError> {
        if !kmh.is_finite() || kmh <= 0.0 {
            return Err(PaceError::InvalidSpeed { kmh });
        }
        Ok(Self {
            metres_per_minute: kmh * METRES_PER_KILOMETRE / MINUTES_PER_HOUR,
        })
    }

    /// Speed in metres per minute.
    #[must_use]
    pub const fn metres_per_minute(self) -> f64 {
        self.metres_per_minute
    }

    /// Speed in km/h.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "metres-per-minute to km/h conversion"
    )]
    pub fn kmh(self) -> f64 {
        self.metres_per_minute * MINUTES_PER_HOUR / METRES_PER_KILOMETRE
    }

    /// Minutes needed to walk `distance_metres` at this pace.
    ///
    /// Linear in the distance and zero at zero.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "distance over speed")]
    pub fn minutes_for(self, distance_metres: f64) -> f64 {
        distance_metres / self.metres_per_minute
    }
}

impl Default for WalkingPace {
    fn default() -> Self {
        Self::DEFAULT
    }
}
