//! Deterministic place generation for planner benchmarks.

use foodbuddy_core::Place;
use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for reproducible inputs.
pub const BENCHMARK_SEED: u64 = 42;

/// Centre of the generated area, roughly central Singapore.
pub const CENTRE: Coord<f64> = Coord {
    x: 103.8198,
    y: 1.3521,
};

/// Half-width of the generated area in degrees (about 11 km).
const SPREAD: f64 = 0.1;

/// Generate `count` places uniformly around [`CENTRE`].
#[must_use]
pub fn generate_places(count: usize, seed: u64) -> Vec<Place> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let location = Coord {
                x: CENTRE.x + rng.gen_range(-SPREAD..SPREAD),
                y: CENTRE.y + rng.gen_range(-SPREAD..SPREAD),
            };
            Place::new(format!("place-{i}"), format!("Place {i}"), location)
        })
        .collect()
}
