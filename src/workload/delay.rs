//! Random latency simulation for the slow endpoint.

use rand::Rng;
use std::time::Duration;

/// Lower bound of the simulated delay, inclusive.
pub const MIN_DELAY_SECS: f64 = 0.5;

/// Upper bound of the simulated delay, exclusive.
pub const MAX_DELAY_SECS: f64 = 3.0;

/// Draw a uniform random delay in `[MIN_DELAY_SECS, MAX_DELAY_SECS)`.
pub fn draw_delay<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(MIN_DELAY_SECS..MAX_DELAY_SECS)
}

/// Convert a drawn delay to a sleepable duration.
pub fn to_duration(delay_seconds: f64) -> Duration {
    Duration::from_secs_f64(delay_seconds)
}
