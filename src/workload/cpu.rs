//! CPU pressure simulation.

use std::time::{Duration, Instant};

/// Maximum burn duration accepted from a request, in seconds.
pub const MAX_BURN_SECS: u64 = 300;

/// Busy-loop on one thread until the deadline passes.
///
/// Returns the number of loop iterations completed. Must be run on a
/// blocking worker thread, never on the async runtime.
pub fn burn_for(duration: Duration) -> u64 {
    let start = Instant::now();
    let mut iterations: u64 = 0;
    while start.elapsed() < duration {
        std::hint::black_box((12_545.0_f64 * 67_890.0).sqrt());
        iterations += 1;
    }
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_runs_for_at_least_the_requested_time() {
        let start = Instant::now();
        burn_for(Duration::from_millis(50));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_zero_duration_returns_immediately() {
        assert_eq!(burn_for(Duration::ZERO), 0);
    }
}
