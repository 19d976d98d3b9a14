//! Random failure simulation for the error endpoint.

use rand::Rng;

/// Probability that a call to the error endpoint fails.
pub const FAULT_PROBABILITY: f64 = 0.3;

/// Draw whether this call should fail.
pub fn draw_fault<R: Rng>(rng: &mut R) -> bool {
    rng.gen::<f64>() < FAULT_PROBABILITY
}

/// Count the faults in `n` draws from the given RNG.
///
/// Used by tests and by the CLI's repeated-draw mode to report an observed
/// failure proportion.
pub fn count_faults<R: Rng>(rng: &mut R, n: usize) -> usize {
    (0..n).filter(|_| draw_fault(rng)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_sequence_is_reproducible() {
        // 100 draws with a fixed seed always partition the same way.
        let mut rng = StdRng::seed_from_u64(1234);
        let faults = count_faults(&mut rng, 100);
        let successes = 100 - faults;
        assert_eq!(faults + successes, 100);

        let mut replay = StdRng::seed_from_u64(1234);
        assert_eq!(count_faults(&mut replay, 100), faults);
    }

    #[test]
    fn test_fault_proportion_converges() {
        // Over a large sample the observed proportion approaches 0.3.
        let mut rng = StdRng::seed_from_u64(99);
        let n = 10_000;
        let faults = count_faults(&mut rng, n);
        let proportion = faults as f64 / n as f64;
        assert!(
            (proportion - FAULT_PROBABILITY).abs() < 0.02,
            "observed proportion {proportion} too far from {FAULT_PROBABILITY}"
        );
    }
}
