//! Memory pressure simulation.

/// Number of integers allocated per memory-endpoint call.
pub const ALLOCATION_COUNT: usize = 10_000_000;

/// Allocate a transient vector of [`ALLOCATION_COUNT`] integers and report
/// how many were processed.
///
/// The vector is dropped on return; the point is the resident-memory spike
/// while it is alive, not the data.
pub fn spike() -> usize {
    let data: Vec<u64> = (0..ALLOCATION_COUNT as u64).collect();
    data.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spike_processes_exact_count() {
        assert_eq!(spike(), 10_000_000);
    }
}
