use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::WorkloadError;

/// Share of point queries drawn from outside the data, relative to its length.
pub const MISSING_KEY_FRACTION: f64 = 0.1;
/// Upper end of the missing-key draw, as a multiple of the data length.
const MISSING_KEY_SPAN: f64 = 1.8;

/// Point workload: every data value plus likely-absent keys, shuffled.
///
/// For `n` values, `floor(n * 0.1)` distinct keys are drawn uniformly from
/// `[n, 1.8 * n]`. They are absent only when the data stays below `n`, as
/// it does for a permutation of `0..n`.
pub fn generate_point_queries<R: Rng + ?Sized>(data: &[i32], rng: &mut R) -> Vec<i32> {
    let n = data.len();
    let low = (n as i64).min(i32::MAX as i64);
    let high = ((n as f64 * MISSING_KEY_SPAN) as i64).min(i32::MAX as i64);

    // The draw range shrinks once it is clamped to i32::MAX
    let available = (high - low + 1) as usize;
    let wanted = ((n as f64 * MISSING_KEY_FRACTION) as usize).min(available);

    let mut missing = BTreeSet::new();
    while missing.len() < wanted {
        missing.insert(rng.random_range(low..=high) as i32);
    }

    let mut queries = Vec::with_capacity(n + wanted);
    queries.extend_from_slice(data);
    queries.extend(missing);
    queries.shuffle(rng);

    tracing::info!(
        present = n,
        missing = wanted,
        "generated point queries"
    );
    queries
}

/// Half-open range `[start, end)` over the keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeQuery {
    /// Inclusive lower bound
    pub start: i32,
    /// Exclusive upper bound
    pub end: i32,
}

/// Range placed at `start_ratio..end_ratio` of the data's `[min, max]` span.
///
/// Each bound is `min + (max - min) * ratio`, truncated toward zero.
pub fn range_from_ratios(
    data: &[i32],
    start_ratio: f64,
    end_ratio: f64,
) -> Result<RangeQuery, WorkloadError> {
    let valid = (0.0..=1.0).contains(&start_ratio)
        && (0.0..=1.0).contains(&end_ratio)
        && start_ratio <= end_ratio;
    if !valid {
        return Err(WorkloadError::InvalidRatio {
            start: start_ratio,
            end: end_ratio,
        });
    }

    let (min, max) = match (data.iter().min(), data.iter().max()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => return Err(WorkloadError::EmptyDataset),
    };

    let span = (max as i64 - min as i64) as f64;
    let at = |ratio: f64| (min as f64 + span * ratio) as i32;

    Ok(RangeQuery {
        start: at(start_ratio),
        end: at(end_ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn point_queries_cover_data_and_missing_keys() {
        let data: Vec<i32> = (0..1000).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let queries = generate_point_queries(&data, &mut rng);

        assert_eq!(queries.len(), 1100);
        let missing: Vec<_> = queries.iter().filter(|&&k| k >= 1000).collect();
        assert_eq!(missing.len(), 100);
        assert!(missing.iter().all(|&&k| k <= 1800));

        let mut present: Vec<_> = queries.iter().copied().filter(|&k| k < 1000).collect();
        present.sort_unstable();
        assert_eq!(present, data);
    }

    #[test]
    fn empty_data_yields_no_queries() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_point_queries(&[], &mut rng).is_empty());
    }

    #[test]
    fn ratios_span_min_to_max() {
        let data = [100, 0, 50, 1000];
        let range = range_from_ratios(&data, 0.1, 0.2).unwrap();
        assert_eq!(range, RangeQuery { start: 100, end: 200 });
    }

    #[test]
    fn ratios_use_true_bounds_for_unsorted_data() {
        let data = [500, -500, 0];
        let range = range_from_ratios(&data, 0.5, 0.6).unwrap();
        assert_eq!(range, RangeQuery { start: 0, end: 100 });
    }

    #[test]
    fn full_i32_span_does_not_overflow() {
        let data = [i32::MIN, i32::MAX];
        let range = range_from_ratios(&data, 0.0, 1.0).unwrap();
        assert_eq!(range.start, i32::MIN);
        assert_eq!(range.end, i32::MAX);
    }

    #[test]
    fn empty_data_has_no_range() {
        assert!(matches!(
            range_from_ratios(&[], 0.1, 0.2),
            Err(WorkloadError::EmptyDataset)
        ));
    }

    #[test]
    fn inverted_ratios_are_rejected() {
        assert!(matches!(
            range_from_ratios(&[1, 2], 0.4, 0.3),
            Err(WorkloadError::InvalidRatio { .. })
        ));
    }
}
