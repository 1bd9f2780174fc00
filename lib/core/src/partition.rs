use std::collections::BTreeSet;

use itertools::Itertools;
use log::debug;

use crate::signal::Signal;

/// Collects the stable partition points of a signal.
///
/// A point is the rounded time of every sample whose truth vector differs from the
/// previous sample's. Rounding is half away from zero.
pub fn stable_partition_points(signal: &Signal) -> BTreeSet<i64> {
    let points: BTreeSet<i64> = signal
        .iter()
        .tuple_windows()
        .filter(|(prev, cur)| prev.values != cur.values)
        .map(|(_, cur)| cur.time.round() as i64)
        .collect();
    debug!("Partition points: {:?}", points);
    points
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::signal::{synthesize_signal, synthesize_signal_with_resolution, Sample};

    #[test]
    fn test_example_signal() {
        let points = stable_partition_points(&synthesize_signal(30.0));
        assert_eq!(points, BTreeSet::from([5, 8, 10, 15, 20]));
    }

    #[test]
    fn test_short_horizon() {
        let points = stable_partition_points(&synthesize_signal(12.0));
        assert_eq!(points, BTreeSet::from([5, 8, 10]));
    }

    #[test]
    fn test_coarse_resolution() {
        // Sampled once per time unit, the transitions are still observed on their exact times.
        let points = stable_partition_points(&synthesize_signal_with_resolution(30.0, 1));
        assert_eq!(points, BTreeSet::from([5, 8, 10, 15, 20]));
    }

    #[test]
    fn test_empty_and_single_sample() {
        assert!(stable_partition_points(&Signal::default()).is_empty());
        assert!(stable_partition_points(&synthesize_signal(0.0)).is_empty());
    }

    #[test]
    fn test_rounding_and_dedup() {
        let sample = |time, y| Sample {
            time,
            values: [y, false, false],
        };
        let signal = Signal {
            samples: vec![
                sample(0.0, false),
                sample(2.4, true),
                sample(2.5, false),
                sample(2.6, true),
                sample(3.0, true),
            ],
        };
        assert_eq!(stable_partition_points(&signal), BTreeSet::from([2, 3]));
    }
}
