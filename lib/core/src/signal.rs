use std::fmt::{Display, Formatter};
use std::slice::Iter;

use log::{debug, warn};

/// Default number of samples per time unit (a 0.1 step).
pub const DEFAULT_RESOLUTION: u32 = 10;

/// Upper limit on `horizon * resolution`; longer signals are not synthesized.
pub const MAX_SAMPLES: u64 = 10_000_000;

/// A fixed step predicate `start <= t < end` over time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepPredicate {
    pub label: &'static str,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl StepPredicate {
    pub const fn new(label: &'static str, start: Option<f64>, end: Option<f64>) -> Self {
        Self { label, start, end }
    }

    pub fn holds_at(&self, t: f64) -> bool {
        self.start.map_or(true, |s| t >= s) && self.end.map_or(true, |e| t < e)
    }
}

/// The three predicates of the example signal, in sample order `(y, z, x)`.
pub const PREDICATES: [StepPredicate; 3] = [
    // y < 2 on [0, 10)
    StepPredicate::new("y < 2", None, Some(10.0)),
    // z > 1 on [5, 15)
    StepPredicate::new("z > 1", Some(5.0), Some(15.0)),
    // x > 0.3 on [8, 20)
    StepPredicate::new("x > 0.3", Some(8.0), Some(20.0)),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub values: [bool; 3],
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [y, z, x] = self.values;
        write!(f, "t = {}, ({}) = ({}, {}, {})", self.time, labels(), y as u8, z as u8, x as u8)
    }
}

fn labels() -> String {
    PREDICATES.iter().map(|p| p.label).collect::<Vec<_>>().join(", ")
}

/// Discrete-time trace of the example predicates.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Signal {
    pub samples: Vec<Sample>,
}

impl Signal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Sample> {
        self.samples.iter()
    }

}

/// Samples the example predicates over `[0, horizon]` with a 0.1 step.
pub fn synthesize_signal(horizon: f64) -> Signal {
    synthesize_signal_with_resolution(horizon, DEFAULT_RESOLUTION)
}

/// Samples the example predicates over `[0, horizon]` with `resolution` samples per time unit.
///
/// Sample times are computed as `i / resolution`, so they do not drift.
/// The signal is empty if more than [`MAX_SAMPLES`] samples would be needed.
pub fn synthesize_signal_with_resolution(horizon: f64, resolution: u32) -> Signal {
    if !horizon.is_finite() || horizon < 0.0 || resolution == 0 {
        debug!("Empty signal for horizon {} and resolution {}", horizon, resolution);
        return Signal::default();
    }
    let rate = resolution as f64;
    if horizon * rate > MAX_SAMPLES as f64 {
        warn!(
            "Horizon {} at {} samples per unit exceeds {} samples, using an empty signal",
            horizon, resolution, MAX_SAMPLES
        );
        return Signal::default();
    }
    let last = (horizon * rate + 1e-9).floor() as u64;
    let samples = (0..=last)
        .map(|i| {
            let time = i as f64 / rate;
            let values = PREDICATES.map(|p| p.holds_at(time));
            Sample { time, values }
        })
        .collect::<Vec<_>>();
    debug!("Synthesized {} samples over [0, {}]", samples.len(), horizon);
    Signal { samples }
}
