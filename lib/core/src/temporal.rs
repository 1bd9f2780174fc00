use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

/// The only temporal subformula that is partitioned: `G [a, b] ((p2) U (p3))`.
static GLOBALLY_UNTIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u)\bG\s*\[\s*([\d.]+)\s*,\s*([\d.]+)\s*\]\s*\(\(p2\)\s*U\s*\(p3\)\)").unwrap());

/// Closed integer interval `[lo, hi]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Interval {
    pub lo: i64,
    pub hi: i64,
}

impl Interval {
    pub const fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Splits `interval` at every partition point inside it.
///
/// Each point `t` closes the current sub-interval, and the next one starts at `t + 1`.
/// The remainder up to the upper bound, if any, forms the last sub-interval.
pub fn split_interval(interval: Interval, points: &BTreeSet<i64>) -> Vec<Interval> {
    if interval.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut prev = interval.lo;
    for &t in points.range(interval.lo..=interval.hi) {
        parts.push(Interval::new(prev, t));
        prev = t + 1;
    }
    if prev <= interval.hi {
        parts.push(Interval::new(prev, interval.hi));
    }
    parts
}

fn parse_bound(s: &str) -> Option<i64> {
    s.parse::<f64>().ok().filter(|x| x.is_finite()).map(|x| x.trunc() as i64)
}

/// Rewrites the first `G [a, b] ((p2) U (p3))` as a conjunction over the sub-intervals of
/// `[a, b]` cut at the given partition points.
///
/// Formulas without the pattern are returned unchanged. Later occurrences are left as is.
pub fn partition_temporal_operators(formula: &str, points: &BTreeSet<i64>) -> String {
    let Some(caps) = GLOBALLY_UNTIL.captures(formula) else {
        debug!("No G [a, b] ((p2) U (p3)) in {:?}", formula);
        return formula.to_string();
    };
    let bound = |i: usize| caps.get(i).and_then(|m| parse_bound(m.as_str()));
    let (Some(whole), Some(a), Some(b)) = (caps.get(0), bound(1), bound(2)) else {
        warn!("Ignoring malformed interval bounds in {:?}", formula);
        return formula.to_string();
    };

    let interval = Interval::new(a, b);
    if interval.is_empty() {
        warn!("Ignoring {:?}: empty interval {}", whole.as_str(), interval);
        return formula.to_string();
    }

    let parts = split_interval(interval, points);
    debug!("Splitting {} into {}", interval, parts.iter().join(" "));
    let replacement = parts.iter().map(|i| format!("G {} ((p2) U (p3))", i)).join(" ∧ ");

    let mut result = String::with_capacity(formula.len() + replacement.len());
    result.push_str(&formula[..whole.start()]);
    result.push_str(&replacement);
    result.push_str(&formula[whole.end()..]);
    result
}
