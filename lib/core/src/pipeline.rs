use std::collections::BTreeSet;

use log::info;

use crate::partition::stable_partition_points;
use crate::prop::extract_atomic_props;
use crate::rename::{rename_atomic_props, NamingScheme, PropMap};
use crate::signal::{synthesize_signal_with_resolution, Signal, DEFAULT_RESOLUTION};
use crate::temporal::partition_temporal_operators;

pub const DEFAULT_HORIZON: f64 = 30.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    /// Time horizon of the synthesized signal.
    pub horizon: f64,
    /// Signal samples per time unit.
    pub resolution: u32,
    pub naming: NamingScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            resolution: DEFAULT_RESOLUTION,
            naming: NamingScheme::default(),
        }
    }
}

/// Every intermediate result of one STL to MITL translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub stl: String,
    pub props: Vec<String>,
    pub prop_map: PropMap,
    pub signal: Signal,
    pub partition_points: BTreeSet<i64>,
    /// MITL formula before partitioning.
    pub renamed: String,
    /// MITL formula after partitioning.
    pub mitl: String,
}

pub fn translate(stl: &str, config: &Config) -> Translation {
    let props = extract_atomic_props(stl);
    let prop_map = PropMap::build(&props, config.naming);
    info!("Mapped {} atomic propositions: {}", prop_map.len(), prop_map);

    let signal = synthesize_signal_with_resolution(config.horizon, config.resolution);
    let partition_points = stable_partition_points(&signal);
    info!("Found {} partition points over {} samples", partition_points.len(), signal.len());

    let renamed = rename_atomic_props(stl, &prop_map);
    let mitl = partition_temporal_operators(&renamed, &partition_points);
    info!("MITL formula: {}", mitl);

    Translation {
        stl: stl.to_string(),
        props,
        prop_map,
        signal,
        partition_points,
        renamed,
        mitl,
    }
}
