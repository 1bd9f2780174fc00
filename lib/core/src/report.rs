use std::fmt::{Display, Formatter};

use crate::pipeline::Translation;

/// Human-readable account of every step of a [`Translation`].
pub struct Transcript<'a> {
    translation: &'a Translation,
    show_samples: bool,
}

impl<'a> Transcript<'a> {
    pub fn new(translation: &'a Translation) -> Self {
        Self {
            translation,
            show_samples: true,
        }
    }

    /// Whether to list every signal sample in step 3.
    pub fn show_samples(mut self, show: bool) -> Self {
        self.show_samples = show;
        self
    }
}

impl Display for Transcript<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let t = self.translation;

        writeln!(f, "Step 1: Extracted atomic propositions:")?;
        for prop in t.props.iter() {
            writeln!(f, "- {}", prop)?;
        }

        writeln!(f)?;
        writeln!(f, "Step 2: Mapped atomic propositions to Boolean variables:")?;
        for (prop, name) in t.prop_map.iter() {
            writeln!(f, "- {} -> {}", prop, name)?;
        }

        writeln!(f)?;
        writeln!(f, "Step 3: Synthesized signal behavior:")?;
        if self.show_samples {
            for sample in t.signal.iter() {
                writeln!(f, "{}", sample)?;
            }
        } else {
            writeln!(f, "({} samples)", t.signal.len())?;
        }

        writeln!(f)?;
        writeln!(f, "Step 4: Constructed stable partitions:")?;
        for point in t.partition_points.iter() {
            writeln!(f, "Partition point: {}", point)?;
        }

        writeln!(f)?;
        writeln!(f, "Step 5: Replaced atomic propositions in the STL formula:")?;
        writeln!(f, "STL Formula: {}", t.stl)?;
        writeln!(f, "MITL Formula (before partitioning): {}", t.renamed)?;

        writeln!(f)?;
        writeln!(f, "Step 6: Partitioned temporal operators in the MITL formula:")?;
        writeln!(f, "MITL Formula (after partitioning): {}", t.mitl)
    }
}
