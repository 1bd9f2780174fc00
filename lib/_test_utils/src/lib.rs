use std::collections::BTreeSet;
use std::fs;

use color_eyre::eyre::{ensure, eyre};

use stl_mitl::core::output::write_mitl;
use stl_mitl::core::pipeline::{translate, Config, Translation};

/// Formula whose `G` operator matches the partitioned shape under both naming schemes.
pub const EXAMPLE_STL: &str = "F [0, 5] (x > 0.3) ∧ G [0, 20] ((y < 2) U (z > 1))";

/// Partition points of the default example signal.
pub fn example_points() -> BTreeSet<i64> {
    BTreeSet::from([5, 8, 10, 15, 20])
}

/// Translates `stl`, writes the result into a fresh temporary directory and checks it reads back.
pub fn run_end_to_end(stl: &str, config: &Config) -> color_eyre::Result<Translation> {
    let translation = translate(stl, config);
    println!("stl = {}", translation.stl);
    println!("mitl = {}", translation.mitl);

    let dir = tempfile::tempdir()?;
    let name = dir.path().join("formula");
    let path = write_mitl(&translation.mitl, &name.to_string_lossy())?;
    ensure!(path.extension().map_or(false, |e| e == "mitl"), "bad output path {}", path.display());

    let written = fs::read_to_string(&path)?;
    ensure!(written == translation.mitl, "written {:?} != {:?}", written, translation.mitl);

    Ok(translation)
}

/// Intervals of the `G [lo, hi] ((p2) U (p3))` conjuncts of a partitioned formula.
pub fn until_intervals(mitl: &str) -> color_eyre::Result<Vec<(i64, i64)>> {
    mitl.split(" ∧ ")
        .filter(|c| c.starts_with("G [") && c.ends_with("((p2) U (p3))"))
        .map(|c| -> color_eyre::Result<(i64, i64)> {
            let inner = c
                .strip_prefix("G [")
                .and_then(|rest| rest.split_once(']'))
                .map(|(bounds, _)| bounds)
                .ok_or_else(|| eyre!("bad conjunct {:?}", c))?;
            let (lo, hi) = inner.split_once(',').ok_or_else(|| eyre!("bad bounds {:?}", inner))?;
            Ok((lo.trim().parse()?, hi.trim().parse()?))
        })
        .collect()
}
