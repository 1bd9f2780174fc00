use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use snafu::{ResultExt, Snafu};

pub const MITL_EXTENSION: &str = ".mitl";

pub type Result<T, E = OutputError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum OutputError {
    #[snafu(display("Unable to write to file {}: {}", path.display(), source))]
    Create { path: PathBuf, source: io::Error },

    #[snafu(display("Unable to write to file {}: {}", path.display(), source))]
    Write { path: PathBuf, source: io::Error },
}

impl OutputError {
    pub fn path(&self) -> &Path {
        match self {
            OutputError::Create { path, .. } => path,
            OutputError::Write { path, .. } => path,
        }
    }
}

/// Appends the `.mitl` extension unless the name already contains it anywhere.
///
/// This is a substring check: `data.mitl.bak` is kept as is.
pub fn mitl_path(name: &str) -> PathBuf {
    if name.contains(MITL_EXTENSION) {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}{}", name, MITL_EXTENSION))
    }
}

/// Writes the formula (without a trailing newline) to `name`, see [`mitl_path`].
///
/// Returns the path actually written.
pub fn write_mitl(formula: &str, name: &str) -> Result<PathBuf> {
    let path = mitl_path(name);
    debug!("Writing {} bytes to {}", formula.len(), path.display());
    let mut file = File::create(&path).context(CreateSnafu { path: &path })?;
    file.write_all(formula.as_bytes()).context(WriteSnafu { path: &path })?;
    Ok(path)
}
