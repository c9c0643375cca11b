use super::{FileSaver, SaveError};
use std::path::{Path, PathBuf};

// Fallback for builds without a web or desktop renderer
pub struct UnsupportedSaver;

impl FileSaver for UnsupportedSaver {
    fn save_as(&self, uri: &str, _suggested_name: &str) -> Result<(), SaveError> {
        tracing::warn!("No platform saver available for {}", uri);
        Err(SaveError::Unsupported)
    }
}

/// Copy a local file into `dir` under `name`, creating `dir` when missing.
#[cfg_attr(not(feature = "desktop"), allow(dead_code))]
pub fn copy_into_dir(source: &Path, dir: &Path, name: &str) -> Result<PathBuf, SaveError> {
    std::fs::create_dir_all(dir)?;
    let target = dir.join(name);
    std::fs::copy(source, &target)?;
    Ok(target)
}
