// Desktop implementation of the save instruction
use super::common::copy_into_dir;
use super::{FileSaver, SaveError};
use std::path::PathBuf;
use url::Url;

/// Saves local media into a downloads directory and hands remote media
/// to the system URL handler, which owns the transfer from there.
pub struct DesktopSaver {
    downloads_dir: PathBuf,
}

impl DesktopSaver {
    pub fn new(downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            downloads_dir: downloads_dir.into(),
        }
    }

    /// Use the user's Downloads folder, then `~/Downloads`, then the temp dir.
    pub fn from_user_dirs() -> Self {
        let downloads_dir = dirs::download_dir()
            .or_else(|| dirs::home_dir().map(|dir| dir.join("Downloads")))
            .unwrap_or_else(std::env::temp_dir);
        Self::new(downloads_dir)
    }
}

impl FileSaver for DesktopSaver {
    fn save_as(&self, uri: &str, suggested_name: &str) -> Result<(), SaveError> {
        let parsed = Url::parse(uri).map_err(|e| SaveError::InvalidLocator {
            locator: uri.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() == "file" {
            let source = parsed
                .to_file_path()
                .map_err(|_| SaveError::InvalidLocator {
                    locator: uri.to_string(),
                    reason: "not a local file path".to_string(),
                })?;
            let target = copy_into_dir(&source, &self.downloads_dir, suggested_name)?;
            tracing::info!("Saved {} to {}", source.display(), target.display());
        } else {
            open::that(uri)?;
            tracing::info!("Handed {} to the system handler", uri);
        }
        Ok(())
    }
}
