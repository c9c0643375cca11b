// Platform-specific save implementations
mod common;
#[cfg(feature = "desktop")]
mod desktop;
#[cfg(feature = "web")]
mod web;

use std::rc::Rc;

pub use common::UnsupportedSaver;
#[cfg(feature = "desktop")]
pub use desktop::DesktopSaver;
#[cfg(feature = "web")]
pub use web::BrowserSaver;

/// Failure while building or issuing a save instruction.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no media locator to save")]
    MissingLocator,
    #[error("invalid locator {locator:?}: {reason}")]
    InvalidLocator { locator: String, reason: String },
    #[error("browser API error: {0}")]
    Browser(String),
    #[error("failed to save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("saving files is not supported on this platform")]
    Unsupported,
}

/// Hands a locator to the host environment for saving under a suggested name.
///
/// Implementations issue the instruction and return; they never wait for
/// the bytes to arrive.
pub trait FileSaver {
    fn save_as(&self, uri: &str, suggested_name: &str) -> Result<(), SaveError>;
}

/// Saver for the platform this build targets.
#[cfg(feature = "web")]
pub fn platform_saver() -> Rc<dyn FileSaver> {
    Rc::new(BrowserSaver)
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
pub fn platform_saver() -> Rc<dyn FileSaver> {
    Rc::new(DesktopSaver::from_user_dirs())
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
pub fn platform_saver() -> Rc<dyn FileSaver> {
    Rc::new(UnsupportedSaver)
}
