// Export tab: media preview plus the save-to-device action
mod handlers;
mod platforms;
mod types;
mod ui;

pub use ui::ExportControl;

pub use platforms::{platform_saver, FileSaver};
pub use types::{DisplayLanguage, MediaReference};
