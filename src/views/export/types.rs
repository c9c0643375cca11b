// Language shown on caption tracks and in the language picker
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayLanguage {
    pub name: String,
    pub code: String,
}

impl DisplayLanguage {
    pub fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    pub fn catalogue() -> Vec<DisplayLanguage> {
        vec![
            DisplayLanguage::new("English", "en"),
            DisplayLanguage::new("Spanish", "es"),
            DisplayLanguage::new("French", "fr"),
            DisplayLanguage::new("German", "de"),
            DisplayLanguage::new("Japanese", "ja"),
            DisplayLanguage::new("Korean", "ko"),
            DisplayLanguage::new("Portuguese", "pt"),
            DisplayLanguage::new("Hindi", "hi"),
        ]
    }

    pub fn from_code(code: &str) -> DisplayLanguage {
        Self::catalogue()
            .into_iter()
            .find(|lang| lang.code == code)
            .unwrap_or_default()
    }
}

impl Default for DisplayLanguage {
    fn default() -> Self {
        DisplayLanguage::new("English", "en")
    }
}

/// Media supplied by the parent screen. The export control only reads it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaReference {
    pub locator: Option<String>,
    pub caption_locator: Option<String>,
    pub display_language: DisplayLanguage,
    pub is_loading: bool,
}

impl MediaReference {
    pub fn new(locator: impl Into<String>) -> Self {
        Self {
            locator: Some(locator.into()),
            ..Default::default()
        }
    }

    // Blank input counts as absent
    pub fn locator(&self) -> Option<&str> {
        self.locator
            .as_deref()
            .map(str::trim)
            .filter(|locator| !locator.is_empty())
    }

    pub fn caption_locator(&self) -> Option<&str> {
        self.caption_locator
            .as_deref()
            .map(str::trim)
            .filter(|locator| !locator.is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadState {
    pub in_progress: bool,
}

impl DownloadState {
    pub const IDLE: DownloadState = DownloadState { in_progress: false };
    pub const BUSY: DownloadState = DownloadState { in_progress: true };
}

// What the header action looks like for a given media/state pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionView {
    Hidden,
    Enabled,
    Busy,
}

impl ActionView {
    pub fn for_media(media: &MediaReference, state: DownloadState) -> Self {
        if state.in_progress {
            ActionView::Busy
        } else if media.locator().is_some() {
            ActionView::Enabled
        } else {
            ActionView::Hidden
        }
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self, ActionView::Enabled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionView::Busy => "Downloading...",
            _ => "Download",
        }
    }
}
