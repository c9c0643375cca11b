use serde::{Deserialize, Serialize};
use url::Url;

/// Bundled configuration, overridable by editing the asset before a build.
const BUNDLED_CONFIG: &str = include_str!("../assets/app_config.json");

pub const DEFAULT_FILENAME: &str = "video.mp4";
pub const DEFAULT_STORAGE_MIRROR: &str = "https://storage.mtls.cloud.google.com/";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application-wide settings shared through the page shell's context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteMetadata,
    pub font: FontConfig,
    /// Public mirror that `gs://` locators are rewritten onto.
    pub storage_mirror: String,
    /// Saved-file name used when a locator has no usable final segment.
    pub default_filename: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: SiteMetadata::default(),
            font: FontConfig::default(),
            storage_mirror: DEFAULT_STORAGE_MIRROR.to_string(),
            default_filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the bundled configuration, falling back to defaults when it
    /// cannot be parsed.
    pub fn load() -> Self {
        match Self::from_json(BUNDLED_CONFIG) {
            Ok(config) => {
                tracing::info!("Loaded configuration for {}", config.site.title);
                config
            }
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Media Studio".to_string(),
            description: "Preview generated videos and save them to your device".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub subsets: Vec<String>,
    pub display: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            subsets: vec!["latin".to_string()],
            display: "swap".to_string(),
        }
    }
}

impl FontConfig {
    /// Stylesheet URL on the Google Fonts CSS API for this family.
    pub fn stylesheet_href(&self) -> String {
        let mut params = vec![
            ("family", self.family.clone()),
            ("display", self.display.clone()),
        ];
        if !self.subsets.is_empty() {
            params.push(("subset", self.subsets.join(",")));
        }

        match Url::parse_with_params("https://fonts.googleapis.com/css2", &params) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("Could not build font stylesheet URL: {}", e);
                String::new()
            }
        }
    }

    /// CSS `font-family` value with a generic fallback.
    pub fn css_family(&self) -> String {
        format!("'{}', sans-serif", self.family)
    }
}
