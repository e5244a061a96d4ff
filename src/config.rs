use crate::error::FolioError;
use folio_taxonomy::{DEFAULT_MAX_FONT_SIZE, DEFAULT_MIN_FONT_SIZE};
use serde::{Deserialize, Serialize};

/// Site-wide settings, read from `site.json` when the content source has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub title: String,
    /// Locale used for date formatting, e.g. `en-US` or `zh-TW`.
    pub locale: String,
    pub site_url: String,
    /// Posts per page on paginated listings.
    pub posts_per_page: usize,
    /// Posts shown on the home page before the "all posts" link.
    pub max_display: usize,
    pub include_drafts: bool,
    pub tag_cloud: TagCloudConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            locale: "en-US".to_string(),
            site_url: String::new(),
            posts_per_page: 5,
            max_display: 5,
            include_drafts: false,
            tag_cloud: TagCloudConfig::default(),
        }
    }
}

/// Font size bounds for the tag cloud, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagCloudConfig {
    pub min_size: u32,
    pub max_size: u32,
}

impl Default for TagCloudConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_FONT_SIZE,
            max_size: DEFAULT_MAX_FONT_SIZE,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, FolioError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.posts_per_page == 0 {
            return Err(FolioError::Config("postsPerPage must be at least 1".to_string()));
        }
        if self.tag_cloud.min_size > self.tag_cloud.max_size {
            return Err(FolioError::Config(format!(
                "tagCloud.minSize ({}) exceeds tagCloud.maxSize ({})",
                self.tag_cloud.min_size, self.tag_cloud.max_size
            )));
        }
        Ok(())
    }
}
