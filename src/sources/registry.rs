use std::fs;

use url::Url;

use crate::domain::{Source, SourceKind};
use crate::errors::{MergeError, MergeResult};

/// Ordered, immutable list of feed sources. Iteration order drives the
/// first-seen semantics of deduplication downstream.
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    /// The built-in source table. Editing this list requires no change
    /// anywhere else; enrichment is keyed on the declared kind.
    pub fn defaults() -> Self {
        Self {
            sources: vec![
                Source::new(
                    "rss_app_1",
                    "https://rss.app/feeds/GoSZ0DgbbyUtgMcE.xml",
                    SourceKind::Generic,
                ),
                Source::new(
                    "for_harriet",
                    "https://www.forharriet.com/feed",
                    SourceKind::Article,
                ),
                Source::new(
                    "rss_app_2",
                    "https://rss.app/feed/krkoHnHt8tJ15p5j",
                    SourceKind::Generic,
                ),
                Source::new(
                    "rss_app_3",
                    "https://rss.app/feed/F2L7PheEOG3WfmPI",
                    SourceKind::Generic,
                ),
                Source::new(
                    "making_things",
                    "https://makingthingsisreallyhard.com/feed",
                    SourceKind::Article,
                ),
                Source::new(
                    "rss_app_4",
                    "https://rss.app/feed/EduGcpWgIZuZDC7l",
                    SourceKind::Generic,
                ),
                Source::new(
                    "youtube_main",
                    "https://www.youtube.com/feeds/videos.xml?channel_id=UCKiEmEHuuBtNPHhQR9cKvTA",
                    SourceKind::Video,
                ),
                Source::new(
                    "youtube_channel_2",
                    "https://www.youtube.com/feeds/videos.xml?channel_id=UCxbRHP66thn1Ka3JC8O3dqA",
                    SourceKind::Video,
                ),
                Source::new(
                    "youtube_channel_3",
                    "https://www.youtube.com/feeds/videos.xml?channel_id=UCilNETwoyWx5lJTmzE4p7HQ",
                    SourceKind::Video,
                ),
                Source::new(
                    "personal_site",
                    "https://kimberlynicolefoster.co/feed",
                    SourceKind::Article,
                ),
            ],
        }
    }

    pub fn from_sources(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    /// Load the registry from a JSON override file when one is configured,
    /// otherwise use the built-in table.
    pub fn load(sources_path: Option<&str>) -> MergeResult<Self> {
        match sources_path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    MergeError::SourcesFile(format!("cannot read {}: {}", path, e))
                })?;
                let sources: Vec<Source> = serde_json::from_str(&content).map_err(|e| {
                    MergeError::SourcesFile(format!("cannot parse {}: {}", path, e))
                })?;
                for source in &sources {
                    Url::parse(&source.url).map_err(|_| {
                        MergeError::InvalidUrl(format!("{}: {}", source.name, source.url))
                    })?;
                }
                Ok(Self { sources })
            }
            None => Ok(Self::defaults()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}
