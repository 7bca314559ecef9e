use crate::errors::MergeResult;

const DEFAULT_SITE_URL: &str = "https://knfoster13.github.io/knf90/";
const DEFAULT_TITLE: &str = "Kimberly's Creative Sprint";
const DEFAULT_DESCRIPTION: &str = "A 90-day sprint through ideas, images, and inquiry";
const DEFAULT_AUTHOR: &str = "Kimberly Nicole Foster";

/// Immutable run configuration, built once at startup and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the generated feed document is written.
    pub output_path: String,
    /// Optional JSON file overriding the built-in source registry.
    pub sources_path: Option<String>,
    pub site_title: String,
    pub home_page_url: String,
    pub feed_url: String,
    pub description: String,
    /// Author name used when a feed entry carries none.
    pub default_author: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> MergeResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let output_path =
            std::env::var("FEEDMERGE_OUTPUT").unwrap_or_else(|_| "feed.json".to_string());

        let sources_path = std::env::var("FEEDMERGE_SOURCES").ok();

        let home_page_url =
            std::env::var("FEEDMERGE_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());

        let feed_url = format!("{}feed.json", home_page_url);

        let default_author =
            std::env::var("FEEDMERGE_AUTHOR").unwrap_or_else(|_| DEFAULT_AUTHOR.to_string());

        Ok(Self {
            output_path,
            sources_path,
            site_title: DEFAULT_TITLE.to_string(),
            home_page_url,
            feed_url,
            description: DEFAULT_DESCRIPTION.to_string(),
            default_author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_derived_from_site_url() {
        let config = Config {
            output_path: "feed.json".to_string(),
            sources_path: None,
            site_title: DEFAULT_TITLE.to_string(),
            home_page_url: "https://example.com/".to_string(),
            feed_url: format!("{}feed.json", "https://example.com/"),
            description: DEFAULT_DESCRIPTION.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
        };

        assert_eq!(config.feed_url, "https://example.com/feed.json");
    }
}
