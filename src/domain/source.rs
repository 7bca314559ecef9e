use serde::{Deserialize, Serialize};

/// Per-source enrichment category, declared explicitly in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Video,
    Article,
    Generic,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Video => "video",
            SourceKind::Article => "article",
            SourceKind::Generic => "generic",
        }
    }
}

impl std::str::FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "video" => Ok(SourceKind::Video),
            "article" => Ok(SourceKind::Article),
            "generic" => Ok(SourceKind::Generic),
            _ => Err(format!("Unknown source kind: {}", s)),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One registry entry: a named remote feed plus its enrichment category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
    pub kind: SourceKind,
}

impl Source {
    pub fn new(name: &str, url: &str, kind: SourceKind) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            kind,
        }
    }
}
