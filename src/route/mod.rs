//! Sitemap routes and their Google extensions.
//!
//! # Module Structure
//!
//! ```text
//! route/
//! ├── mod.rs        # Route, Image, Video, News, Alternate (this file)
//! ├── source.rs     # RouteSource: literal / closure / async producers
//! ├── normalize.rs  # hostname resolution, defaults, user transform
//! ├── filter.rs     # exclude patterns (glob | regex)
//! └── validate.rs   # protocol + extension rules
//! ```
//!
//! The same [`Route`] type is used before and after normalization: raw routes
//! may carry a relative `url`, normalized ones are fully qualified. Only
//! [`ValidatedRoute`] is accepted by the splitter and serializer.

pub mod filter;
pub mod normalize;
pub mod source;
pub mod validate;

pub use filter::{ExcludePattern, ExcludeSpec};
pub use normalize::{RouteTransform, normalize_routes, resolve_url, transform_fn};
pub use source::{RouteSource, RouteSources, from_async, from_fn};
pub use validate::{Rule, ValidatedRoute, ValidationError, validate};

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Route
// ============================================================================

/// One `<url>` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Absolute URL, or a path relative to the configured hostname.
    pub url: String,

    /// W3C datetime.
    #[serde(rename = "lastmod", alias = "last_modified")]
    pub last_modified: Option<String>,

    #[serde(rename = "changefreq", alias = "change_frequency")]
    pub change_frequency: Option<ChangeFrequency>,

    /// 0.0 ..= 1.0
    pub priority: Option<f64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<Video>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<News>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<Alternate>,
}

impl Route {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.last_modified = Some(lastmod.into());
        self
    }

    pub fn with_changefreq(mut self, freq: ChangeFrequency) -> Self {
        self.change_frequency = Some(freq);
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    pub fn with_video(mut self, video: Video) -> Self {
        self.videos.push(video);
        self
    }

    pub fn with_news(mut self, news: News) -> Self {
        self.news = Some(news);
        self
    }

    pub fn with_alternate(mut self, hreflang: impl Into<String>, href: impl Into<String>) -> Self {
        self.alternates.push(Alternate {
            hreflang: hreflang.into(),
            href: href.into(),
        });
        self
    }
}

// ============================================================================
// ChangeFrequency
// ============================================================================

/// `<changefreq>` value.
///
/// Unknown strings are kept as [`ChangeFrequency::Other`] so that a single bad
/// value surfaces as a validation error on its route instead of failing the
/// whole route file at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
    Other(String),
}

impl ChangeFrequency {
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
            Self::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ChangeFrequency {
    fn from(s: String) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .unwrap_or(Self::Other(s))
    }
}

impl From<&str> for ChangeFrequency {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<ChangeFrequency> for String {
    fn from(f: ChangeFrequency) -> Self {
        f.as_str().to_string()
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Extensions
// ============================================================================

/// `<image:image>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub loc: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub geo_location: Option<String>,
    pub license: Option<String>,
}

impl Image {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            ..Self::default()
        }
    }
}

/// `<video:video>`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub title: String,
    pub description: String,
    pub thumbnail_loc: String,
    pub content_loc: Option<String>,
    pub player_loc: Option<String>,
    /// Seconds, 1 ..= 28800.
    pub duration: Option<u32>,
    /// 0.0 ..= 5.0
    pub rating: Option<f64>,
    pub view_count: Option<u64>,
    pub publication_date: Option<String>,
    pub expiration_date: Option<String>,
    pub family_friendly: Option<bool>,
    pub live: Option<bool>,
    pub requires_subscription: Option<bool>,
    pub restriction: Option<Access>,
    pub platform: Option<Access>,
    pub uploader: Option<Uploader>,
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail_loc: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            thumbnail_loc: thumbnail_loc.into(),
            ..Self::default()
        }
    }
}

/// Allow/deny list used by `<video:restriction>` (country codes) and
/// `<video:platform>` (web, mobile, tv).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Access {
    pub relationship: Relationship,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Allow,
    Deny,
}

impl Relationship {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Uploader {
    pub name: String,
    /// Rendered as the `info` attribute.
    #[serde(alias = "info")]
    pub info_url: Option<String>,
}

/// `<news:news>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct News {
    pub publication: Publication,
    pub publication_date: String,
    pub title: String,
    /// Comma-joined keywords.
    pub keywords: Option<String>,
    /// Comma-joined tickers, at most five.
    pub stock_tickers: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub name: String,
    /// ISO 639-1 code (`zh-cn` / `zh-tw` also accepted by Google).
    pub language: String,
}

/// `<xhtml:link rel="alternate" hreflang=".." href=".."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alternate {
    /// Language code or `x-default`.
    #[serde(alias = "lang")]
    pub hreflang: String,
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changefreq_from_str() {
        assert_eq!(ChangeFrequency::from("daily"), ChangeFrequency::Daily);
        assert_eq!(ChangeFrequency::from("never"), ChangeFrequency::Never);
        assert_eq!(
            ChangeFrequency::from("sometimes"),
            ChangeFrequency::Other("sometimes".into())
        );
        assert!(!ChangeFrequency::from("Daily").is_known());
    }

    #[test]
    fn test_route_from_json() {
        let json = r#"{
            "url": "/blog/hello",
            "lastmod": "2025-01-01",
            "changefreq": "weekly",
            "priority": 0.8,
            "images": [{ "loc": "https://example.com/a.png", "title": "A" }],
            "alternates": [{ "hreflang": "de", "href": "https://example.com/de/blog/hello" }]
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();

        assert_eq!(route.url, "/blog/hello");
        assert_eq!(route.last_modified.as_deref(), Some("2025-01-01"));
        assert_eq!(route.change_frequency, Some(ChangeFrequency::Weekly));
        assert_eq!(route.priority, Some(0.8));
        assert_eq!(route.images[0].title.as_deref(), Some("A"));
        assert_eq!(route.alternates[0].hreflang, "de");
        assert!(route.videos.is_empty());
        assert!(route.news.is_none());
    }

    #[test]
    fn test_unknown_changefreq_survives_parsing() {
        let route: Route = serde_json::from_str(r#"{"url": "/", "changefreq": "often"}"#).unwrap();
        assert_eq!(route.change_frequency, Some(ChangeFrequency::Other("often".into())));
    }

    #[test]
    fn test_video_from_toml() {
        let toml_src = r#"
            url = "/watch"

            [[videos]]
            title = "Grilling steaks"
            description = "How to grill"
            thumbnail_loc = "https://example.com/thumb.jpg"
            player_loc = "https://example.com/player?v=1"
            family_friendly = true
            tags = ["bbq", "steak"]

            [videos.restriction]
            relationship = "allow"
            values = ["IE", "GB"]

            [videos.uploader]
            name = "Grill Master"
            info = "https://example.com/users/grill"
        "#;
        let route: Route = toml::from_str(toml_src).unwrap();
        let video = &route.videos[0];

        assert_eq!(video.title, "Grilling steaks");
        assert_eq!(video.family_friendly, Some(true));
        assert_eq!(video.tags, vec!["bbq", "steak"]);
        let restriction = video.restriction.as_ref().unwrap();
        assert_eq!(restriction.relationship, Relationship::Allow);
        assert_eq!(restriction.values, vec!["IE", "GB"]);
        assert_eq!(
            video.uploader.as_ref().unwrap().info_url.as_deref(),
            Some("https://example.com/users/grill")
        );
    }

    #[test]
    fn test_builders() {
        let route = Route::new("/a")
            .with_priority(0.3)
            .with_changefreq(ChangeFrequency::Monthly)
            .with_alternate("x-default", "https://example.com/a");

        assert_eq!(route.priority, Some(0.3));
        assert_eq!(route.alternates.len(), 1);
    }
}
