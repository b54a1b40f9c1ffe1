//! Per-route validation against the sitemap protocol and Google's
//! image/video/news/hreflang extensions.
//!
//! Every rule is checked independently and all violations of a route are
//! reported together. A route with any violation is rejected as a whole,
//! including when only one nested image or video is at fault.

use super::{Alternate, Image, News, Route, Video};
use crate::utils::is_w3c_datetime;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;
use url::Url;

pub const MAX_URL_LEN: usize = 2048;
pub const MAX_IMAGES: usize = 1000;
pub const MAX_VIDEO_TITLE_LEN: usize = 100;
pub const MAX_VIDEO_DESCRIPTION_LEN: usize = 2048;
pub const MAX_VIDEO_DURATION: u32 = 28_800;
pub const MAX_VIDEO_RATING: f64 = 5.0;
pub const MAX_VIDEO_TAGS: usize = 32;
pub const MAX_NEWS_TITLE_LEN: usize = 2048;
pub const MAX_STOCK_TICKERS: usize = 5;

// ============================================================================
// Errors
// ============================================================================

/// The constraint a field violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rule {
    #[error("is required")]
    Required,

    #[error("is {len} characters long (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("must not contain a fragment (`#`)")]
    Fragment,

    #[error("is not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("has scheme `{0}`, expected http or https")]
    Scheme(String),

    #[error("must be an absolute URL")]
    NotAbsolute,

    #[error("{0} is outside 0.0..=1.0")]
    PriorityRange(f64),

    #[error("`{0}` is not a W3C datetime")]
    InvalidDate(String),

    #[error("`{0}` is not one of always, hourly, daily, weekly, monthly, yearly, never")]
    InvalidChangefreq(String),

    #[error("has {count} entries (max {max})")]
    TooMany { count: usize, max: usize },

    #[error("needs at least one of content_loc or player_loc")]
    MissingVideoLocation,

    #[error("{0} seconds is outside 1..=28800")]
    DurationRange(u32),

    #[error("{0} is outside 0.0..=5.0")]
    RatingRange(f64),
}

/// A rejected route's violation, with enough context to locate and fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Named sitemap the route belongs to (`None` for the default one).
    pub sitemap: Option<String>,
    /// Position of the route in its source collection.
    pub index: usize,
    /// The route's URL as resolved (before validation).
    pub url: String,
    /// Field path, e.g. `priority` or `videos[0].title`.
    pub field: String,
    pub rule: Rule,
}

impl ValidationError {
    pub fn in_sitemap(mut self, name: Option<&str>) -> Self {
        self.sitemap = name.map(str::to_string);
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.sitemap {
            write!(f, "[{name}] ")?;
        }
        write!(
            f,
            "route #{} `{}`: {} {}",
            self.index, self.url, self.field, self.rule
        )
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ValidatedRoute
// ============================================================================

/// A route that passed every rule. Only obtainable through [`validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRoute(Route);

impl ValidatedRoute {
    pub fn into_inner(self) -> Route {
        self.0
    }
}

impl Deref for ValidatedRoute {
    type Target = Route;

    fn deref(&self) -> &Route {
        &self.0
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate one route, collecting every violation.
///
/// `index` is the route's position in its source collection and is only used
/// for error reporting.
pub fn validate(route: Route, index: usize) -> Result<ValidatedRoute, Vec<ValidationError>> {
    let mut check = Checker::default();

    check.route_url(&route.url);

    if let Some(priority) = route.priority
        && !(0.0..=1.0).contains(&priority)
    {
        check.fail("priority", Rule::PriorityRange(priority));
    }

    if let Some(lastmod) = &route.last_modified
        && !is_w3c_datetime(lastmod)
    {
        check.fail("lastmod", Rule::InvalidDate(lastmod.clone()));
    }

    if let Some(freq) = &route.change_frequency
        && !freq.is_known()
    {
        check.fail("changefreq", Rule::InvalidChangefreq(freq.to_string()));
    }

    check.images(&route.images);
    for (i, video) in route.videos.iter().enumerate() {
        check.video(i, video);
    }
    if let Some(news) = &route.news {
        check.news(news);
    }
    for (i, alternate) in route.alternates.iter().enumerate() {
        check.alternate(i, alternate);
    }

    if check.errors.is_empty() {
        Ok(ValidatedRoute(route))
    } else {
        Err(check
            .errors
            .into_iter()
            .map(|(field, rule)| ValidationError {
                sitemap: None,
                index,
                url: route.url.clone(),
                field,
                rule,
            })
            .collect())
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<(String, Rule)>,
}

impl Checker {
    fn fail(&mut self, field: impl Into<String>, rule: Rule) {
        self.errors.push((field.into(), rule));
    }

    fn route_url(&mut self, url: &str) {
        if url.is_empty() {
            return self.fail("url", Rule::Required);
        }
        let len = url.chars().count();
        if len > MAX_URL_LEN {
            self.fail("url", Rule::TooLong { len, max: MAX_URL_LEN });
        }
        if url.contains('#') {
            self.fail("url", Rule::Fragment);
        }
        match Url::parse(url) {
            Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                self.fail("url", Rule::Scheme(parsed.scheme().to_string()));
            }
            Ok(_) => {}
            Err(e) => self.fail("url", Rule::InvalidUrl(e.to_string())),
        }
    }

    fn absolute(&mut self, field: impl Into<String>, value: &str) {
        let field = field.into();
        if value.trim().is_empty() {
            self.fail(field, Rule::Required);
        } else if !Url::parse(value).is_ok_and(|u| u.has_host()) {
            self.fail(field, Rule::NotAbsolute);
        }
    }

    fn required_text(&mut self, field: impl Into<String>, value: &str, max: usize) {
        let field = field.into();
        if value.trim().is_empty() {
            return self.fail(field, Rule::Required);
        }
        let len = value.chars().count();
        if len > max {
            self.fail(field, Rule::TooLong { len, max });
        }
    }

    fn images(&mut self, images: &[Image]) {
        if images.len() > MAX_IMAGES {
            self.fail(
                "images",
                Rule::TooMany {
                    count: images.len(),
                    max: MAX_IMAGES,
                },
            );
        }
        for (i, image) in images.iter().enumerate() {
            self.absolute(format!("images[{i}].loc"), &image.loc);
        }
    }

    fn video(&mut self, i: usize, video: &Video) {
        let field = |name: &str| format!("videos[{i}].{name}");

        self.required_text(field("title"), &video.title, MAX_VIDEO_TITLE_LEN);
        self.required_text(
            field("description"),
            &video.description,
            MAX_VIDEO_DESCRIPTION_LEN,
        );
        if video.thumbnail_loc.trim().is_empty() {
            self.fail(field("thumbnail_loc"), Rule::Required);
        }

        let has = |loc: &Option<String>| loc.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !has(&video.content_loc) && !has(&video.player_loc) {
            self.fail(field("content_loc|player_loc"), Rule::MissingVideoLocation);
        }

        if let Some(duration) = video.duration
            && !(1..=MAX_VIDEO_DURATION).contains(&duration)
        {
            self.fail(field("duration"), Rule::DurationRange(duration));
        }
        if let Some(rating) = video.rating
            && !(0.0..=MAX_VIDEO_RATING).contains(&rating)
        {
            self.fail(field("rating"), Rule::RatingRange(rating));
        }
        if video.tags.len() > MAX_VIDEO_TAGS {
            self.fail(
                field("tags"),
                Rule::TooMany {
                    count: video.tags.len(),
                    max: MAX_VIDEO_TAGS,
                },
            );
        }
    }

    fn news(&mut self, news: &News) {
        if news.publication.name.trim().is_empty() {
            self.fail("news.publication.name", Rule::Required);
        }
        if news.publication.language.trim().is_empty() {
            self.fail("news.publication.language", Rule::Required);
        }
        if news.publication_date.trim().is_empty() {
            self.fail("news.publication_date", Rule::Required);
        } else if !is_w3c_datetime(&news.publication_date) {
            self.fail(
                "news.publication_date",
                Rule::InvalidDate(news.publication_date.clone()),
            );
        }
        self.required_text("news.title", &news.title, MAX_NEWS_TITLE_LEN);

        if let Some(tickers) = &news.stock_tickers {
            let count = tickers.split(',').filter(|t| !t.trim().is_empty()).count();
            if count > MAX_STOCK_TICKERS {
                self.fail(
                    "news.stock_tickers",
                    Rule::TooMany {
                        count,
                        max: MAX_STOCK_TICKERS,
                    },
                );
            }
        }
    }

    fn alternate(&mut self, i: usize, alternate: &Alternate) {
        if alternate.hreflang.trim().is_empty() {
            self.fail(format!("alternates[{i}].hreflang"), Rule::Required);
        }
        self.absolute(format!("alternates[{i}].href"), &alternate.href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{ChangeFrequency, Publication};

    fn ok_video() -> Video {
        Video {
            content_loc: Some("https://example.com/v.mp4".into()),
            ..Video::new("Title", "Description", "https://example.com/t.jpg")
        }
    }

    fn ok_news() -> News {
        News {
            publication: Publication {
                name: "The Example Times".into(),
                language: "en".into(),
            },
            publication_date: "2025-01-01T08:00:00Z".into(),
            title: "Headline".into(),
            keywords: None,
            stock_tickers: None,
        }
    }

    fn rules(route: Route) -> Vec<(String, Rule)> {
        validate(route, 0)
            .unwrap_err()
            .into_iter()
            .map(|e| (e.field, e.rule))
            .collect()
    }

    #[test]
    fn test_minimal_route_passes() {
        let route = validate(Route::new("https://example.com/"), 0).unwrap();
        assert_eq!(route.url, "https://example.com/");
    }

    #[test]
    fn test_priority_range() {
        assert!(validate(Route::new("https://example.com/").with_priority(0.5), 0).is_ok());
        assert!(validate(Route::new("https://example.com/").with_priority(0.0), 0).is_ok());
        assert!(validate(Route::new("https://example.com/").with_priority(1.0), 0).is_ok());

        let errors = rules(Route::new("https://example.com/").with_priority(1.5));
        assert_eq!(errors, vec![("priority".into(), Rule::PriorityRange(1.5))]);
    }

    #[test]
    fn test_priority_nan_rejected() {
        let errors = rules(Route::new("https://example.com/").with_priority(f64::NAN));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "priority");
    }

    #[test]
    fn test_fragment_rejected() {
        let errors = rules(Route::new("https://example.com/page#section"));
        assert_eq!(errors, vec![("url".into(), Rule::Fragment)]);
    }

    #[test]
    fn test_url_rules() {
        assert_eq!(rules(Route::new("")), vec![("url".into(), Rule::Required)]);

        let errors = rules(Route::new("ftp://example.com/file"));
        assert_eq!(errors, vec![("url".into(), Rule::Scheme("ftp".into()))]);

        let errors = rules(Route::new("/relative/path"));
        assert!(matches!(errors[0].1, Rule::InvalidUrl(_)));

        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LEN));
        let errors = rules(Route::new(long));
        assert!(matches!(errors[0].1, Rule::TooLong { max: MAX_URL_LEN, .. }));
    }

    #[test]
    fn test_url_at_length_limit_passes() {
        let base = "https://example.com/";
        let url = format!("{base}{}", "a".repeat(MAX_URL_LEN - base.len()));
        assert_eq!(url.len(), MAX_URL_LEN);
        assert!(validate(Route::new(url), 0).is_ok());
    }

    #[test]
    fn test_lastmod_and_changefreq() {
        let route = Route::new("https://example.com/")
            .with_lastmod("2025-01-01T10:00:00+01:00")
            .with_changefreq(ChangeFrequency::Daily);
        assert!(validate(route, 0).is_ok());

        let route = Route::new("https://example.com/")
            .with_lastmod("01/02/2025")
            .with_changefreq(ChangeFrequency::from("fortnightly"));
        let errors = rules(route);
        assert_eq!(
            errors,
            vec![
                ("lastmod".into(), Rule::InvalidDate("01/02/2025".into())),
                (
                    "changefreq".into(),
                    Rule::InvalidChangefreq("fortnightly".into())
                ),
            ]
        );
    }

    #[test]
    fn test_collects_all_violations() {
        let route = Route::new("https://example.com/a#b")
            .with_priority(-1.0)
            .with_lastmod("soon")
            .with_alternate("", "/de/a");
        let errors = validate(route, 7).unwrap_err();

        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| e.index == 7 && e.url == "https://example.com/a#b"));
    }

    #[test]
    fn test_video_missing_both_locations_is_one_error() {
        let video = Video::new("Title", "Description", "https://example.com/t.jpg");
        let errors = rules(Route::new("https://example.com/").with_video(video));

        assert_eq!(
            errors,
            vec![(
                "videos[0].content_loc|player_loc".into(),
                Rule::MissingVideoLocation
            )]
        );
    }

    #[test]
    fn test_video_player_loc_alone_is_enough() {
        let video = Video {
            player_loc: Some("https://example.com/player".into()),
            ..Video::new("Title", "Description", "https://example.com/t.jpg")
        };
        assert!(validate(Route::new("https://example.com/").with_video(video), 0).is_ok());
    }

    #[test]
    fn test_video_bounds() {
        let video = Video {
            title: "t".repeat(MAX_VIDEO_TITLE_LEN + 1),
            description: String::new(),
            thumbnail_loc: String::new(),
            duration: Some(0),
            rating: Some(5.5),
            tags: vec!["tag".into(); MAX_VIDEO_TAGS + 1],
            ..ok_video()
        };
        let errors = rules(Route::new("https://example.com/").with_video(video));
        let fields: Vec<_> = errors.iter().map(|(f, _)| f.as_str()).collect();

        assert_eq!(
            fields,
            vec![
                "videos[0].title",
                "videos[0].description",
                "videos[0].thumbnail_loc",
                "videos[0].duration",
                "videos[0].rating",
                "videos[0].tags",
            ]
        );
        assert_eq!(errors[3].1, Rule::DurationRange(0));
    }

    #[test]
    fn test_video_duration_edges() {
        for (duration, ok) in [(1, true), (28_800, true), (28_801, false)] {
            let video = Video {
                duration: Some(duration),
                ..ok_video()
            };
            let result = validate(Route::new("https://example.com/").with_video(video), 0);
            assert_eq!(result.is_ok(), ok, "duration {duration}");
        }
    }

    #[test]
    fn test_video_text_and_tag_limits_inclusive() {
        let video = Video {
            title: "t".repeat(MAX_VIDEO_TITLE_LEN),
            description: "d".repeat(MAX_VIDEO_DESCRIPTION_LEN),
            tags: vec!["tag".into(); MAX_VIDEO_TAGS],
            ..ok_video()
        };
        assert!(validate(Route::new("https://example.com/").with_video(video), 0).is_ok());

        let video = Video {
            description: "d".repeat(MAX_VIDEO_DESCRIPTION_LEN + 1),
            ..ok_video()
        };
        assert_eq!(
            rules(Route::new("https://example.com/").with_video(video)),
            vec![(
                "videos[0].description".into(),
                Rule::TooLong {
                    len: MAX_VIDEO_DESCRIPTION_LEN + 1,
                    max: MAX_VIDEO_DESCRIPTION_LEN
                }
            )]
        );
    }

    #[test]
    fn test_video_rating_edges() {
        for (rating, ok) in [(0.0, true), (5.0, true), (-0.1, false), (5.01, false)] {
            let video = Video {
                rating: Some(rating),
                ..ok_video()
            };
            let result = validate(Route::new("https://example.com/").with_video(video), 0);
            assert_eq!(result.is_ok(), ok, "rating {rating}");
        }
    }

    #[test]
    fn test_image_count_limit_inclusive() {
        let mut route = Route::new("https://example.com/");
        route.images = vec![Image::new("https://example.com/a.png"); MAX_IMAGES];
        assert!(validate(route, 0).is_ok());
    }

    #[test]
    fn test_news_title_length_edges() {
        let news = News {
            title: "n".repeat(MAX_NEWS_TITLE_LEN),
            ..ok_news()
        };
        assert!(validate(Route::new("https://example.com/").with_news(news), 0).is_ok());

        let news = News {
            title: "n".repeat(MAX_NEWS_TITLE_LEN + 1),
            ..ok_news()
        };
        assert_eq!(
            rules(Route::new("https://example.com/").with_news(news)),
            vec![(
                "news.title".into(),
                Rule::TooLong {
                    len: MAX_NEWS_TITLE_LEN + 1,
                    max: MAX_NEWS_TITLE_LEN
                }
            )]
        );
    }

    #[test]
    fn test_images() {
        let route = Route::new("https://example.com/")
            .with_image(Image::new("https://example.com/a.png"))
            .with_image(Image::new("/relative.png"))
            .with_image(Image::new(""));
        assert_eq!(
            rules(route),
            vec![
                ("images[1].loc".into(), Rule::NotAbsolute),
                ("images[2].loc".into(), Rule::Required),
            ]
        );

        let mut route = Route::new("https://example.com/");
        route.images = vec![Image::new("https://example.com/a.png"); MAX_IMAGES + 1];
        assert_eq!(
            rules(route),
            vec![(
                "images".into(),
                Rule::TooMany {
                    count: MAX_IMAGES + 1,
                    max: MAX_IMAGES
                }
            )]
        );
    }

    #[test]
    fn test_one_bad_image_rejects_whole_route() {
        let route = Route::new("https://example.com/")
            .with_image(Image::new("https://example.com/good.png"))
            .with_image(Image::new("not a url"));
        assert!(validate(route, 0).is_err());
    }

    #[test]
    fn test_news() {
        assert!(validate(Route::new("https://example.com/").with_news(ok_news()), 0).is_ok());

        let news = News {
            publication: Publication::default(),
            publication_date: String::new(),
            title: String::new(),
            stock_tickers: Some("NASDAQ:A, NASDAQ:B, NASDAQ:C, NASDAQ:D, NASDAQ:E, NASDAQ:F".into()),
            keywords: None,
        };
        let errors = rules(Route::new("https://example.com/").with_news(news));
        let fields: Vec<_> = errors.iter().map(|(f, _)| f.as_str()).collect();

        assert_eq!(
            fields,
            vec![
                "news.publication.name",
                "news.publication.language",
                "news.publication_date",
                "news.title",
                "news.stock_tickers",
            ]
        );
    }

    #[test]
    fn test_news_five_tickers_ok() {
        let news = News {
            stock_tickers: Some("A,B,C,D,E".into()),
            ..ok_news()
        };
        assert!(validate(Route::new("https://example.com/").with_news(news), 0).is_ok());
    }

    #[test]
    fn test_alternates() {
        let route = Route::new("https://example.com/")
            .with_alternate("x-default", "https://example.com/")
            .with_alternate("de", "https://example.com/de/");
        assert!(validate(route, 0).is_ok());

        let route = Route::new("https://example.com/").with_alternate(" ", "de/");
        assert_eq!(
            rules(route),
            vec![
                ("alternates[0].hreflang".into(), Rule::Required),
                ("alternates[0].href".into(), Rule::NotAbsolute),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = validate(Route::new("https://example.com/").with_priority(2.0), 3)
            .unwrap_err()
            .remove(0)
            .in_sitemap(Some("blog"));
        assert_eq!(
            err.to_string(),
            "[blog] route #3 `https://example.com/`: priority 2 is outside 0.0..=1.0"
        );
    }
}
