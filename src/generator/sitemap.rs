//! Urlset rendering.
//!
//! # Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <image:image>
//!       <image:loc>https://example.com/cover.png</image:loc>
//!     </image:image>
//!   </url>
//! </urlset>
//! ```
//!
//! Extension namespaces are declared only when some route in the document
//! uses them.

use super::index::SitemapIndexEntry;
use super::xml::{XmlBuf, XmlStyle};
use crate::route::{Access, Image, News, ValidatedRoute, Video};
use crate::utils::format_decimal;
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";
pub const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";
pub const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

// ============================================================================
// SitemapSerializer
// ============================================================================

/// Replaces the default renderer.
///
/// The returned string is written verbatim; nothing checks that it is valid
/// XML. Plain closures of type `Fn(&[ValidatedRoute]) -> Result<String>`
/// implement this trait directly; use [`serializer_fn`] for closures that
/// need to await.
#[async_trait]
pub trait SitemapSerializer: Send + Sync {
    /// Render one sitemap file.
    async fn serialize(&self, routes: &[ValidatedRoute]) -> Result<String>;

    /// Render the index document. `Ok(None)` falls back to the default
    /// renderer.
    async fn serialize_index(&self, _entries: &[SitemapIndexEntry]) -> Result<Option<String>> {
        Ok(None)
    }
}

#[async_trait]
impl<F> SitemapSerializer for F
where
    F: Fn(&[ValidatedRoute]) -> Result<String> + Send + Sync,
{
    async fn serialize(&self, routes: &[ValidatedRoute]) -> Result<String> {
        self(routes)
    }
}

pub struct FnSerializer<F>(F);

/// Use an async closure as a [`SitemapSerializer`].
///
/// The closure receives its own copy of the chunk's routes.
///
/// ```ignore
/// let serializer = serializer_fn(|routes| async move {
///     templates.render("sitemap.xml", &routes).await
/// });
/// ```
pub fn serializer_fn<F, Fut>(f: F) -> FnSerializer<F>
where
    F: Fn(Vec<ValidatedRoute>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String>> + Send,
{
    FnSerializer(f)
}

#[async_trait]
impl<F, Fut> SitemapSerializer for FnSerializer<F>
where
    F: Fn(Vec<ValidatedRoute>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<String>> + Send,
{
    async fn serialize(&self, routes: &[ValidatedRoute]) -> Result<String> {
        (self.0)(routes.to_vec()).await
    }
}

// ============================================================================
// Default renderer
// ============================================================================

/// Extension namespaces used by a set of routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Namespaces {
    pub image: bool,
    pub video: bool,
    pub news: bool,
    pub xhtml: bool,
}

impl Namespaces {
    pub const ALL: Self = Self {
        image: true,
        video: true,
        news: true,
        xhtml: true,
    };

    pub fn of(routes: &[ValidatedRoute]) -> Self {
        routes.iter().fold(Self::default(), |ns, route| Self {
            image: ns.image || !route.images.is_empty(),
            video: ns.video || !route.videos.is_empty(),
            news: ns.news || route.news.is_some(),
            xhtml: ns.xhtml || !route.alternates.is_empty(),
        })
    }

    fn attrs(self) -> Vec<(&'static str, &'static str)> {
        let mut attrs = vec![("xmlns", SITEMAP_NS)];
        if self.image {
            attrs.push(("xmlns:image", IMAGE_NS));
        }
        if self.video {
            attrs.push(("xmlns:video", VIDEO_NS));
        }
        if self.news {
            attrs.push(("xmlns:news", NEWS_NS));
        }
        if self.xhtml {
            attrs.push(("xmlns:xhtml", XHTML_NS));
        }
        attrs
    }
}

/// Render a complete `<urlset>` document.
pub fn render_urlset(routes: &[ValidatedRoute], style: &XmlStyle<'_>) -> String {
    let mut xml = XmlBuf::with_capacity(512 + routes.len() * 128, style.minify);
    xml.prolog(style);
    xml.open("urlset", &Namespaces::of(routes).attrs());
    for route in routes {
        write_url(&mut xml, route);
    }
    xml.close("urlset");
    xml.finish()
}

/// Serialized size of one `<url>` entry, as it would appear in a document.
pub fn entry_len(route: &ValidatedRoute, style: &XmlStyle<'_>) -> usize {
    let mut xml = XmlBuf::at_depth(1, style.minify);
    write_url(&mut xml, route);
    xml.len()
}

/// Size of a document with no entries and every namespace declared.
///
/// Upper bound for the fixed part of any urlset, used as the splitter's
/// starting budget.
pub fn urlset_overhead(style: &XmlStyle<'_>) -> usize {
    let mut xml = XmlBuf::new(style.minify);
    xml.prolog(style);
    xml.open("urlset", &Namespaces::ALL.attrs());
    xml.close("urlset");
    xml.len()
}

fn write_url(xml: &mut XmlBuf, route: &ValidatedRoute) {
    xml.open("url", &[]);
    xml.leaf("loc", &route.url);
    xml.leaf_opt("lastmod", route.last_modified.as_deref());
    if let Some(freq) = &route.change_frequency {
        xml.leaf("changefreq", freq.as_str());
    }
    if let Some(priority) = route.priority {
        xml.leaf("priority", &format_decimal(priority));
    }
    for alt in &route.alternates {
        xml.empty(
            "xhtml:link",
            &[
                ("rel", "alternate"),
                ("hreflang", alt.hreflang.as_str()),
                ("href", alt.href.as_str()),
            ],
        );
    }
    for image in &route.images {
        write_image(xml, image);
    }
    for video in &route.videos {
        write_video(xml, video);
    }
    if let Some(news) = &route.news {
        write_news(xml, news);
    }
    xml.close("url");
}

fn write_image(xml: &mut XmlBuf, image: &Image) {
    xml.open("image:image", &[]);
    xml.leaf("image:loc", &image.loc);
    xml.leaf_opt("image:caption", image.caption.as_deref());
    xml.leaf_opt("image:geo_location", image.geo_location.as_deref());
    xml.leaf_opt("image:title", image.title.as_deref());
    xml.leaf_opt("image:license", image.license.as_deref());
    xml.close("image:image");
}

fn write_video(xml: &mut XmlBuf, video: &Video) {
    xml.open("video:video", &[]);
    xml.leaf("video:thumbnail_loc", &video.thumbnail_loc);
    xml.leaf("video:title", &video.title);
    xml.leaf("video:description", &video.description);
    xml.leaf_opt("video:content_loc", video.content_loc.as_deref());
    xml.leaf_opt("video:player_loc", video.player_loc.as_deref());
    if let Some(duration) = video.duration {
        xml.leaf("video:duration", &duration.to_string());
    }
    xml.leaf_opt("video:expiration_date", video.expiration_date.as_deref());
    if let Some(rating) = video.rating {
        xml.leaf("video:rating", &format_decimal(rating));
    }
    if let Some(count) = video.view_count {
        xml.leaf("video:view_count", &count.to_string());
    }
    xml.leaf_opt("video:publication_date", video.publication_date.as_deref());
    if let Some(flag) = video.family_friendly {
        xml.leaf("video:family_friendly", yes_no(flag));
    }
    if let Some(access) = &video.restriction {
        write_access(xml, "video:restriction", access);
    }
    if let Some(access) = &video.platform {
        write_access(xml, "video:platform", access);
    }
    if let Some(flag) = video.requires_subscription {
        xml.leaf("video:requires_subscription", yes_no(flag));
    }
    if let Some(uploader) = &video.uploader {
        match &uploader.info_url {
            Some(info) => {
                xml.leaf_with("video:uploader", &[("info", info.as_str())], &uploader.name)
            }
            None => xml.leaf("video:uploader", &uploader.name),
        }
    }
    if let Some(flag) = video.live {
        xml.leaf("video:live", yes_no(flag));
    }
    for tag in &video.tags {
        xml.leaf("video:tag", tag);
    }
    xml.close("video:video");
}

fn write_access(xml: &mut XmlBuf, tag: &str, access: &Access) {
    xml.leaf_with(
        tag,
        &[("relationship", access.relationship.as_str())],
        &access.values.join(" "),
    );
}

fn write_news(xml: &mut XmlBuf, news: &News) {
    xml.open("news:news", &[]);
    xml.open("news:publication", &[]);
    xml.leaf("news:name", &news.publication.name);
    xml.leaf("news:language", &news.publication.language);
    xml.close("news:publication");
    xml.leaf("news:publication_date", &news.publication_date);
    xml.leaf("news:title", &news.title);
    xml.leaf_opt("news:keywords", news.keywords.as_deref());
    xml.leaf_opt("news:stock_tickers", news.stock_tickers.as_deref());
    xml.close("news:news");
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
