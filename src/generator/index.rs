//! Sitemap index rendering.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <sitemap>
//!     <loc>https://example.com/sitemap-pages.xml</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </sitemap>
//! </sitemapindex>
//! ```

use super::sitemap::SITEMAP_NS;
use super::xml::{XmlBuf, XmlStyle};
use serde::Serialize;

/// One `<sitemap>` entry of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapIndexEntry {
    pub loc: String,
    #[serde(rename = "lastmod", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

pub fn render_index(entries: &[SitemapIndexEntry], style: &XmlStyle<'_>) -> String {
    let mut xml = XmlBuf::new(style.minify);
    xml.prolog(style);
    xml.open("sitemapindex", &[("xmlns", SITEMAP_NS)]);
    for entry in entries {
        xml.open("sitemap", &[]);
        xml.leaf("loc", &entry.loc);
        xml.leaf_opt("lastmod", entry.last_modified.as_deref());
        xml.close("sitemap");
    }
    xml.close("sitemapindex");
    xml.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(loc: &str, lastmod: Option<&str>) -> SitemapIndexEntry {
        SitemapIndexEntry {
            loc: loc.to_string(),
            last_modified: lastmod.map(str::to_string),
        }
    }

    #[test]
    fn test_index_document() {
        let xml = render_index(
            &[
                entry("https://example.com/sitemap-pages.xml", Some("2025-01-01")),
                entry("https://example.com/sitemap-blog.xml", None),
            ],
            &XmlStyle::default(),
        );

        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>https://example.com/sitemap-pages.xml</loc>
    <lastmod>2025-01-01</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://example.com/sitemap-blog.xml</loc>
  </sitemap>
</sitemapindex>
"#
        );
    }

    #[test]
    fn test_index_escapes_loc() {
        let xml = render_index(
            &[entry("https://example.com/a&b.xml", None)],
            &XmlStyle::default(),
        );
        assert!(xml.contains("<loc>https://example.com/a&amp;b.xml</loc>"));
    }

    #[test]
    fn test_index_minified_with_stylesheet() {
        let style = XmlStyle {
            minify: true,
            stylesheet: Some("/index.xsl"),
        };
        let xml = render_index(&[entry("https://example.com/s-0.xml", None)], &style);
        assert!(xml.starts_with(
            r#"<?xml version="1.0" encoding="UTF-8"?><?xml-stylesheet type="text/xsl" href="/index.xsl"?><sitemapindex"#
        ));
        assert!(!xml.contains('\n'));
    }
}
