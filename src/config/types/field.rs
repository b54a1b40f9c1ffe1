//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a `sitemap.toml` field, e.g. `site.hostname`.
///
/// Diagnostics point at fields through these paths so the same message works
/// whether the option came from the config file, a CLI flag or code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Field paths of every option the resolver checks.
pub mod fields {
    use super::FieldPath;

    pub const HOSTNAME: FieldPath = FieldPath::new("site.hostname");
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const FILENAME: FieldPath = FieldPath::new("build.filename");
    pub const ROBOTS_TXT: FieldPath = FieldPath::new("build.robots_txt");
    pub const STYLESHEET: FieldPath = FieldPath::new("build.stylesheet");
    pub const MAX_URLS: FieldPath = FieldPath::new("build.max_urls");
    pub const MAX_BYTES: FieldPath = FieldPath::new("build.max_bytes");
    pub const CHANGEFREQ: FieldPath = FieldPath::new("defaults.changefreq");
    pub const PRIORITY: FieldPath = FieldPath::new("defaults.priority");
    pub const LASTMOD: FieldPath = FieldPath::new("defaults.lastmod");
    pub const EXCLUDE: FieldPath = FieldPath::new("exclude");
    pub const ROUTES: FieldPath = FieldPath::new("routes");
}
