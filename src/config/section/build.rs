//! `[build]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory, relative to the project root.
    pub output: PathBuf,
    /// Base sitemap filename (default "sitemap.xml").
    pub filename: Option<String>,
    /// Add `Sitemap:` lines to `robots.txt` in the output directory.
    pub robots_txt: bool,
    /// Emit XML without indentation.
    pub minify: bool,
    /// XSL stylesheet href for browser display.
    pub stylesheet: Option<String>,
    /// URLs per file (at most 50000).
    pub max_urls: Option<usize>,
    /// Bytes per file (at most 52428800).
    pub max_bytes: Option<usize>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
            filename: None,
            robots_txt: false,
            minify: false,
            stylesheet: None,
            max_urls: None,
            max_bytes: None,
        }
    }
}
