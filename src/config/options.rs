//! Options resolution.
//!
//! [`SitemapOptions`] is what a user writes (every field optional);
//! [`ResolvedConfig`] is what the pipeline runs on. Resolution fills in
//! defaults and checks every cross-field rule, reporting all problems at once.

use super::types::{ConfigDiagnostics, ConfigError, fields};
use crate::generator::{SitemapSerializer, SplitLimits};
use crate::route::{
    ChangeFrequency, ExcludePattern, ExcludeSpec, Route, RouteTransform, filter::is_excluded,
};
use crate::utils::is_w3c_datetime;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

pub const DEFAULT_FILENAME: &str = "sitemap.xml";

// ============================================================================
// SitemapOptions
// ============================================================================

/// User-supplied configuration. Omitted fields take their defaults.
#[derive(Clone, Default)]
pub struct SitemapOptions {
    /// Site origin used to qualify relative route URLs, e.g.
    /// `https://example.com`. Required for robots.txt generation.
    pub hostname: Option<String>,
    /// Where generated files go. Falls back to the host's output directory.
    pub output_dir: Option<PathBuf>,
    /// Defaults to `sitemap.xml`.
    pub base_filename: Option<String>,
    pub changefreq: Option<ChangeFrequency>,
    pub priority: Option<f64>,
    pub lastmod: Option<String>,
    pub exclude: Vec<ExcludeSpec>,
    pub transform: Option<Arc<dyn RouteTransform>>,
    pub serializer: Option<Arc<dyn SitemapSerializer>>,
    pub robots_txt: bool,
    /// Emit XML without indentation.
    pub minify: bool,
    /// `href` of an XSL stylesheet processing instruction.
    pub stylesheet: Option<String>,
    pub max_urls: Option<usize>,
    pub max_bytes: Option<usize>,
}

impl SitemapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn base_filename(mut self, filename: impl Into<String>) -> Self {
        self.base_filename = Some(filename.into());
        self
    }

    pub fn exclude(mut self, spec: ExcludeSpec) -> Self {
        self.exclude.push(spec);
        self
    }

    pub fn transform(mut self, transform: impl RouteTransform + 'static) -> Self {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn serializer(mut self, serializer: impl SitemapSerializer + 'static) -> Self {
        self.serializer = Some(Arc::new(serializer));
        self
    }

    pub fn robots_txt(mut self, enable: bool) -> Self {
        self.robots_txt = enable;
        self
    }

    /// Resolve against the host's output directory.
    pub fn resolve(self, host_output_dir: &Path) -> Result<ResolvedConfig, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let hostname = self
            .hostname
            .as_deref()
            .and_then(|raw| parse_hostname(raw, &mut diag));

        if self.robots_txt && self.hostname.is_none() {
            diag.error_with_hint(
                fields::ROBOTS_TXT,
                "robots.txt generation requires a hostname",
                "set `hostname` under [site] or pass --hostname",
            );
        }

        let base_filename = self
            .base_filename
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        check_filename(&base_filename, &mut diag);

        if let Some(priority) = self.priority
            && !(0.0..=1.0).contains(&priority)
        {
            diag.error(
                fields::PRIORITY,
                format!("default priority {priority} is outside 0.0..=1.0"),
            );
        }
        if let Some(lastmod) = &self.lastmod
            && !is_w3c_datetime(lastmod)
        {
            diag.error_with_hint(
                fields::LASTMOD,
                format!("default lastmod `{lastmod}` is not a W3C datetime"),
                "use YYYY, YYYY-MM, YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ",
            );
        }
        if let Some(freq) = &self.changefreq
            && !freq.is_known()
        {
            diag.error(
                fields::CHANGEFREQ,
                format!(
                    "default changefreq `{freq}` is not one of always, hourly, daily, weekly, monthly, yearly, never"
                ),
            );
        }

        let exclude: Vec<ExcludePattern> = self
            .exclude
            .iter()
            .filter_map(|spec| match spec.compile() {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    diag.error(
                        fields::EXCLUDE,
                        format!("invalid pattern `{}`: {e}", spec.pattern()),
                    );
                    None
                }
            })
            .collect();

        let limits = SplitLimits::default();
        let max_urls = check_limit(
            self.max_urls,
            limits.max_urls,
            fields::MAX_URLS,
            "URLs",
            &mut diag,
        );
        let max_bytes = check_limit(
            self.max_bytes,
            limits.max_bytes,
            fields::MAX_BYTES,
            "bytes",
            &mut diag,
        );

        if let Some(href) = &self.stylesheet
            && href.trim().is_empty()
        {
            diag.error(fields::STYLESHEET, "stylesheet href is empty");
        }

        diag.into_result()?;

        Ok(ResolvedConfig {
            hostname,
            output_dir: self
                .output_dir
                .unwrap_or_else(|| host_output_dir.to_path_buf()),
            base_filename,
            default_change_frequency: self.changefreq,
            default_priority: self.priority,
            default_last_modified: self.lastmod,
            exclude,
            transform: self.transform,
            serializer: self.serializer,
            generate_robots_txt: self.robots_txt,
            minify: self.minify,
            stylesheet: self.stylesheet,
            limits: SplitLimits {
                max_urls,
                max_bytes,
            },
        })
    }
}

fn parse_hostname(raw: &str, diag: &mut ConfigDiagnostics) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Some(url),
        Ok(url) => {
            diag.error(
                fields::HOSTNAME,
                format!("`{raw}` has scheme `{}`, expected http or https", url.scheme()),
            );
            None
        }
        Err(e) => {
            diag.error_with_hint(
                fields::HOSTNAME,
                format!("`{raw}` is not a valid URL: {e}"),
                "include the scheme, e.g. https://example.com",
            );
            None
        }
    }
}

fn check_filename(name: &str, diag: &mut ConfigDiagnostics) {
    let stem = name.strip_suffix(".xml").unwrap_or_default();
    if stem.is_empty() || name.contains(['/', '\\']) {
        diag.error_with_hint(
            fields::FILENAME,
            format!("`{name}` is not a valid sitemap filename"),
            "use a bare file name ending in .xml, e.g. sitemap.xml",
        );
    }
}

/// User limit, capped at the protocol maximum. Zero is rejected.
fn check_limit(
    value: Option<usize>,
    protocol_max: usize,
    field: super::types::FieldPath,
    unit: &str,
    diag: &mut ConfigDiagnostics,
) -> usize {
    match value {
        None => protocol_max,
        Some(0) => {
            diag.error(field, format!("must allow at least one {unit}"));
            protocol_max
        }
        Some(v) => v.min(protocol_max),
    }
}

// ============================================================================
// ResolvedConfig
// ============================================================================

/// Fully resolved, immutable configuration. Only built by
/// [`SitemapOptions::resolve`].
#[derive(Clone)]
pub struct ResolvedConfig {
    pub(crate) hostname: Option<Url>,
    pub(crate) output_dir: PathBuf,
    pub(crate) base_filename: String,
    pub(crate) default_change_frequency: Option<ChangeFrequency>,
    pub(crate) default_priority: Option<f64>,
    pub(crate) default_last_modified: Option<String>,
    pub(crate) exclude: Vec<ExcludePattern>,
    pub(crate) transform: Option<Arc<dyn RouteTransform>>,
    pub(crate) serializer: Option<Arc<dyn SitemapSerializer>>,
    pub(crate) generate_robots_txt: bool,
    pub(crate) minify: bool,
    pub(crate) stylesheet: Option<String>,
    pub(crate) limits: SplitLimits,
}

impl ResolvedConfig {
    pub fn hostname(&self) -> Option<&Url> {
        self.hostname.as_ref()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn base_filename(&self) -> &str {
        &self.base_filename
    }

    /// Base filename without `.xml`.
    pub fn file_stem(&self) -> &str {
        self.base_filename
            .strip_suffix(".xml")
            .unwrap_or(&self.base_filename)
    }

    pub fn generate_robots_txt(&self) -> bool {
        self.generate_robots_txt
    }

    pub fn limits(&self) -> SplitLimits {
        self.limits
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    pub fn minify(&self) -> bool {
        self.minify
    }

    /// Whether the exclusion filter drops this (resolved) route.
    pub fn is_excluded(&self, route: &Route) -> bool {
        is_excluded(&self.exclude, &route.url)
    }

    /// Absolute URL of a generated file, if a hostname is configured.
    pub fn file_url(&self, filename: &str) -> Option<String> {
        self.hostname
            .as_ref()
            .map(|host| crate::route::resolve_url(filename, Some(host)))
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("hostname", &self.hostname.as_ref().map(Url::as_str))
            .field("output_dir", &self.output_dir)
            .field("base_filename", &self.base_filename)
            .field("default_change_frequency", &self.default_change_frequency)
            .field("default_priority", &self.default_priority)
            .field("default_last_modified", &self.default_last_modified)
            .field("exclude", &self.exclude.len())
            .field("transform", &self.transform.is_some())
            .field("serializer", &self.serializer.is_some())
            .field("generate_robots_txt", &self.generate_robots_txt)
            .field("minify", &self.minify)
            .field("stylesheet", &self.stylesheet)
            .field("limits", &self.limits)
            .finish()
    }
}
