//! Sitemap generation pipeline.
//!
//! ```text
//! sources ──(concurrent)──► normalize ──► exclude ──► validate ──► split ──► render
//!                          per set, in order           │                      │
//!                                                      ▼                      ▼
//!                                            BuildOutput::errors   files, index, robots.txt
//! ```
//!
//! [`generate`] performs no file I/O: it returns every document as a string
//! and leaves writing to the caller ([`BuildOutput::write_to`]).

pub mod index;
pub mod robots;
pub mod sitemap;
pub mod split;
pub mod xml;

pub use index::{SitemapIndexEntry, render_index};
pub use robots::compose_robots;
pub use sitemap::{FnSerializer, SitemapSerializer, render_urlset, serializer_fn};
pub use split::{Chunk, FileNaming, SplitLimits};
pub use xml::XmlStyle;

use crate::config::types::{ConfigDiagnostics, fields};
use crate::config::ResolvedConfig;
use crate::debug;
use crate::error::{Callback, SitemapError};
use crate::route::{
    Route, RouteSources, ValidatedRoute, ValidationError, normalize_routes, validate,
};
use crate::utils::date;
use anyhow::Context;
use futures::future::try_join_all;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Sets at least this large are filtered and validated on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 60_000;

/// Maximum entries in one sitemap index (sitemaps.org).
pub const MAX_INDEX_ENTRIES: usize = 50_000;

/// One generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub filename: String,
    /// Named sitemap this file belongs to. `None` for the default set and
    /// the index.
    pub sitemap: Option<String>,
    /// `<url>` entries (or `<sitemap>` entries for the index).
    pub url_count: usize,
    pub content: String,
}

impl OutputFile {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Everything one build produced.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// Urlset files in output order.
    pub files: Vec<OutputFile>,
    pub index: Option<OutputFile>,
    /// New robots.txt content, when enabled.
    pub robots_txt: Option<String>,
    /// Routes rejected by validation.
    pub errors: Vec<ValidationError>,
    /// Routes dropped by exclude patterns.
    pub excluded: usize,
}

impl BuildOutput {
    /// Urlset files followed by the index.
    pub fn documents(&self) -> impl Iterator<Item = &OutputFile> {
        self.files.iter().chain(self.index.iter())
    }

    /// Total `<url>` entries across all urlset files.
    pub fn url_count(&self) -> usize {
        self.files.iter().map(|f| f.url_count).sum()
    }

    /// Write every document (and robots.txt) into `dir`.
    ///
    /// Returns the written paths in output order.
    pub async fn write_to(&self, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let mut written = Vec::new();
        for file in self.documents() {
            let path = dir.join(&file.filename);
            tokio::fs::write(&path, file.bytes())
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
        }
        if let Some(robots) = &self.robots_txt {
            let path = dir.join("robots.txt");
            tokio::fs::write(&path, robots)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Run the whole pipeline.
///
/// `existing_robots` is the current robots.txt content, if any; it is only
/// read when robots.txt generation is enabled.
pub async fn generate(
    config: &ResolvedConfig,
    sources: &RouteSources,
    existing_robots: Option<&str>,
) -> Result<BuildOutput, SitemapError> {
    check_sitemap_names(sources)?;

    let collected = try_join_all(sources.iter().map(|(name, source)| async move {
        source
            .routes()
            .await
            .map(|routes| (name, routes))
            .map_err(|e| SitemapError::callback(name, Callback::Source, e))
    }))
    .await?;

    let mut output = BuildOutput::default();
    let mut sets = Vec::with_capacity(collected.len());
    for (name, raw) in collected {
        let normalized = normalize_routes(config, name, raw).await?;
        let screened = screen(config, name, normalized);
        debug!(
            "sitemap";
            "{}: {} valid, {} excluded, {} rejected",
            name.unwrap_or("default"),
            screened.valid.len(),
            screened.excluded,
            screened.rejected
        );
        output.excluded += screened.excluded;
        output.errors.extend(screened.errors);
        sets.push((name, screened.valid));
    }

    let style = XmlStyle {
        minify: config.minify(),
        stylesheet: config.stylesheet(),
    };
    let overhead = sitemap::urlset_overhead(&style);
    let chunked: Vec<(Option<&str>, Vec<Chunk>)> = sets
        .into_iter()
        .map(|(name, routes)| {
            let chunks = split::split(routes, config.limits(), overhead, |route| {
                sitemap::entry_len(route, &style)
            });
            (name, chunks)
        })
        .collect();

    let counts: Vec<_> = chunked.iter().map(|(name, c)| (*name, c.len())).collect();
    let naming = FileNaming::new(config.base_filename(), &counts);
    check_file_names(&naming, &counts)?;

    let mut entries = Vec::new();
    for (name, chunks) in &chunked {
        for chunk in chunks {
            let filename = naming.chunk(*name, chunk.index, chunks.len());
            let content = render_chunk(config, *name, &filename, &chunk.routes, &style).await?;
            if naming.needs_index() {
                entries.push(SitemapIndexEntry {
                    loc: index_loc(config, &filename, chunk.routes.first()),
                    last_modified: date::latest(
                        chunk.routes.iter().filter_map(|r| r.last_modified.as_deref()),
                    )
                    .map(str::to_string),
                });
            }
            output.files.push(OutputFile {
                filename,
                sitemap: name.map(str::to_string),
                url_count: chunk.routes.len(),
                content,
            });
        }
    }

    if let Some(filename) = naming.index() {
        let content = render_index_file(config, &filename, &entries, &style).await?;
        output.index = Some(OutputFile {
            filename,
            sitemap: None,
            url_count: entries.len(),
            content,
        });
    }

    if config.generate_robots_txt() {
        let urls: Vec<String> = output
            .documents()
            .filter_map(|file| config.file_url(&file.filename))
            .collect();
        output.robots_txt = Some(compose_robots(existing_robots, &urls));
    }

    Ok(output)
}

// ============================================================================
// Screening (exclude + validate)
// ============================================================================

struct Screened {
    valid: Vec<ValidatedRoute>,
    errors: Vec<ValidationError>,
    excluded: usize,
    rejected: usize,
}

enum Outcome {
    Excluded,
    Valid(ValidatedRoute),
    Invalid(Vec<ValidationError>),
}

fn screen(config: &ResolvedConfig, name: Option<&str>, routes: Vec<(usize, Route)>) -> Screened {
    let check = |(index, route): (usize, Route)| {
        if config.is_excluded(&route) {
            return Outcome::Excluded;
        }
        match validate(route, index) {
            Ok(valid) => Outcome::Valid(valid),
            Err(errors) => Outcome::Invalid(
                errors
                    .into_iter()
                    .map(|e| e.in_sitemap(name))
                    .collect(),
            ),
        }
    };

    // indexed collect keeps input order
    let outcomes: Vec<Outcome> = if routes.len() >= PARALLEL_THRESHOLD {
        routes.into_par_iter().map(check).collect()
    } else {
        routes.into_iter().map(check).collect()
    };

    let mut screened = Screened {
        valid: Vec::with_capacity(outcomes.len()),
        errors: Vec::new(),
        excluded: 0,
        rejected: 0,
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Excluded => screened.excluded += 1,
            Outcome::Valid(route) => screened.valid.push(route),
            Outcome::Invalid(errors) => {
                screened.rejected += 1;
                screened.errors.extend(errors);
            }
        }
    }
    screened
}

// ============================================================================
// Rendering
// ============================================================================

async fn render_chunk(
    config: &ResolvedConfig,
    name: Option<&str>,
    filename: &str,
    routes: &[ValidatedRoute],
    style: &XmlStyle<'_>,
) -> Result<String, SitemapError> {
    if routes.len() > SplitLimits::PROTOCOL_MAX_URLS {
        return Err(SitemapError::Serialization {
            file: filename.to_string(),
            message: format!(
                "{} URLs exceed the protocol limit of {}",
                routes.len(),
                SplitLimits::PROTOCOL_MAX_URLS
            ),
        });
    }
    match &config.serializer {
        Some(serializer) => serializer
            .serialize(routes)
            .await
            .map_err(|e| SitemapError::callback(name, Callback::Serializer, e)),
        None => Ok(render_urlset(routes, style)),
    }
}

async fn render_index_file(
    config: &ResolvedConfig,
    filename: &str,
    entries: &[SitemapIndexEntry],
    style: &XmlStyle<'_>,
) -> Result<String, SitemapError> {
    if entries.len() > MAX_INDEX_ENTRIES {
        return Err(SitemapError::Serialization {
            file: filename.to_string(),
            message: format!(
                "{} sitemaps exceed the index limit of {MAX_INDEX_ENTRIES}",
                entries.len()
            ),
        });
    }
    let custom = match &config.serializer {
        Some(serializer) => serializer
            .serialize_index(entries)
            .await
            .map_err(|e| SitemapError::callback(None, Callback::Serializer, e))?,
        None => None,
    };
    Ok(custom.unwrap_or_else(|| render_index(entries, style)))
}

/// Absolute location of a generated file for the index.
///
/// Uses the hostname when configured, otherwise the origin of the file's
/// first route, otherwise the bare filename.
fn index_loc(config: &ResolvedConfig, filename: &str, first: Option<&ValidatedRoute>) -> String {
    if let Some(url) = config.file_url(filename) {
        return url;
    }
    first
        .and_then(|route| Url::parse(&route.url).ok())
        .map(|url| format!("{}/{filename}", url.origin().ascii_serialization()))
        .unwrap_or_else(|| filename.to_string())
}

/// Sitemap names become part of file names.
fn check_sitemap_names(sources: &RouteSources) -> Result<(), SitemapError> {
    let mut diag = ConfigDiagnostics::new();
    if sources.is_empty() {
        diag.error_with_hint(
            fields::ROUTES,
            "no route sources configured",
            "add `routes = [...]` or named tables under [routes]",
        );
    }
    for name in sources.names().flatten() {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            diag.error_with_hint(
                fields::ROUTES,
                format!("sitemap name `{name}` cannot be used in a file name"),
                "use letters, digits, `-` and `_` only",
            );
        }
    }
    diag.into_result().map_err(SitemapError::from)
}

/// Every generated file needs its own name, also on case-insensitive
/// filesystems. Names such as `index`, `0` or `blog-0` can collide with the
/// generated ones.
fn check_file_names(
    naming: &FileNaming<'_>,
    counts: &[(Option<&str>, usize)],
) -> Result<(), SitemapError> {
    let mut diag = ConfigDiagnostics::new();
    let mut seen: HashMap<String, String> = HashMap::new();

    let filenames = counts
        .iter()
        .flat_map(|&(name, count)| (0..count).map(move |i| naming.chunk(name, i, count)))
        .chain(naming.index());
    for filename in filenames {
        if let Some(previous) = seen.insert(filename.to_ascii_lowercase(), filename.clone()) {
            let message = if previous == filename {
                format!("two generated files would be named `{filename}`")
            } else {
                format!("generated files `{previous}` and `{filename}` differ only in case")
            };
            diag.error_with_hint(
                fields::ROUTES,
                message,
                "rename the sitemap; `index` and names ending in `-<number>` are taken by chunk and index files",
            );
        }
    }
    diag.into_result().map_err(SitemapError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SitemapOptions;
    use crate::route::{ExcludeSpec, Image, from_fn, transform_fn};
    use async_trait::async_trait;

    fn config(options: SitemapOptions) -> ResolvedConfig {
        options.resolve(Path::new("dist")).unwrap()
    }

    fn host() -> SitemapOptions {
        SitemapOptions::new().hostname("https://example.com")
    }

    fn pages(paths: &[&str]) -> Vec<Route> {
        paths.iter().map(|p| Route::new(*p)).collect()
    }

    #[tokio::test]
    async fn test_single_set_uses_base_filename() {
        let sources = RouteSources::single(pages(&["/", "/about"]));
        let out = generate(&config(host()), &sources, None).await.unwrap();

        assert_eq!(out.files.len(), 1);
        assert_eq!(out.files[0].filename, "sitemap.xml");
        assert_eq!(out.files[0].url_count, 2);
        assert!(out.index.is_none());
        assert!(out.robots_txt.is_none());
        assert!(out.files[0].content.contains("<loc>https://example.com/about</loc>"));
    }

    #[tokio::test]
    async fn test_named_sets_produce_index() {
        let sources = RouteSources::new()
            .named("pages", pages(&["/", "/about"]))
            .named("blog", pages(&["/blog/a"]));
        let out = generate(&config(host()), &sources, None).await.unwrap();

        let names: Vec<_> = out.files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["sitemap-pages.xml", "sitemap-blog.xml"]);
        assert_eq!(out.files[1].sitemap.as_deref(), Some("blog"));

        let index = out.index.unwrap();
        assert_eq!(index.filename, "sitemap-index.xml");
        assert_eq!(index.url_count, 2);
        assert!(index.content.contains("<loc>https://example.com/sitemap-pages.xml</loc>"));
        assert!(index.content.contains("<loc>https://example.com/sitemap-blog.xml</loc>"));
    }

    #[tokio::test]
    async fn test_index_lastmod_is_latest_in_chunk() {
        let sources = RouteSources::new()
            .named(
                "pages",
                vec![
                    Route::new("/a").with_lastmod("2024-03-01"),
                    Route::new("/b").with_lastmod("2024-12-31T23:00:00-02:00"),
                    Route::new("/c").with_lastmod("2025-01-01"),
                ],
            )
            .named("blog", pages(&["/blog"]));
        let out = generate(&config(host()), &sources, None).await.unwrap();

        let index = out.index.unwrap().content;
        // 2024-12-31T23:00-02:00 is 2025-01-01T01:00Z, later than 2025-01-01
        assert!(index.contains("<lastmod>2024-12-31T23:00:00-02:00</lastmod>"));
        assert_eq!(index.matches("<lastmod>").count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_routes_reported_and_dropped() {
        let sources = RouteSources::new().named(
            "pages",
            vec![
                Route::new("/ok").with_priority(0.5),
                Route::new("/bad").with_priority(1.5),
                Route::new("/frag#section"),
            ],
        );
        let out = generate(&config(host()), &sources, None).await.unwrap();

        assert_eq!(out.url_count(), 1);
        assert_eq!(out.errors.len(), 2);
        assert_eq!(out.errors[0].index, 1);
        assert_eq!(out.errors[0].sitemap.as_deref(), Some("pages"));
        assert_eq!(out.errors[0].field, "priority");
        assert_eq!(out.errors[1].rule, crate::route::Rule::Fragment);
    }

    #[tokio::test]
    async fn test_excluded_routes_counted() {
        let options = host().exclude(ExcludeSpec::glob("/admin/*"));
        let sources = RouteSources::single(pages(&["/admin/dashboard", "/admin/users", "/about"]));
        let out = generate(&config(options), &sources, None).await.unwrap();

        assert_eq!(out.excluded, 2);
        assert_eq!(out.url_count(), 1);
        assert!(out.errors.is_empty());
    }

    #[tokio::test]
    async fn test_nested_image_error_drops_whole_route() {
        let sources = RouteSources::single(vec![
            Route::new("/gallery")
                .with_image(Image::new("https://example.com/ok.png"))
                .with_image(Image::new("relative.png")),
        ]);
        let out = generate(&config(host()), &sources, None).await.unwrap();

        assert_eq!(out.url_count(), 0);
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].field, "images[1].loc");
    }

    #[tokio::test]
    async fn test_robots_lists_every_file() {
        let sources = RouteSources::new()
            .named("pages", pages(&["/"]))
            .named("blog", pages(&["/blog"]));
        let options = host().robots_txt(true);
        let out = generate(&config(options), &sources, Some("User-agent: *\nAllow: /\n"))
            .await
            .unwrap();

        assert_eq!(
            out.robots_txt.unwrap(),
            "User-agent: *\nAllow: /\n\
             Sitemap: https://example.com/sitemap-pages.xml\n\
             Sitemap: https://example.com/sitemap-blog.xml\n\
             Sitemap: https://example.com/sitemap-index.xml\n"
        );
    }

    #[tokio::test]
    async fn test_source_failure_is_fatal() {
        let sources = RouteSources::new()
            .named("pages", pages(&["/"]))
            .named("shop", from_fn(|| Err(anyhow::anyhow!("inventory offline"))));
        let err = generate(&config(host()), &sources, None).await.unwrap_err();

        assert!(matches!(
            err,
            SitemapError::Transform {
                callback: Callback::Source,
                ref sitemap,
                ..
            } if sitemap.as_deref() == Some("shop")
        ));
    }

    #[tokio::test]
    async fn test_transform_applies_before_exclusion() {
        let options = host()
            .exclude(ExcludeSpec::glob("/hidden/*"))
            .transform(transform_fn(|mut route: Route| async move {
                route.url = route.url.replace("/draft/", "/hidden/");
                Ok::<_, anyhow::Error>(Some(route))
            }));
        let sources = RouteSources::single(pages(&["/draft/x", "/y"]));
        let out = generate(&config(options), &sources, None).await.unwrap();

        assert_eq!(out.excluded, 1);
        assert_eq!(out.url_count(), 1);
    }

    #[tokio::test]
    async fn test_custom_serializer_output_used_verbatim() {
        let options = host().serializer(|routes: &[ValidatedRoute]| -> anyhow::Result<String> {
            Ok(format!("{} routes", routes.len()))
        });
        let sources = RouteSources::single(pages(&["/", "/a", "/b"]));
        let out = generate(&config(options), &sources, None).await.unwrap();

        assert_eq!(out.files[0].content, "3 routes");
    }

    #[tokio::test]
    async fn test_serializer_failure_is_fatal() {
        let options = host().serializer(|_: &[ValidatedRoute]| -> anyhow::Result<String> {
            anyhow::bail!("template missing")
        });
        let sources = RouteSources::single(pages(&["/"]));
        let err = generate(&config(options), &sources, None).await.unwrap_err();

        assert!(matches!(
            err,
            SitemapError::Transform {
                callback: Callback::Serializer,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_small_max_urls_splits_and_indexes() {
        let options = SitemapOptions {
            max_urls: Some(2),
            ..host()
        };
        let sources = RouteSources::single(pages(&["/1", "/2", "/3", "/4", "/5"]));
        let out = generate(&config(options), &sources, None).await.unwrap();

        let names: Vec<_> = out.files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["sitemap-0.xml", "sitemap-1.xml", "sitemap-2.xml"]);
        assert_eq!(out.index.unwrap().url_count, 3);
    }

    #[tokio::test]
    async fn test_index_loc_without_hostname_uses_route_origin() {
        let sources = RouteSources::new()
            .named("a", pages(&["https://a.example.com/x"]))
            .named("b", pages(&["https://b.example.com/y"]));
        let out = generate(&config(SitemapOptions::new()), &sources, None)
            .await
            .unwrap();

        let index = out.index.unwrap().content;
        assert!(index.contains("<loc>https://a.example.com/sitemap-a.xml</loc>"));
        assert!(index.contains("<loc>https://b.example.com/sitemap-b.xml</loc>"));
    }

    #[tokio::test]
    async fn test_bad_sitemap_name_rejected() {
        let sources = RouteSources::new().named("../etc", pages(&["/"]));
        let err = generate(&config(host()), &sources, None).await.unwrap_err();

        let SitemapError::Config(config_err) = err else {
            panic!("expected configuration error");
        };
        assert!(config_err.diagnostics().unwrap().mentions(fields::ROUTES));
    }

    fn filename_clash(err: SitemapError) -> bool {
        let SitemapError::Config(config_err) = err else {
            return false;
        };
        config_err.diagnostics().is_some_and(|d| d.mentions(fields::ROUTES))
    }

    #[tokio::test]
    async fn test_set_named_index_clashes_with_index_file() {
        let sources = RouteSources::new()
            .named("index", pages(&["/"]))
            .named("blog", pages(&["/blog/a"]));
        let err = generate(&config(host()), &sources, None).await.unwrap_err();
        assert!(filename_clash(err));
    }

    #[tokio::test]
    async fn test_set_named_like_chunk_clashes() {
        let options = SitemapOptions {
            max_urls: Some(1),
            ..host()
        };
        let sources = RouteSources::new()
            .named("blog", pages(&["/a", "/b"]))
            .named("blog-0", pages(&["/c"]));
        let err = generate(&config(options), &sources, None).await.unwrap_err();
        assert!(filename_clash(err));
    }

    #[tokio::test]
    async fn test_numeric_name_clashes_with_unnamed_chunk() {
        let options = SitemapOptions {
            max_urls: Some(1),
            ..host()
        };
        let sources = RouteSources::single(pages(&["/a", "/b"])).named("0", pages(&["/c"]));
        let err = generate(&config(options), &sources, None).await.unwrap_err();
        assert!(filename_clash(err));
    }

    #[tokio::test]
    async fn test_names_differing_in_case_clash() {
        let sources = RouteSources::new()
            .named("Blog", pages(&["/a"]))
            .named("blog", pages(&["/b"]));
        let err = generate(&config(host()), &sources, None).await.unwrap_err();
        assert!(filename_clash(err));
    }

    #[tokio::test]
    async fn test_lone_set_named_index_uses_base_filename() {
        let sources = RouteSources::new().named("index", pages(&["/"]));
        let out = generate(&config(host()), &sources, None).await.unwrap();

        assert_eq!(out.files[0].filename, "sitemap.xml");
        assert!(out.index.is_none());
    }

    struct DelayedSerializer;

    #[async_trait]
    impl SitemapSerializer for DelayedSerializer {
        async fn serialize(&self, routes: &[ValidatedRoute]) -> anyhow::Result<String> {
            tokio::task::yield_now().await;
            Ok(format!("urls:{}", routes.len()))
        }

        async fn serialize_index(
            &self,
            entries: &[SitemapIndexEntry],
        ) -> anyhow::Result<Option<String>> {
            tokio::task::yield_now().await;
            Ok(Some(format!("index:{}", entries.len())))
        }
    }

    #[tokio::test]
    async fn test_async_serializer_awaited_for_files_and_index() {
        let sources = RouteSources::new()
            .named("pages", pages(&["/", "/about"]))
            .named("blog", pages(&["/blog/a"]));
        let options = host().serializer(DelayedSerializer);
        let out = generate(&config(options), &sources, None).await.unwrap();

        let contents: Vec<_> = out.files.iter().map(|f| f.content.as_str()).collect();
        assert_eq!(contents, vec!["urls:2", "urls:1"]);
        assert_eq!(out.index.unwrap().content, "index:2");
    }

    #[tokio::test]
    async fn test_async_closure_serializer_in_pipeline() {
        let options = host().serializer(serializer_fn(|routes: Vec<ValidatedRoute>| async move {
            tokio::task::yield_now().await;
            Ok::<_, anyhow::Error>(routes.iter().map(|r| r.url.clone()).collect::<Vec<_>>().join(" "))
        }));
        let sources = RouteSources::single(pages(&["/a", "/b"]));
        let out = generate(&config(options), &sources, None).await.unwrap();

        assert_eq!(out.files[0].content, "https://example.com/a https://example.com/b");
    }

    #[tokio::test]
    async fn test_write_to() {
        let dir = tempfile::tempdir().unwrap();
        let sources = RouteSources::single(pages(&["/"]));
        let out = generate(&config(host().robots_txt(true)), &sources, None)
            .await
            .unwrap();

        let written = out.write_to(dir.path()).await.unwrap();
        assert_eq!(written.len(), 2);

        let robots = std::fs::read_to_string(dir.path().join("robots.txt")).unwrap();
        assert!(robots.ends_with("Sitemap: https://example.com/sitemap.xml\n"));
        assert!(dir.path().join("sitemap.xml").exists());
    }
}
