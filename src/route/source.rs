//! Route sources.
//!
//! A [`RouteSource`] produces an ordered list of raw routes, suspending at
//! most once. Literal vectors, plain closures and async closures all fit:
//!
//! ```ignore
//! let sources = RouteSources::new()
//!     .named("pages", vec![Route::new("/"), Route::new("/about")])
//!     .named("blog", from_fn(|| Ok(load_posts())))
//!     .named("shop", from_async(|| async { fetch_products().await }));
//! ```
//!
//! [`RouteSources`] maps an optional sitemap name to one source. A set holding
//! only the unnamed (`None`) entry produces a single sitemap; named entries
//! each become their own sitemap file under one index.

use super::Route;
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::path::PathBuf;

/// Produces the raw routes of one sitemap.
#[async_trait]
pub trait RouteSource: Send + Sync {
    async fn routes(&self) -> Result<Vec<Route>>;
}

#[async_trait]
impl RouteSource for Vec<Route> {
    async fn routes(&self) -> Result<Vec<Route>> {
        Ok(self.clone())
    }
}

/// Synchronous nullary producer.
pub struct FnSource<F>(F);

/// Wrap a closure returning routes.
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: Fn() -> Result<Vec<Route>> + Send + Sync,
{
    FnSource(f)
}

#[async_trait]
impl<F> RouteSource for FnSource<F>
where
    F: Fn() -> Result<Vec<Route>> + Send + Sync,
{
    async fn routes(&self) -> Result<Vec<Route>> {
        (self.0)()
    }
}

/// Asynchronous nullary producer.
pub struct AsyncSource<F>(F);

/// Wrap a closure returning a future of routes.
pub fn from_async<F, Fut>(f: F) -> AsyncSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Route>>> + Send,
{
    AsyncSource(f)
}

#[async_trait]
impl<F, Fut> RouteSource for AsyncSource<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Route>>> + Send,
{
    async fn routes(&self) -> Result<Vec<Route>> {
        (self.0)().await
    }
}

/// Routes stored in a JSON file (an array of route objects).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RouteSource for JsonFileSource {
    async fn routes(&self) -> Result<Vec<Route>> {
        use anyhow::Context;

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read routes from {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid route list in {}", self.path.display()))
    }
}

// ============================================================================
// RouteSources
// ============================================================================

/// Ordered map from sitemap name to its source.
#[derive(Default)]
pub struct RouteSources {
    entries: Vec<(Option<String>, Box<dyn RouteSource>)>,
}

impl RouteSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single unnamed sitemap.
    pub fn single(source: impl RouteSource + 'static) -> Self {
        let mut sources = Self::new();
        sources.insert(None, source);
        sources
    }

    /// Add a named sitemap.
    pub fn named(mut self, name: impl Into<String>, source: impl RouteSource + 'static) -> Self {
        self.insert(Some(name.into()), source);
        self
    }

    /// Insert or replace the source for `name`, keeping first-insertion order.
    pub fn insert(&mut self, name: Option<String>, source: impl RouteSource + 'static) {
        let source: Box<dyn RouteSource> = Box::new(source);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = source,
            None => self.entries.push((name, source)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sitemap names in order.
    pub fn names(&self) -> impl Iterator<Item = Option<&str>> {
        self.entries.iter().map(|(name, _)| name.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &dyn RouteSource)> {
        self.entries
            .iter()
            .map(|(name, source)| (name.as_deref(), source.as_ref()))
    }
}
