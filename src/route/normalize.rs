//! Route normalization: URL resolution, defaults and the user transform.

use super::Route;
use crate::config::ResolvedConfig;
use crate::error::{Callback, SitemapError};
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use url::Url;

/// Rewrites or drops a route after defaults are applied.
///
/// Returning `Ok(None)` drops the route silently. An `Err` aborts the build.
#[async_trait]
pub trait RouteTransform: Send + Sync {
    async fn transform(&self, route: Route) -> Result<Option<Route>>;
}

pub struct FnTransform<F>(F);

/// Use a closure as a [`RouteTransform`].
///
/// ```ignore
/// let drop_drafts = transform_fn(|route| async move {
///     Ok((!route.url.contains("/draft")).then_some(route))
/// });
/// ```
pub fn transform_fn<F, Fut>(f: F) -> FnTransform<F>
where
    F: Fn(Route) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Route>>> + Send,
{
    FnTransform(f)
}

#[async_trait]
impl<F, Fut> RouteTransform for FnTransform<F>
where
    F: Fn(Route) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Route>>> + Send,
{
    async fn transform(&self, route: Route) -> Result<Option<Route>> {
        (self.0)(route).await
    }
}

/// Qualify `raw` against `hostname`.
///
/// Absolute URLs are kept as-is. Relative ones are appended to the hostname
/// with exactly one `/` at the join. Without a hostname the input is returned
/// unchanged (and later rejected by validation).
pub fn resolve_url(raw: &str, hostname: Option<&Url>) -> String {
    if Url::parse(raw).is_ok() {
        return raw.to_string();
    }
    let Some(host) = hostname else {
        return raw.to_string();
    };

    let base = host.as_str();
    let base = base.strip_suffix('/').unwrap_or(base);
    let path = raw.strip_prefix('/').unwrap_or(raw);
    format!("{base}/{path}")
}

/// Normalize the raw routes of one sitemap.
///
/// Returns `(source_index, route)` pairs in input order. Routes dropped by the
/// transform leave a gap in the indices so later errors still point at the
/// right source entry.
pub async fn normalize_routes(
    config: &ResolvedConfig,
    sitemap: Option<&str>,
    raw: Vec<Route>,
) -> Result<Vec<(usize, Route)>, SitemapError> {
    let mut routes = Vec::with_capacity(raw.len());

    for (index, mut route) in raw.into_iter().enumerate() {
        route.url = resolve_url(&route.url, config.hostname());
        apply_defaults(config, &mut route);

        let route = match &config.transform {
            Some(transform) => transform
                .transform(route)
                .await
                .map_err(|e| SitemapError::callback(sitemap, Callback::Transform, e))?,
            None => Some(route),
        };

        if let Some(route) = route {
            routes.push((index, route));
        }
    }

    Ok(routes)
}

fn apply_defaults(config: &ResolvedConfig, route: &mut Route) {
    if route.last_modified.is_none() {
        route.last_modified = config.default_last_modified.clone();
    }
    if route.change_frequency.is_none() {
        route.change_frequency = config.default_change_frequency.clone();
    }
    if route.priority.is_none() {
        route.priority = config.default_priority;
    }
}
