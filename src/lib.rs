//! XML sitemap generation.
//!
//! Turns route lists into `sitemap.xml` documents following the sitemaps.org
//! protocol plus Google's image, video, news and hreflang extensions. Large
//! sets are split into chunks with a sitemap index, and `robots.txt` can be
//! updated with the resulting `Sitemap:` lines.
//!
//! # Example
//!
//! ```no_run
//! use sitemapgen::{Route, RouteSources, SitemapOptions, generate};
//! use std::path::Path;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = SitemapOptions::new()
//!     .hostname("https://example.com")
//!     .resolve(Path::new("dist"))?;
//! let sources = RouteSources::single(vec![Route::new("/"), Route::new("/about")]);
//!
//! let output = generate(&config, &sources, None).await?;
//! output.write_to(config.output_dir()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod route;
pub mod utils;

pub use config::{ConfigError, ResolvedConfig, SitemapOptions};
pub use error::{Callback, SitemapError};
pub use generator::{
    BuildOutput, OutputFile, SitemapIndexEntry, SitemapSerializer, generate, serializer_fn,
};
pub use route::{
    Access, Alternate, ChangeFrequency, ExcludeSpec, Image, News, Publication, Relationship,
    Route, RouteSource, RouteSources, RouteTransform, Uploader, ValidatedRoute, ValidationError,
    Video, transform_fn,
};
