//! Build-level errors.
//!
//! Configuration and callback failures abort the build. Per-route validation
//! errors are not part of this type: they are collected into
//! [`BuildOutput::errors`](crate::generator::BuildOutput) instead.

use crate::config::ConfigError;
use std::fmt;
use thiserror::Error;

/// Which user callback failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Source,
    Transform,
    Serializer,
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "route source",
            Self::Transform => "transform",
            Self::Serializer => "serializer",
        })
    }
}

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{callback} failed{}", sitemap_label(.sitemap))]
    Transform {
        sitemap: Option<String>,
        callback: Callback,
        #[source]
        source: anyhow::Error,
    },

    #[error("cannot render `{file}`: {message}")]
    Serialization { file: String, message: String },
}

impl SitemapError {
    pub(crate) fn callback(
        sitemap: Option<&str>,
        callback: Callback,
        source: anyhow::Error,
    ) -> Self {
        Self::Transform {
            sitemap: sitemap.map(str::to_string),
            callback,
            source,
        }
    }
}

fn sitemap_label(sitemap: &Option<String>) -> String {
    sitemap
        .as_ref()
        .map(|name| format!(" for sitemap `{name}`"))
        .unwrap_or_default()
}
