//! Route exclusion.
//!
//! Patterns come in two flavours, kept apart as a tagged enum:
//!
//! - **Glob**, matched against the URL path: `*` stays within one path
//!   segment, `**` crosses segments, a pattern without wildcards must equal
//!   the path.
//! - **Regex**, tested against the full URL and against its path.
//!
//! A route is excluded when any pattern matches.

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Uncompiled pattern as written in config.
///
/// ```toml
/// exclude = ["/admin/*", "/private/**", { regex = "^https://[^/]+/draft-" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExcludeSpec {
    Glob(String),
    Regex { regex: String },
}

impl ExcludeSpec {
    pub fn glob(pattern: impl Into<String>) -> Self {
        Self::Glob(pattern.into())
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::Regex {
            regex: pattern.into(),
        }
    }

    /// The pattern text, without its flavour.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Glob(p) | Self::Regex { regex: p } => p,
        }
    }

    pub fn compile(&self) -> Result<ExcludePattern, String> {
        match self {
            Self::Glob(pattern) => GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map(|glob| ExcludePattern::Glob(glob.compile_matcher()))
                .map_err(|e| e.to_string()),
            Self::Regex { regex } => Regex::new(regex)
                .map(ExcludePattern::Regex)
                .map_err(|e| e.to_string()),
        }
    }
}

/// Compiled exclusion pattern.
#[derive(Debug, Clone)]
pub enum ExcludePattern {
    Glob(GlobMatcher),
    Regex(Regex),
}

impl ExcludePattern {
    /// Whether this pattern matches a fully resolved route URL.
    pub fn matches(&self, url: &str) -> bool {
        let path = url_path(url);
        let path = path.as_str();
        match self {
            Self::Glob(glob) => {
                glob.is_match(path) || {
                    // `/admin/*` should also catch `/admin/users/`
                    let trimmed = path.trim_end_matches('/');
                    !trimmed.is_empty() && trimmed != path && glob.is_match(trimmed)
                }
            }
            Self::Regex(re) => re.is_match(url) || re.is_match(path),
        }
    }
}

impl fmt::Display for ExcludePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob(glob) => write!(f, "glob `{}`", glob.glob()),
            Self::Regex(re) => write!(f, "regex `{}`", re.as_str()),
        }
    }
}

/// True when any pattern matches `url`.
pub fn is_excluded(patterns: &[ExcludePattern], url: &str) -> bool {
    patterns.iter().any(|p| p.matches(url))
}

/// Path component of a resolved URL, or the input up to any query/fragment
/// when it does not parse.
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    }
}
