//! `routes` configuration.
//!
//! ```toml
//! # one unnamed sitemap, inline
//! [[routes]]
//! url = "/"
//!
//! # or from a JSON file (relative to the project root)
//! routes = "routes.json"
//!
//! # or several named sitemaps, kept in file order
//! [routes]
//! pages = "pages.json"
//! [[routes.blog]]
//! url = "/blog/hello"
//! lastmod = "2025-01-01"
//! ```

use crate::route::Route;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Where one sitemap's routes come from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RouteInput {
    /// JSON array of routes.
    File(PathBuf),
    Inline(Vec<Route>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RoutesConfig {
    Single(RouteInput),
    Named(NamedRoutes),
}

impl RoutesConfig {
    /// `(name, input)` pairs; the unnamed sitemap has no name.
    pub fn entries(&self) -> Vec<(Option<&str>, &RouteInput)> {
        match self {
            Self::Single(input) => vec![(None, input)],
            Self::Named(named) => named
                .0
                .iter()
                .map(|(name, input)| (Some(name.as_str()), input))
                .collect(),
        }
    }
}

/// Named sources in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRoutes(pub Vec<(String, RouteInput)>);

impl<'de> Deserialize<'de> for NamedRoutes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NamedVisitor;

        impl<'de> Visitor<'de> for NamedVisitor {
            type Value = NamedRoutes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of named route sources")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<NamedRoutes, A::Error> {
                let mut entries = Vec::new();
                while let Some((name, input)) = map.next_entry::<String, RouteInput>()? {
                    entries.push((name, input));
                }
                Ok(NamedRoutes(entries))
            }
        }

        deserializer.deserialize_map(NamedVisitor)
    }
}
