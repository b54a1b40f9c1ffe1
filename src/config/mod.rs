//! Project configuration (`sitemap.toml`) and option resolution.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [build], [defaults], routes
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── options.rs     # SitemapOptions -> ResolvedConfig
//! ├── util.rs        # config file discovery
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! The file layer is optional: library users can build [`SitemapOptions`]
//! directly. The CLI loads a [`ProjectConfig`], applies flag overrides and
//! turns it into options plus route sources.
//!
//! # Example
//!
//! ```toml
//! exclude = ["/admin/*", { regex = "^/draft-" }]
//!
//! [site]
//! hostname = "https://example.com"
//!
//! [build]
//! output = "dist"
//! robots_txt = true
//!
//! [defaults]
//! changefreq = "weekly"
//!
//! [routes]
//! pages = "pages.json"
//! blog = "blog.json"
//! ```

pub mod options;
pub mod section;
pub mod types;
mod util;

pub use options::{DEFAULT_FILENAME, ResolvedConfig, SitemapOptions};
pub use section::{
    BuildSectionConfig, DefaultsSectionConfig, RouteInput, RoutesConfig, SiteSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::log;
use crate::route::{ExcludeSpec, RouteSources, source::JsonFileSource};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name.
pub const CONFIG_FILE: &str = "sitemap.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub site: SiteSectionConfig,
    pub build: BuildSectionConfig,
    pub defaults: DefaultsSectionConfig,
    pub exclude: Vec<ExcludeSpec>,
    pub routes: Option<RoutesConfig>,
}

/// Values given on the command line. `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub hostname: Option<String>,
    pub output: Option<PathBuf>,
    pub robots_txt: Option<bool>,
    pub minify: Option<bool>,
}

impl ProjectConfig {
    /// Find `config_name` upward from `start` and load it.
    pub fn discover(start: &Path, config_name: &Path) -> Result<Self, ConfigError> {
        let path = find_config_file(start, config_name)
            .ok_or_else(|| ConfigError::NotFound(start.join(config_name)))?;
        Self::from_path(&path)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are reported as warnings and otherwise ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Output directory, resolved against the root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command line values over file values.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if overrides.hostname.is_some() {
            self.site.hostname = overrides.hostname.clone();
        }
        Self::update_option(&mut self.build.output, overrides.output.as_ref());
        Self::update_option(&mut self.build.robots_txt, overrides.robots_txt.as_ref());
        Self::update_option(&mut self.build.minify, overrides.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // conversion
    // ========================================================================

    /// Library options equivalent to this file.
    pub fn to_options(&self) -> SitemapOptions {
        SitemapOptions {
            hostname: self.site.hostname.clone(),
            output_dir: Some(self.output_dir()),
            base_filename: self.build.filename.clone(),
            changefreq: self.defaults.changefreq.clone(),
            priority: self.defaults.priority,
            lastmod: self.defaults.lastmod.clone(),
            exclude: self.exclude.clone(),
            transform: None,
            serializer: None,
            robots_txt: self.build.robots_txt,
            minify: self.build.minify,
            stylesheet: self.build.stylesheet.clone(),
            max_urls: self.build.max_urls,
            max_bytes: self.build.max_bytes,
        }
    }

    /// Resolve options against this project's output directory.
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        self.to_options().resolve(&self.output_dir())
    }

    /// Route sources declared under `routes`. JSON paths are relative to the
    /// project root.
    pub fn route_sources(&self) -> RouteSources {
        let mut sources = RouteSources::new();
        let Some(routes) = &self.routes else {
            return sources;
        };
        for (name, input) in routes.entries() {
            let name = name.map(str::to_string);
            match input {
                RouteInput::File(path) => {
                    sources.insert(name, JsonFileSource::new(self.root.join(path)));
                }
                RouteInput::Inline(list) => sources.insert(name, list.clone()),
            }
        }
        sources
    }
}

// ============================================================================
// tests
// ============================================================================
