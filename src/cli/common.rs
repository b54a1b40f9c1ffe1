//! Common utilities shared across CLI commands.

use super::{Cli, CommonArgs};
use anyhow::{Context, Result};
use sitemapgen::config::{Overrides, ProjectConfig, ResolvedConfig};
use sitemapgen::route::RouteSources;
use sitemapgen::{BuildOutput, debug, generate};
use std::path::Path;

/// A loaded project, ready to run.
pub struct Project {
    pub config: ResolvedConfig,
    pub sources: RouteSources,
}

/// Load `sitemap.toml`, apply command line overrides and resolve.
pub fn load_project(cli: &Cli, overrides: Overrides) -> Result<Project> {
    let common: &CommonArgs = cli.command.common();
    sitemapgen::logger::set_verbose(common.verbose);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let mut project = ProjectConfig::discover(&cwd, &cli.config)?;
    debug!("config"; "loaded {}", project.config_path.display());

    project.apply_overrides(&Overrides {
        hostname: common.hostname.clone(),
        ..overrides
    });

    Ok(Project {
        config: project.resolve()?,
        sources: project.route_sources(),
    })
}

/// Run the pipeline on a fresh runtime.
pub fn run_pipeline(project: &Project, existing_robots: Option<&str>) -> Result<BuildOutput> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let output = rt.block_on(generate(&project.config, &project.sources, existing_robots))?;
    Ok(output)
}

/// Current robots.txt in `dir`, if there is one.
pub fn read_robots(dir: &Path) -> Result<Option<String>> {
    let path = dir.join("robots.txt");
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
