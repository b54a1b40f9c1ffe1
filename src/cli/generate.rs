//! `generate` command: build and write sitemap files.

use std::process::ExitCode;

use anyhow::{Context, Result};
use sitemapgen::config::Overrides;
use sitemapgen::utils::plural_count;
use sitemapgen::{debug, log};

use super::Cli;
use super::common::{load_project, read_robots, run_pipeline};

pub fn generate_site(cli: &Cli, overrides: Overrides) -> Result<ExitCode> {
    let project = load_project(cli, overrides)?;
    let output_dir = project.config.output_dir().to_path_buf();

    let existing_robots = if project.config.generate_robots_txt() {
        read_robots(&output_dir)?
    } else {
        None
    };
    let output = run_pipeline(&project, existing_robots.as_deref())?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;
    let written = rt.block_on(output.write_to(&output_dir))?;

    for path in &written {
        debug!("sitemap"; "wrote {}", path.display());
    }
    log!(
        "sitemap";
        "{} with {} in {}",
        plural_count(output.documents().count(), "file"),
        plural_count(output.url_count(), "url"),
        output_dir.display()
    );
    if output.robots_txt.is_some() {
        log!("robots"; "updated robots.txt");
    }
    if output.excluded > 0 {
        debug!("sitemap"; "excluded {}", plural_count(output.excluded, "route"));
    }
    if !output.errors.is_empty() {
        log!(
            "warning";
            "skipped {}, run `validate` for details",
            plural_count(output.errors.len(), "invalid field")
        );
    }

    Ok(ExitCode::SUCCESS)
}
