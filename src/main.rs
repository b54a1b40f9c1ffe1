//! sitemapgen - XML sitemap generator.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use sitemapgen::config::Overrides;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Validate { .. } => cli::validate::validate_routes(&cli),
        Commands::Preview { file, .. } => {
            cli::preview::preview(&cli, file.as_deref()).map(|()| ExitCode::SUCCESS)
        }
        Commands::Generate {
            output,
            robots_txt,
            minify,
            ..
        } => {
            let overrides = Overrides {
                hostname: None,
                output: output.clone(),
                robots_txt: *robots_txt,
                minify: *minify,
            };
            cli::generate::generate_site(&cli, overrides)
        }
    }
}
