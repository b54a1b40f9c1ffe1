//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// XML sitemap generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemap.toml)
    #[arg(short = 'C', long, global = true, default_value = "sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check every route and report validation errors
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the generated XML to stdout without writing files
    #[command(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        common: CommonArgs,

        /// Only print this file (e.g. sitemap-index.xml)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Generate sitemap files into the output directory
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        common: CommonArgs,

        /// Output directory path (relative to project root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,

        /// Add `Sitemap:` lines to robots.txt
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        robots_txt: Option<bool>,

        /// Emit XML without indentation
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },
}

/// Arguments shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Override the site hostname, e.g. https://example.com
    #[arg(short = 'H', long, value_hint = clap::ValueHint::Url)]
    pub hostname: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Commands {
    pub const fn common(&self) -> &CommonArgs {
        match self {
            Self::Validate { common } | Self::Preview { common, .. } | Self::Generate { common, .. } => {
                common
            }
        }
    }
}
