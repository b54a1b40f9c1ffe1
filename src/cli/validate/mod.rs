//! `validate` command.

mod report;

use std::process::ExitCode;

use anyhow::Result;
use sitemapgen::config::Overrides;
use sitemapgen::log;
use sitemapgen::utils::plural_count;

use super::Cli;
use super::common::{load_project, run_pipeline};
use report::ValidationReport;

/// Run the pipeline and report every rejected route.
///
/// Fails (exit 1) when any route is invalid.
pub fn validate_routes(cli: &Cli) -> Result<ExitCode> {
    let project = load_project(cli, Overrides::default())?;
    let output = run_pipeline(&project, None)?;
    let report = ValidationReport::from_errors(&output.errors);

    let checked = output.url_count() + report.route_count();
    log!(
        "validate";
        "checked {}, {} excluded",
        plural_count(checked, "route"),
        output.excluded
    );

    report.print();
    if !report.is_empty() {
        eprintln!();
    }
    log!("validate"; "{}", report);

    Ok(if report.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
