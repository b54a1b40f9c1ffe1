//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;
use sitemapgen::route::ValidationError;
use sitemapgen::utils::plural_s;

/// Default sitemap label in reports.
const DEFAULT_SITEMAP: &str = "default";

/// Rejected routes grouped by sitemap, then by route.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// sitemap -> route index -> errors
    sitemaps: BTreeMap<String, BTreeMap<usize, RouteErrors>>,
}

#[derive(Debug)]
struct RouteErrors {
    url: String,
    problems: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        let mut report = Self::default();
        for e in errors {
            report.add(e);
        }
        report
    }

    pub fn add(&mut self, error: &ValidationError) {
        let sitemap = error.sitemap.as_deref().unwrap_or(DEFAULT_SITEMAP);
        self.sitemaps
            .entry(sitemap.to_string())
            .or_default()
            .entry(error.index)
            .or_insert_with(|| RouteErrors {
                url: error.url.clone(),
                problems: Vec::new(),
            })
            .problems
            .push(format!("{} {}", error.field, error.rule));
    }

    /// Total error count.
    pub fn error_count(&self) -> usize {
        self.sitemaps
            .values()
            .flat_map(|routes| routes.values())
            .map(|r| r.problems.len())
            .sum()
    }

    /// Count of rejected routes.
    pub fn route_count(&self) -> usize {
        self.sitemaps.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sitemaps.is_empty()
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        for (name, routes) in &self.sitemaps {
            eprintln!();
            let error_count: usize = routes.values().map(|r| r.problems.len()).sum();
            eprintln!(
                "{} {}",
                name.red().bold(),
                format!(
                    "({} route{}, {error_count} error{})",
                    routes.len(),
                    plural_s(routes.len()),
                    plural_s(error_count)
                )
                .dimmed()
            );

            for (index, route) in routes {
                eprintln!(
                    "{}{}{} {}",
                    "[#".dimmed(),
                    index.cyan(),
                    "]".dimmed(),
                    route.url
                );
                for problem in &route.problems {
                    eprintln!("{} {}", "→".red(), problem);
                }
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", "all routes valid".green())
        } else {
            write!(
                f,
                "{} {} {} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{} in", plural_s(total)).dimmed(),
                self.route_count().to_string().red().bold(),
                format!("route{}", plural_s(self.route_count())).dimmed()
            )
        }
    }
}
