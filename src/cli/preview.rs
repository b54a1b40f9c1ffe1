//! `preview` command: render to stdout, write nothing.

use std::io::{self, Write};

use anyhow::{Result, bail};
use sitemapgen::config::Overrides;
use sitemapgen::{BuildOutput, OutputFile, log};

use super::Cli;
use super::common::{load_project, run_pipeline};

pub fn preview(cli: &Cli, file: Option<&str>) -> Result<()> {
    let project = load_project(cli, Overrides::default())?;
    let output = run_pipeline(&project, None)?;

    if !output.errors.is_empty() {
        log!("warning"; "{} routes failed validation, run `validate` for details", output.errors.len());
    }

    let selected = select(&output, file)?;
    let mut out = io::stdout().lock();
    let headers = selected.len() > 1;
    for doc in selected {
        if headers {
            writeln!(out, "<!-- {} -->", doc.filename)?;
        }
        out.write_all(doc.bytes())?;
        if !doc.content.ends_with('\n') {
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Documents to print: all of them, or the one named `file`.
fn select<'a>(output: &'a BuildOutput, file: Option<&str>) -> Result<Vec<&'a OutputFile>> {
    let Some(name) = file else {
        return Ok(output.documents().collect());
    };
    match output.documents().find(|doc| doc.filename == name) {
        Some(doc) => Ok(vec![doc]),
        None => {
            let available: Vec<_> = output.documents().map(|d| d.filename.as_str()).collect();
            bail!("no file `{name}` in this build (have: {})", available.join(", "))
        }
    }
}
