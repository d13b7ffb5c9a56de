//! Assemble the full wiki table from the org template
//!
//! Randomized and faction-unique orgs are dropped, the rest are rendered in
//! input order between a fixed header and footer. The header marks the
//! table sortable; sorting happens in the reader's browser, not here.

use crate::core::config::TableConfig;
use crate::core::error::{OrgError, Result};
use crate::org::classify::is_faction_unique;
use crate::org::loader::load_from_file;
use crate::org::record::OrgRecord;
use crate::wiki::row::render_row;
use rayon::prelude::*;
use std::path::Path;

pub const HEADER: &str = "{| class=\"wikitable sortable mw-collapsible\"
|+ Orgs
|-
! Organization
! tier
! Monthly income
! Councilor attributes
! Missions gained
! Cost
! Required region
! Government?
! Criminal?
! Sociopath?
! Banned
|-";

pub const FOOTER: &str = "|}";

/// Placed between the header, every row, and the footer
pub const ROW_BREAK: &str = "\n|-\n";

/// Why an org was left out of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Randomized,
    FactionUnique,
}

/// Whether `org` gets a row, or why not
pub fn skip_reason(org: &OrgRecord) -> Option<SkipReason> {
    if org.randomized {
        Some(SkipReason::Randomized)
    } else if is_faction_unique(org) {
        Some(SkipReason::FactionUnique)
    } else {
        None
    }
}

/// Counts from one table build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableReport {
    pub total: usize,
    pub randomized: usize,
    pub faction_unique: usize,
    pub rendered: usize,
}

/// A rendered table and what went into it
#[derive(Debug, Clone)]
pub struct Table {
    pub markup: String,
    pub report: TableReport,
}

/// Orgs that get a row, in input order
pub fn qualifying<'a>(orgs: &'a [OrgRecord], report: &mut TableReport) -> Vec<&'a OrgRecord> {
    report.total = orgs.len();
    orgs.iter()
        .filter(|org| match skip_reason(org) {
            Some(reason) => {
                tracing::debug!("Skipping {} ({:?})", org.display_name(), reason);
                match reason {
                    SkipReason::Randomized => report.randomized += 1,
                    SkipReason::FactionUnique => report.faction_unique += 1,
                }
                false
            }
            None => true,
        })
        .collect()
}

/// Render every org's row, keeping input order
///
/// Large inputs are rendered on the rayon pool; the collected order is the
/// same either way.
pub fn render_rows(orgs: &[&OrgRecord], parallel_threshold: usize) -> Result<Vec<String>> {
    if orgs.len() >= parallel_threshold {
        orgs.par_iter().map(|org| render_row(org)).collect()
    } else {
        orgs.iter().map(|org| render_row(org)).collect()
    }
}

/// Join header, rows and footer into the final markup
pub fn assemble(rows: &[String]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(rows.len() + 2);
    parts.push(HEADER);
    parts.extend(rows.iter().map(String::as_str));
    parts.push(FOOTER);
    parts.join(ROW_BREAK)
}

/// Filter and render `orgs` into a complete table
pub fn build_table(orgs: &[OrgRecord], config: &TableConfig) -> Result<Table> {
    let mut report = TableReport::default();
    let kept = qualifying(orgs, &mut report);
    let rows = render_rows(&kept, config.parallel_threshold)?;
    report.rendered = rows.len();

    tracing::info!(
        "Rendered {} of {} orgs ({} randomized, {} faction-unique skipped)",
        report.rendered,
        report.total,
        report.randomized,
        report.faction_unique
    );

    Ok(Table {
        markup: assemble(&rows),
        report,
    })
}

/// Write the markup to `path`, replacing any existing file
pub fn write_table(path: &Path, markup: &str) -> Result<()> {
    std::fs::write(path, markup).map_err(|source| OrgError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote table to {:?}", path);
    Ok(())
}

/// Read the template, build the table and write it out
///
/// Nothing is written unless every record loads and renders.
pub fn generate_table(config: &TableConfig) -> Result<TableReport> {
    config.validate()?;
    let orgs = load_from_file(&config.input)?;
    let table = build_table(&orgs, config)?;
    write_table(&config.output, &table.markup)?;
    Ok(table.report)
}
