//! Run report collected by the pipeline
//!
//! Every per-entity outcome lands here: successes as counts or published
//! pages, failures as `FailureRecord`s carrying the identifier and the error
//! text. Nothing is persisted; the report lives for one run.

use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::time::Duration;

/// One failed fetch or publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// Identifier of the entity
    pub id: u32,

    /// Display name, when it was known at the time of failure
    pub name: Option<String>,

    /// Error message
    pub error: String,
}

impl FailureRecord {
    pub fn new(id: u32, name: Option<&str>, error: impl ToString) -> Self {
        Self {
            id,
            name: name.map(str::to_string),
            error: error.to_string(),
        }
    }

    /// `#id Name` or just `#id`
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("#{} {}", self.id, name),
            None => format!("#{}", self.id),
        }
    }
}

/// A page created in the target database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPage {
    pub id: u32,
    pub name: String,
    pub page_id: String,
}

/// Summary of one run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Whether the publish phase only printed requests
    pub dry_run: bool,

    /// Identifiers in the configured range
    pub requested: usize,

    /// Primary records fetched
    pub fetched: usize,

    /// Entities whose species detail was fetched
    pub enriched: usize,

    /// Entities held back from publishing by the detail-failure policy
    pub skipped: usize,

    /// Pages created (or printed, in a dry run)
    pub published: Vec<PublishedPage>,

    pub primary_failures: Vec<FailureRecord>,
    pub detail_failures: Vec<FailureRecord>,
    pub publish_failures: Vec<FailureRecord>,

    /// Tokens taken from the publish rate limiter
    pub rate_limit_acquires: u64,

    /// Total time the publish loop waited on the rate limiter
    pub rate_limit_wait: Duration,
}

impl RunReport {
    pub fn new(requested: usize, dry_run: bool) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            dry_run,
            requested,
            fetched: 0,
            enriched: 0,
            skipped: 0,
            published: Vec::new(),
            primary_failures: Vec::new(),
            detail_failures: Vec::new(),
            publish_failures: Vec::new(),
            rate_limit_acquires: 0,
            rate_limit_wait: Duration::ZERO,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn published_count(&self) -> usize {
        self.published.len()
    }

    pub fn failure_count(&self) -> usize {
        self.primary_failures.len() + self.detail_failures.len() + self.publish_failures.len()
    }

    /// True when every requested identifier made it through every phase
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0 && self.published_count() == self.requested
    }

    /// Percentage of requested identifiers that were published
    pub fn success_rate(&self) -> f64 {
        if self.requested == 0 {
            0.0
        } else {
            (self.published_count() as f64 / self.requested as f64) * 100.0
        }
    }

    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }
}

fn write_failures<W: Write>(
    out: &mut W,
    title: &str,
    failures: &[FailureRecord],
) -> io::Result<()> {
    if failures.is_empty() {
        return Ok(());
    }

    writeln!(out, "{} ({}):", title, failures.len())?;
    for failure in failures {
        writeln!(out, "  - {}: {}", failure.label(), failure.error)?;
    }
    writeln!(out)
}

/// Writes the run report in a formatted manner
pub fn write_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out, "=== Run Summary ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(out, "  Requested: {}", report.requested)?;
    writeln!(out, "  Fetched: {}", report.fetched)?;
    writeln!(out, "  Enriched: {}", report.enriched)?;
    if report.skipped > 0 {
        writeln!(out, "  Skipped (missing detail): {}", report.skipped)?;
    }
    if report.dry_run {
        writeln!(out, "  Printed (dry run): {}", report.published_count())?;
    } else {
        writeln!(out, "  Published: {}", report.published_count())?;
    }
    if let Some(duration) = report.duration() {
        writeln!(out, "  Duration: {}ms", duration.num_milliseconds())?;
    }
    writeln!(
        out,
        "  Rate limiter: {} requests, {:?} waiting",
        report.rate_limit_acquires, report.rate_limit_wait
    )?;
    writeln!(out)?;

    write_failures(out, "Fetch Failures", &report.primary_failures)?;
    write_failures(out, "Detail Failures", &report.detail_failures)?;
    write_failures(out, "Publish Failures", &report.publish_failures)?;

    writeln!(
        out,
        "Success Rate: {:.1}% ({} / {} records published)",
        report.success_rate(),
        report.published_count(),
        report.requested
    )
}

/// Prints the run report
///
/// Dry runs print page JSON on stdout, so their summary goes to stderr.
pub fn print_report(report: &RunReport) -> io::Result<()> {
    if report.dry_run {
        write_report(&mut io::stderr().lock(), report)
    } else {
        write_report(&mut io::stdout().lock(), report)
    }
}
