//! # mig-report
//!
//! Builds the migration assessment document from two snapshots and renders
//! it as Markdown or JSON.
//!
//! Each entity kind becomes one section: record counts for both instances,
//! then a sub-heading and a table (or a one-line explanation when empty) per
//! finding category. A section that cannot be built is logged and left out;
//! the rest of the report is still produced.

mod document;
mod error;
mod render;
mod sections;

pub use document::{Block, Preamble, REPORT_TITLE, Report, Section, SectionSummary};
pub use error::ReportError;
pub use render::{markdown, render, write_report};
pub use sections::{CUSTOM_FIELD_SUGGESTION, STATUS_SUGGESTION, section};

use chrono::{DateTime, Utc};
use mig_core::{EntityKind, InstanceSnapshot};

/// Reconcile every kind in `kinds` and append its section, in order.
#[must_use]
pub fn build_report(
    source: &InstanceSnapshot,
    target: &InstanceSnapshot,
    kinds: &[EntityKind],
    generated_at: DateTime<Utc>,
) -> Report {
    let preamble = Preamble {
        source: source.instance.clone(),
        target: target.instance.clone(),
        generated_at,
    };

    kinds
        .iter()
        .fold(Report::new(preamble), |report, &kind| {
            match mig_reconcile::reconcile(kind, source, target) {
                Ok(result) => report.with_section(section(&result)),
                Err(error) => {
                    tracing::error!(section = kind.title(), %error, "skipping section");
                    report
                }
            }
        })
}
