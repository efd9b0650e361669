//! Format-independent document model.
//!
//! A [`Report`] is an ordered list of [`Section`]s, each an ordered list of
//! [`Block`]s. Both are built by value: every append consumes the builder and
//! returns it, and the finished report is rendered once.

use chrono::{DateTime, SecondsFormat, Utc};
use mig_core::EntityKind;
use serde::Serialize;

pub const REPORT_TITLE: &str = "Instance Migration Analysis";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Sub-heading inside a section.
    Heading { text: String },
    Bullet { text: String },
    Paragraph { text: String },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Figures shown in the terminal summary for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub source: usize,
    pub target: usize,
    pub additions: usize,
    pub conflicts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: EntityKind,
    pub title: String,
    pub summary: SectionSummary,
    pub blocks: Vec<Block>,
}

impl Section {
    #[must_use]
    pub fn new(kind: EntityKind, summary: SectionSummary) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            summary,
            blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    #[must_use]
    pub fn heading(self, text: impl Into<String>) -> Self {
        self.push(Block::Heading { text: text.into() })
    }

    #[must_use]
    pub fn bullet(self, text: impl Into<String>) -> Self {
        self.push(Block::Bullet { text: text.into() })
    }

    #[must_use]
    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.push(Block::Paragraph { text: text.into() })
    }

    /// Append a table, or `empty` as a paragraph when there are no rows.
    #[must_use]
    pub fn table_or(self, headers: &[&str], rows: Vec<Vec<String>>, empty: &str) -> Self {
        if rows.is_empty() {
            return self.paragraph(empty);
        }
        self.push(Block::Table {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows,
        })
    }
}

/// Names the compared instances and when the report was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preamble {
    pub source: String,
    pub target: String,
    pub generated_at: DateTime<Utc>,
}

impl Preamble {
    /// Generation time as RFC 3339, second precision.
    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub preamble: Preamble,
    pub sections: Vec<Section>,
}

impl Report {
    #[must_use]
    pub fn new(preamble: Preamble) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            preamble,
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}
