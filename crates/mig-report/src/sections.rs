//! Turns one [`Reconciliation`] into a report section.

use mig_core::EntityKind;
use mig_reconcile::{Divergence, Entry, Findings, Reconciliation};

use crate::document::{Section, SectionSummary};

const ADDITIONS_HEADING: &str = "Analysis of what will be added to the target instance";
const NO_ADDITIONS: &str = "We didn't identify anything that will be added.";
const MERGES_HEADING: &str = "What will be merged (because they are on both instances)";
const NO_MERGES: &str = "We didn't identify anything that will be merged.";
const PROJECT_CONFLICTS_HEADING: &str = "These project keys have conflicts and will need to be \
     renamed in the source or target instance in order to be migrated.";
const NO_PROJECT_CONFLICTS: &str = "No project keys have conflicts.";

const DASHBOARD_LIMITATIONS: &str = "Since the migration of dashboards is done through REST API, \
     our limitation is directly tied to the lack of necessary APIs for the migration. Currently, \
     for dashboards, we have identified the following limitations:";
const DASHBOARD_LIMITATION_BULLETS: [&str; 3] = [
    "Inability to migrate the layout of the dashboards",
    "Inability to migrate the owner of the dashboard. To work around this limitation, we add the \
     owner as an editor of the dashboard, but the owner will be the user running the script.",
    "Favorite dashboards of each user will be lost, requiring each user to find their dashboard \
     in the destination instance and set it as a favorite again.",
];

pub const CUSTOM_FIELD_SUGGESTION: &str = "Rename source/target or Merge or Delete";
pub const STATUS_SUGGESTION: &str = "Change category or Merge";

/// Build the section for one reconciled entity kind.
#[must_use]
pub fn section(result: &Reconciliation) -> Section {
    let kind = result.kind;
    let noun = kind.noun();
    let summary = SectionSummary {
        source: result.counts.source,
        target: result.counts.target,
        additions: result.findings.addition_count(),
        conflicts: result.findings.conflict_count(),
    };

    let section = Section::new(kind, summary)
        .bullet(format!(
            "Number of {noun} in source instance: {}",
            result.counts.source
        ))
        .bullet(format!(
            "Number of {noun} in target instance: {}",
            result.counts.target
        ));

    match &result.findings {
        Findings::Generic { additions, merges } => generic(section, kind, additions, merges),
        Findings::Collisions { names } => collisions(section, kind, names),
        Findings::CustomFields {
            additions,
            conflicts,
            non_migratable,
        } => custom_fields(section, additions, conflicts, non_migratable),
        Findings::Statuses {
            additions,
            conflicts,
        } => statuses(section, additions, conflicts),
    }
}

fn entry_rows(entries: &[Entry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| vec![e.key.clone(), e.value.clone()])
        .collect()
}

fn divergence_rows(conflicts: &[Divergence], suggestion: &str) -> Vec<Vec<String>> {
    conflicts
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.source.clone(),
                c.target.clone(),
                suggestion.to_string(),
            ]
        })
        .collect()
}

fn generic(section: Section, kind: EntityKind, additions: &[Entry], merges: &[Entry]) -> Section {
    let section = section.heading(ADDITIONS_HEADING);

    if kind == EntityKind::Projects {
        let headers = ["Key", "Description"];
        return section
            .table_or(&headers, entry_rows(additions), NO_ADDITIONS)
            .heading(PROJECT_CONFLICTS_HEADING)
            .table_or(&headers, entry_rows(merges), NO_PROJECT_CONFLICTS);
    }

    let headers = ["Name", "Description"];
    section
        .table_or(&headers, entry_rows(additions), NO_ADDITIONS)
        .heading(MERGES_HEADING)
        .table_or(&headers, entry_rows(merges), NO_MERGES)
}

fn collisions(section: Section, kind: EntityKind, names: &[String]) -> Section {
    let title = kind.title();
    let rows = names.iter().map(|n| vec![n.clone()]).collect();
    let section = section
        .heading(format!(
            "{title} that have conflicts (same name in the source and target):"
        ))
        .table_or(
            &["Name"],
            rows,
            &format!("No conflicts were identified regarding {title} during the assessment."),
        );

    if kind != EntityKind::Dashboards {
        return section;
    }

    DASHBOARD_LIMITATION_BULLETS.into_iter().fold(
        section.heading("Limitations").paragraph(DASHBOARD_LIMITATIONS),
        |section, text| section.bullet(text),
    )
}

fn custom_fields(
    section: Section,
    additions: &[Entry],
    conflicts: &[Divergence],
    non_migratable: &[Entry],
) -> Section {
    section
        .heading("Custom fields that will be added")
        .table_or(
            &["Name", "Source Type"],
            entry_rows(additions),
            "No custom fields will be added.",
        )
        .heading("Custom fields with the same name on both instances")
        .table_or(
            &["Name", "Source Type", "Target Type", "Suggestion"],
            divergence_rows(conflicts, CUSTOM_FIELD_SUGGESTION),
            "No custom fields have the same name on both instances with different types.",
        )
        .heading("Custom fields that will not be migrated")
        .table_or(
            &["Name", "Type"],
            entry_rows(non_migratable),
            "No custom fields are excluded from migration.",
        )
}

fn statuses(section: Section, additions: &[Entry], conflicts: &[Divergence]) -> Section {
    section
        .heading("Statuses that will be added")
        .table_or(
            &["Name", "Category"],
            entry_rows(additions),
            "No statuses will be added.",
        )
        .heading("Statuses with the same name but different categories")
        .table_or(
            &["Name", "Source Category", "Target Category", "Suggestion"],
            divergence_rows(conflicts, STATUS_SUGGESTION),
            "No statuses have the same name but different categories.",
        )
}
