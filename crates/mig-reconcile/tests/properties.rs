//! Cross-rule properties of reconciliation.

use std::collections::HashSet;

use mig_core::entities::{CustomField, Dashboard, Filter, NamedRecord, Project, Status};
use mig_core::{EntityKind, InstanceSnapshot};
use mig_reconcile::{Findings, reconcile};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn named(names: &[&str]) -> Vec<NamedRecord> {
    names.iter().map(|n| NamedRecord::new(*n, None)).collect()
}

fn snapshots() -> (InstanceSnapshot, InstanceSnapshot) {
    let mut source = InstanceSnapshot::new("https://source.example.net");
    let mut target = InstanceSnapshot::new("https://target.example.net");

    source.projects = vec![
        Project {
            key: Some("OPS".into()),
            name: Some("Operations".into()),
            description: Some("Ops".into()),
        },
        Project {
            key: Some("HR".into()),
            ..Project::default()
        },
    ];
    target.projects = vec![Project {
        key: Some("OPS".into()),
        description: Some("Other ops".into()),
        ..Project::default()
    }];

    source.priorities = named(&["Highest", "High", "Medium"]);
    target.priorities = named(&["High", "Low"]);
    source.resolutions = named(&["Done", "Won't Do"]);
    target.resolutions = named(&["Done"]);
    source.roles = named(&["Administrators", "Developers"]);
    target.roles = named(&["Administrators"]);
    source.issue_types = named(&["Bug", "Epic", "Story"]);
    target.issue_types = named(&["Task"]);

    source.filters = vec![Filter::named("Mine"), Filter::named("Ops")];
    target.filters = vec![Filter::named("Ops"), Filter::named("Theirs")];
    source.set_dashboards(vec![Dashboard::named("Ops"), Dashboard::named("Exec")]);
    target.set_dashboards(vec![
        Dashboard::named("Default dashboard"),
        Dashboard::named("Ops"),
    ]);

    source.custom_fields = vec![
        CustomField::new("Team", Some("string")),
        CustomField::new("Approvers", Some("multiuserpicker")),
        CustomField::new("Category", Some("option-with-child")),
        CustomField::new("Size", Some("number")),
        CustomField::new("Product", Some("project")),
    ];
    target.custom_fields = vec![
        CustomField::new("Team", Some("option")),
        CustomField::new("Category", Some("option-with-child")),
        CustomField::new("Size", Some("number")),
    ];

    source.statuses = vec![
        Status::new("Open", "NEW"),
        Status::new("Done", "DONE"),
        Status::new("Review", "INDETERMINATE"),
    ];
    target.statuses = vec![Status::new("Open", "INDETERMINATE"), Status::new("Done", "DONE")];

    (source, target)
}

#[rstest]
#[case(EntityKind::Projects)]
#[case(EntityKind::Priorities)]
#[case(EntityKind::Resolutions)]
#[case(EntityKind::Roles)]
#[case(EntityKind::IssueTypes)]
fn generic_rule_partitions_source_keys(#[case] kind: EntityKind) {
    let (source, target) = snapshots();
    let result = reconcile(kind, &source, &target).unwrap();
    let Findings::Generic { additions, merges } = result.findings else {
        panic!("{kind} should use the generic rule");
    };

    let added: HashSet<_> = additions.iter().map(|e| e.key.clone()).collect();
    let merged: HashSet<_> = merges.iter().map(|e| e.key.clone()).collect();
    assert!(added.is_disjoint(&merged));

    let source_keys: HashSet<String> = match kind {
        EntityKind::Projects => source.projects.iter().filter_map(|p| p.key.clone()).collect(),
        _ => source
            .named(kind)
            .unwrap()
            .iter()
            .filter_map(|r| r.name.clone())
            .collect(),
    };
    let union: HashSet<_> = added.union(&merged).cloned().collect();
    assert_eq!(union, source_keys);
}

#[test]
fn reconciliation_is_idempotent() {
    let (source, target) = snapshots();
    for kind in EntityKind::ALL {
        let first = reconcile(kind, &source, &target).unwrap();
        let second = reconcile(kind, &source, &target).unwrap();
        assert_eq!(first, second, "{kind}");
    }
}

#[test]
fn denylisted_custom_fields_are_never_added() {
    let (source, target) = snapshots();
    let result = reconcile(EntityKind::CustomFields, &source, &target).unwrap();
    let Findings::CustomFields {
        additions,
        conflicts,
        non_migratable,
    } = result.findings
    else {
        panic!("expected custom field findings");
    };

    assert!(additions.is_empty(), "{additions:?}");

    let blocked: Vec<_> = non_migratable.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(blocked, vec!["Approvers", "Category", "Product"]);

    let conflicting: Vec<_> = conflicts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(conflicting, vec!["Team"]);
    assert_eq!(result.counts.source, 5);
    assert_eq!(result.counts.target, 3);
}

#[test]
fn status_conflicts_only_on_category_change() {
    let (source, target) = snapshots();
    let result = reconcile(EntityKind::Statuses, &source, &target).unwrap();
    let Findings::Statuses {
        additions,
        conflicts,
    } = result.findings
    else {
        panic!("expected status findings");
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].name, "Open");
    assert_eq!(conflicts[0].source, "NEW");
    assert_eq!(conflicts[0].target, "INDETERMINATE");
    assert_eq!(additions.len(), 1);
    assert_eq!(additions[0].key, "Review");
}

#[rstest]
#[case(EntityKind::Filters)]
#[case(EntityKind::Dashboards)]
fn collisions_require_both_sides(#[case] kind: EntityKind) {
    let (source, target) = snapshots();
    let result = reconcile(kind, &source, &target).unwrap();
    assert_eq!(result.findings, Findings::Collisions { names: vec!["Ops".into()] });
}

#[test]
fn default_dashboard_is_not_counted() {
    let (source, target) = snapshots();
    let result = reconcile(EntityKind::Dashboards, &source, &target).unwrap();
    assert_eq!(result.counts.target, 1);
}

#[test]
fn findings_serialize_with_rule_tag() {
    let (source, target) = snapshots();
    let result = reconcile(EntityKind::Statuses, &source, &target).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["kind"], "statuses");
    assert_eq!(value["counts"]["source"], 3);
    assert_eq!(value["findings"]["rule"], "statuses");
    assert_eq!(value["findings"]["conflicts"][0]["target"], "INDETERMINATE");
}
