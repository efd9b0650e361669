//! Decoding tests against payloads shaped like the issue tracker REST API.

use mig_core::entities::{
    CustomField, Dashboard, Described, Filter, NamedRecord, Project, Record, Status,
};
use mig_core::{EntityKind, InstanceSnapshot};
use pretty_assertions::assert_eq;

const PROJECTS: &str = r#"[
    {
        "expand": "description,lead,issueTypes,url,projectKeys,permissions,insight",
        "self": "https://source.example.net/rest/api/3/project/10000",
        "id": "10000",
        "key": "OPS",
        "name": "Operations",
        "projectTypeKey": "software",
        "simplified": false
    },
    {
        "id": "10001",
        "key": "HR",
        "name": "People",
        "description": "People team requests"
    }
]"#;

const STATUSES: &str = r#"[
    {
        "id": "1",
        "name": "Open",
        "statusCategory": {"id": 2, "key": "new", "colorName": "blue-gray", "name": "To Do"}
    },
    {
        "id": "10001",
        "name": "Done"
    }
]"#;

#[test]
fn project_without_description_uses_placeholder() {
    let projects: Vec<Project> = serde_json::from_str(PROJECTS).unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].identity(), Some("OPS"));
    assert_eq!(projects[0].description(), "No description");
    assert_eq!(projects[1].description(), "People team requests");
}

#[test]
fn status_category_is_read_from_nested_object() {
    let statuses: Vec<Status> = serde_json::from_str(STATUSES).unwrap();
    assert_eq!(statuses[0].category_name(), "To Do");
    assert_eq!(statuses[1].category_name(), "N/A");
}

#[test]
fn wrongly_typed_field_is_rejected() {
    let result = serde_json::from_str::<Vec<NamedRecord>>(r#"[{"name": 42}]"#);
    assert!(result.is_err());
}

#[test]
fn null_description_is_treated_as_missing() {
    let records: Vec<NamedRecord> =
        serde_json::from_str(r#"[{"name": "Blocker", "description": null}]"#).unwrap();
    assert_eq!(records[0].description(), "No description");
}

#[test]
fn snapshot_json_uses_kind_tags() {
    let mut snapshot = InstanceSnapshot::new("https://source.example.net");
    snapshot.issue_types.push(NamedRecord::new("Bug", Some("A problem")));
    snapshot.custom_fields.push(CustomField::new("Team", Some("string")));
    snapshot.filters.push(Filter::named("My open issues"));
    snapshot.set_dashboards(vec![Dashboard::named("Ops")]);

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["issuetypes"][0]["name"], "Bug");
    assert_eq!(value["customfields"][0]["schema"]["type"], "string");
    assert_eq!(value["dashboards"][0]["name"], "Ops");

    let recovered = InstanceSnapshot::from_json(&value.to_string()).unwrap();
    assert_eq!(recovered, snapshot);
    assert_eq!(recovered.count(EntityKind::IssueTypes), 1);
    assert_eq!(recovered.count(EntityKind::Statuses), 0);
}

#[test]
fn partial_snapshot_defaults_missing_kinds() {
    let snapshot = InstanceSnapshot::from_json(r#"{"projects": [{"key": "A"}]}"#).unwrap();
    assert_eq!(snapshot.count(EntityKind::Projects), 1);
    for kind in EntityKind::ALL {
        if kind != EntityKind::Projects {
            assert_eq!(snapshot.count(kind), 0, "{kind}");
        }
    }
}
