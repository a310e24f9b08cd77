//! Registry-wide tests
//!
//! These tests check every member of every tag set against the literal
//! table consumers persist and compare against:
//! - canonical strings
//! - lookups by value and by symbolic name
//! - closed membership
//! - no aliasing across kinds

use proptest::prelude::*;
use workflow_tags::{
    AnyTag, ConversationRole, ProjectStatus, Tag, TagError, TagKind, TaskStatus,
};

const ROLES: &[(ConversationRole, &str, &str)] = &[
    (ConversationRole::Ai, "AI", "assistant"),
    (ConversationRole::Tool, "TOOL", "tool"),
    (ConversationRole::User, "USER", "user"),
    (ConversationRole::System, "SYSTEM", "system"),
];

const TASKS: &[(TaskStatus, &str)] = &[
    (TaskStatus::New, "NEW"),
    (TaskStatus::Awaiting, "AWAITING"),
    (TaskStatus::InProgress, "INPROGRESS"),
    (TaskStatus::Abandoned, "ABANDONED"),
    (TaskStatus::Done, "DONE"),
];

const PROJECTS: &[(ProjectStatus, &str)] = &[
    (ProjectStatus::New, "NEW"),
    (ProjectStatus::Initial, "INITIAL"),
    (ProjectStatus::Executing, "EXECUTING"),
    (ProjectStatus::Monitoring, "MONITORING"),
    (ProjectStatus::Halted, "HALTED"),
];

fn every_tag() -> Vec<AnyTag> {
    TagKind::ALL
        .iter()
        .flat_map(|kind| AnyTag::all_of(*kind))
        .collect()
}

#[test]
fn roles_match_literal_table() {
    assert_eq!(ConversationRole::ALL.len(), ROLES.len());
    for (role, name, value) in ROLES {
        assert_eq!(role.as_str(), *value);
        assert_eq!(role.to_string(), *value);
        assert_eq!(role.name(), *name);
        assert_eq!(ConversationRole::from_name(name).unwrap(), *role);
        assert_eq!(value.parse::<ConversationRole>().unwrap(), *role);
    }
}

#[test]
fn task_statuses_match_literal_table() {
    assert_eq!(TaskStatus::ALL.len(), TASKS.len());
    for (status, value) in TASKS {
        assert_eq!(status.as_str(), *value);
        assert_eq!(status.to_string(), *value);
        assert_eq!(TaskStatus::from_name(value).unwrap(), *status);
        assert_eq!(value.parse::<TaskStatus>().unwrap(), *status);
    }
}

#[test]
fn project_statuses_match_literal_table() {
    assert_eq!(ProjectStatus::ALL.len(), PROJECTS.len());
    for (status, value) in PROJECTS {
        assert_eq!(status.as_str(), *value);
        assert_eq!(status.to_string(), *value);
        assert_eq!(ProjectStatus::from_name(value).unwrap(), *status);
        assert_eq!(value.parse::<ProjectStatus>().unwrap(), *status);
    }
}

#[test]
fn every_tag_parses_back_to_itself() {
    for tag in every_tag() {
        assert_eq!(AnyTag::parse(tag.kind(), tag.as_str()).unwrap(), tag);
        assert_eq!(AnyTag::parse_name(tag.kind(), tag.name()).unwrap(), tag);

        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(serde_json::from_str::<AnyTag>(&json).unwrap(), tag);
    }
}

#[test]
fn tags_equal_only_to_themselves() {
    let tags = every_tag();
    assert_eq!(tags.len(), 14);
    for (i, a) in tags.iter().enumerate() {
        for (j, b) in tags.iter().enumerate() {
            assert_eq!(a == b, i == j, "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn new_is_shared_text_but_distinct_tag() {
    assert_eq!(TaskStatus::New.to_string(), ProjectStatus::New.to_string());
    assert_ne!(AnyTag::from(TaskStatus::New), AnyTag::from(ProjectStatus::New));
}

#[test]
fn unknown_name_fails_without_default() {
    match TaskStatus::from_name("MAYBE") {
        Err(TagError::InvalidTag { kind, value }) => {
            assert_eq!(kind, TagKind::TaskStatus);
            assert_eq!(value, "MAYBE");
        }
        other => panic!("expected InvalidTag, got {:?}", other),
    }
}

#[test]
fn unknown_kind_is_reported() {
    assert!(matches!(
        "Role".parse::<TagKind>(),
        Err(TagError::UnknownKind(_))
    ));
}

#[test]
fn wire_values_are_literals() {
    let roles: Vec<ConversationRole> =
        serde_json::from_str(r#"["assistant","tool","user","system"]"#).unwrap();
    assert_eq!(roles, ConversationRole::ALL);

    let json = serde_json::to_string(&TaskStatus::ALL).unwrap();
    assert_eq!(json, r#"["NEW","AWAITING","INPROGRESS","ABANDONED","DONE"]"#);
}

proptest! {
    #[test]
    fn strings_outside_the_set_are_rejected(s in "\\PC*") {
        let known_role = ROLES.iter().any(|(_, _, v)| *v == s);
        prop_assert_eq!(s.parse::<ConversationRole>().is_ok(), known_role);

        let known_task = TASKS.iter().any(|(_, v)| *v == s);
        prop_assert_eq!(s.parse::<TaskStatus>().is_ok(), known_task);

        let known_project = PROJECTS.iter().any(|(_, v)| *v == s);
        prop_assert_eq!(s.parse::<ProjectStatus>().is_ok(), known_project);
    }

    #[test]
    fn case_variants_of_literals_are_rejected(idx in 0usize..4) {
        let (_, _, value) = ROLES[idx];
        let upper = value.to_ascii_uppercase();
        prop_assert!(upper.parse::<ConversationRole>().is_err());
        prop_assert!(ConversationRole::from_value(&upper).is_err());
    }
}
