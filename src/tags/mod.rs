// Symbolic tag registry
//
// Three independent closed sets of string-backed tags used by the workflow
// orchestrator: who sent a message, where a task is, where a project is.

pub mod role;
pub mod status;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{TagError, TagResult};

pub use role::ConversationRole;
pub use status::{ProjectStatus, TaskStatus};

/// Identifies which closed set a tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    ConversationRole,
    TaskStatus,
    ProjectStatus,
}

impl TagKind {
    pub const ALL: &'static [TagKind] = &[
        TagKind::ConversationRole,
        TagKind::TaskStatus,
        TagKind::ProjectStatus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::ConversationRole => "ConversationRole",
            TagKind::TaskStatus => "TaskStatus",
            TagKind::ProjectStatus => "ProjectStatus",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagKind {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TagKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TagError::UnknownKind(s.to_string()))
    }
}

/// A closed set of named, string-backed tags
///
/// Implementors are plain `Copy` enums. Lookups are exact and case-sensitive;
/// anything outside `ALL` is rejected with [`TagError::InvalidTag`].
///
/// # Example
/// ```
/// use workflow_tags::{Tag, TaskStatus};
///
/// assert_eq!(TaskStatus::from_name("INPROGRESS").unwrap(), TaskStatus::InProgress);
/// assert!(TaskStatus::from_name("MAYBE").is_err());
/// ```
pub trait Tag: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// The closed set this type represents
    const KIND: TagKind;

    /// Every member, in declaration order
    const ALL: &'static [Self];

    /// Canonical literal value
    fn as_str(&self) -> &'static str;

    /// Symbolic name, e.g. `"AI"` for the assistant role
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Resolves a canonical literal
    fn from_value(value: &str) -> TagResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| TagError::invalid(Self::KIND, value))
    }

    /// Resolves a symbolic name
    fn from_name(name: &str) -> TagResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == name)
            .ok_or_else(|| TagError::invalid(Self::KIND, name))
    }

    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::ALL.iter().copied()
    }
}

/// A tag qualified by its kind
///
/// Equality compares the kind first, so statuses that share a literal
/// (`TaskStatus::New` and `ProjectStatus::New` both render as `"NEW"`) stay
/// distinct when stored side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum AnyTag {
    #[serde(rename = "ConversationRole")]
    Role(ConversationRole),
    #[serde(rename = "TaskStatus")]
    Task(TaskStatus),
    #[serde(rename = "ProjectStatus")]
    Project(ProjectStatus),
}

impl AnyTag {
    /// Resolves `value` as a canonical literal within the set named by `kind`
    pub fn parse(kind: TagKind, value: &str) -> TagResult<Self> {
        Ok(match kind {
            TagKind::ConversationRole => AnyTag::Role(ConversationRole::from_value(value)?),
            TagKind::TaskStatus => AnyTag::Task(TaskStatus::from_value(value)?),
            TagKind::ProjectStatus => AnyTag::Project(ProjectStatus::from_value(value)?),
        })
    }

    /// Resolves `name` as a symbolic name within the set named by `kind`
    pub fn parse_name(kind: TagKind, name: &str) -> TagResult<Self> {
        Ok(match kind {
            TagKind::ConversationRole => AnyTag::Role(ConversationRole::from_name(name)?),
            TagKind::TaskStatus => AnyTag::Task(TaskStatus::from_name(name)?),
            TagKind::ProjectStatus => AnyTag::Project(ProjectStatus::from_name(name)?),
        })
    }

    pub fn kind(&self) -> TagKind {
        match self {
            AnyTag::Role(_) => TagKind::ConversationRole,
            AnyTag::Task(_) => TagKind::TaskStatus,
            AnyTag::Project(_) => TagKind::ProjectStatus,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnyTag::Role(tag) => tag.as_str(),
            AnyTag::Task(tag) => tag.as_str(),
            AnyTag::Project(tag) => tag.as_str(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnyTag::Role(tag) => tag.name(),
            AnyTag::Task(tag) => tag.name(),
            AnyTag::Project(tag) => tag.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnyTag::Role(tag) => tag.description(),
            AnyTag::Task(tag) => tag.description(),
            AnyTag::Project(tag) => tag.description(),
        }
    }

    /// Every tag of the given kind
    pub fn all_of(kind: TagKind) -> Vec<AnyTag> {
        match kind {
            TagKind::ConversationRole => ConversationRole::iter().map(AnyTag::Role).collect(),
            TagKind::TaskStatus => TaskStatus::iter().map(AnyTag::Task).collect(),
            TagKind::ProjectStatus => ProjectStatus::iter().map(AnyTag::Project).collect(),
        }
    }
}

impl fmt::Display for AnyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ConversationRole> for AnyTag {
    fn from(tag: ConversationRole) -> Self {
        AnyTag::Role(tag)
    }
}

impl From<TaskStatus> for AnyTag {
    fn from(tag: TaskStatus) -> Self {
        AnyTag::Task(tag)
    }
}

impl From<ProjectStatus> for AnyTag {
    fn from(tag: ProjectStatus) -> Self {
        AnyTag::Project(tag)
    }
}
