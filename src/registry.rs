// Serializable view of every tag set, as printed by `workflow-tags list`

use serde::Serialize;

use crate::tags::{AnyTag, TagKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub name: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

impl From<AnyTag> for TagEntry {
    fn from(tag: AnyTag) -> Self {
        Self {
            name: tag.name(),
            value: tag.as_str(),
            description: tag.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registry {
    #[serde(rename = "ConversationRole")]
    pub conversation_role: Vec<TagEntry>,
    #[serde(rename = "TaskStatus")]
    pub task_status: Vec<TagEntry>,
    #[serde(rename = "ProjectStatus")]
    pub project_status: Vec<TagEntry>,
}

impl Registry {
    pub fn snapshot() -> Self {
        Self {
            conversation_role: entries(TagKind::ConversationRole),
            task_status: entries(TagKind::TaskStatus),
            project_status: entries(TagKind::ProjectStatus),
        }
    }

    pub fn entries(&self, kind: TagKind) -> &[TagEntry] {
        match kind {
            TagKind::ConversationRole => &self.conversation_role,
            TagKind::TaskStatus => &self.task_status,
            TagKind::ProjectStatus => &self.project_status,
        }
    }
}

fn entries(kind: TagKind) -> Vec<TagEntry> {
    AnyTag::all_of(kind).into_iter().map(TagEntry::from).collect()
}
