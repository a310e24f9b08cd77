use thiserror::Error;

use crate::tags::TagKind;

/// Errors raised when resolving tags
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("Invalid {kind} tag: {value:?}")]
    InvalidTag { kind: TagKind, value: String },

    #[error("Unknown tag kind: {0:?} (expected ConversationRole, TaskStatus or ProjectStatus)")]
    UnknownKind(String),
}

impl TagError {
    pub(crate) fn invalid(kind: TagKind, value: &str) -> Self {
        tracing::debug!(%kind, value, "rejected tag outside closed set");
        TagError::InvalidTag {
            kind,
            value: value.to_string(),
        }
    }
}

pub type TagResult<T> = Result<T, TagError>;
