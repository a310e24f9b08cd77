use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Tag, TagKind};
use crate::errors::TagError;

/// Role of the sender of a message in a conversation with the LLM
///
/// Messages in the graph state are labelled with one of these so the prompt
/// template knows who said what.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ConversationRole {
    /// The assistant (`AI`)
    #[serde(rename = "assistant")]
    Ai,
    #[serde(rename = "tool")]
    Tool,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "system")]
    System,
}

impl Tag for ConversationRole {
    const KIND: TagKind = TagKind::ConversationRole;

    const ALL: &'static [Self] = &[
        ConversationRole::Ai,
        ConversationRole::Tool,
        ConversationRole::User,
        ConversationRole::System,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ConversationRole::Ai => "assistant",
            ConversationRole::Tool => "tool",
            ConversationRole::User => "user",
            ConversationRole::System => "system",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConversationRole::Ai => "AI",
            ConversationRole::Tool => "TOOL",
            ConversationRole::User => "USER",
            ConversationRole::System => "SYSTEM",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ConversationRole::Ai => "The assistant's role in the conversation",
            ConversationRole::Tool => "A tool's role in the conversation",
            ConversationRole::User => "The user's role in the conversation",
            ConversationRole::System => "The system's role in the conversation",
        }
    }
}

impl fmt::Display for ConversationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationRole {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<String> for ConversationRole {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
