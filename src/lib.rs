//! Workflow Tags Library
//!
//! Closed sets of string-backed tags shared by the agent workflow:
//! conversation roles for messages, and lifecycle statuses for tasks and
//! projects. Each tag renders as its canonical literal and only parses back
//! from a member of its own set.

pub mod config;
pub mod errors;
pub mod registry;
pub mod tags;

pub use errors::{TagError, TagResult};
pub use tags::{AnyTag, ConversationRole, ProjectStatus, Tag, TagKind, TaskStatus};
