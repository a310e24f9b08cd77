use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Tag, TagKind};
use crate::errors::TagError;

/// Lifecycle stage of an individual task
///
/// No transition rules are enforced here. Members carry no ordering; the
/// orchestrator decides which moves are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    New,
    /// Waiting for some event or dependency
    Awaiting,
    InProgress,
    /// Left incomplete
    Abandoned,
    Done,
}

impl Tag for TaskStatus {
    const KIND: TagKind = TagKind::TaskStatus;

    const ALL: &'static [Self] = &[
        TaskStatus::New,
        TaskStatus::Awaiting,
        TaskStatus::InProgress,
        TaskStatus::Abandoned,
        TaskStatus::Done,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "NEW",
            TaskStatus::Awaiting => "AWAITING",
            TaskStatus::InProgress => "INPROGRESS",
            TaskStatus::Abandoned => "ABANDONED",
            TaskStatus::Done => "DONE",
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn description(&self) -> &'static str {
        match self {
            TaskStatus::New => "Initial state of the task",
            TaskStatus::Awaiting => "Waiting for some event or dependency",
            TaskStatus::InProgress => "Currently being worked on",
            TaskStatus::Abandoned => "Left incomplete",
            TaskStatus::Done => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

/// Lifecycle stage of a project made of tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    /// Pre-init
    New,
    /// Waiting for setup to complete
    Initial,
    /// A task is being worked on
    Executing,
    /// An issue arose while executing a task
    Monitoring,
    /// Final state: every task finished, or something could not be resolved
    Halted,
}

impl ProjectStatus {
    /// Whether a human should be looped in
    ///
    /// # Example
    /// ```
    /// use workflow_tags::ProjectStatus;
    ///
    /// assert!(ProjectStatus::Halted.requires_human());
    /// assert!(!ProjectStatus::Monitoring.requires_human());
    /// ```
    pub fn requires_human(&self) -> bool {
        matches!(self, ProjectStatus::Halted)
    }
}

impl Tag for ProjectStatus {
    const KIND: TagKind = TagKind::ProjectStatus;

    const ALL: &'static [Self] = &[
        ProjectStatus::New,
        ProjectStatus::Initial,
        ProjectStatus::Executing,
        ProjectStatus::Monitoring,
        ProjectStatus::Halted,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::New => "NEW",
            ProjectStatus::Initial => "INITIAL",
            ProjectStatus::Executing => "EXECUTING",
            ProjectStatus::Monitoring => "MONITORING",
            ProjectStatus::Halted => "HALTED",
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn description(&self) -> &'static str {
        match self {
            ProjectStatus::New => "Pre-init state of the project",
            ProjectStatus::Initial => "Waiting for the setup to be completed",
            ProjectStatus::Executing => "A task is currently being worked on",
            ProjectStatus::Monitoring => "An issue has arisen while executing a task",
            ProjectStatus::Halted => {
                "All tasks completed or an issue could not be resolved; loop in a human"
            }
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s)
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
