//! Task model - the unit of work tracked by SmartTask.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::id::TaskId;
use crate::Time;

/// Title stored when the caller supplies a blank one.
pub const UNTITLED: &str = "NO Title";

/// Rendering used when a task has no due date.
pub const NO_DUE_DATE: &str = "No due date";

/// A task represents a unit of work owned by the task registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: Option<Time>,
    status: TaskStatus,
    kind: TaskKind,
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not started
    Pending,
    /// Being worked on (no operation currently sets this)
    InProgress,
    /// Completed
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Done => "Done",
        };
        f.write_str(s)
    }
}

/// Category of a task. Each category carries at most one extra field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    /// Uncategorized task
    Plain,
    /// Household chore
    Home {
        /// Where the chore happens
        room: String,
    },
    /// Job-related task
    Work {
        /// Employer or client
        company: String,
    },
    /// Learning task
    Study {
        /// Topic being studied
        subject: String,
    },
}

impl TaskKind {
    /// The extra display line contributed by this category, if any.
    pub fn detail_line(&self) -> Option<String> {
        match self {
            Self::Plain => None,
            Self::Home { room } => Some(format!("Room: {room}")),
            Self::Work { company } => Some(format!("Company: {company}")),
            Self::Study { subject } => Some(format!("Subject: {subject}")),
        }
    }
}

/// Outcome of [`Task::mark_done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDone {
    /// The task moved to Done
    Completed,
    /// The task was already Done; nothing changed
    AlreadyDone,
}

impl Task {
    /// Build a task, normalizing its inputs.
    ///
    /// A blank `title` is replaced by `untitled`. A `due_date` strictly
    /// before `now` is dropped. Status always starts at Pending.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<Time>,
        kind: TaskKind,
        now: Time,
        untitled: &str,
    ) -> Self {
        let title = title.into();
        let title = if title.trim().is_empty() {
            untitled.to_string()
        } else {
            title
        };

        Self {
            id,
            title,
            description: description.into(),
            due_date: due_date.filter(|due| *due >= now),
            status: TaskStatus::Pending,
            kind,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Display title (never blank).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Due date, absent when none was given or it had already passed.
    pub fn due_date(&self) -> Option<Time> {
        self.due_date
    }

    /// Current status.
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Category and its extra field.
    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Whether the task still needs work.
    pub fn is_active(&self) -> bool {
        self.status != TaskStatus::Done
    }

    /// Move the task to Done. Calling it again is a no-op.
    pub fn mark_done(&mut self) -> MarkDone {
        if self.status == TaskStatus::Done {
            return MarkDone::AlreadyDone;
        }
        self.status = TaskStatus::Done;
        MarkDone::Completed
    }

    /// Due date as `day - month - year` in the local calendar.
    pub fn formatted_due_date(&self) -> String {
        match self.due_date {
            Some(due) => {
                let local = due.with_timezone(&Local);
                format!("{} - {} - {}", local.day(), local.month(), local.year())
            }
            None => NO_DUE_DATE.to_string(),
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "ID: {} | Title: {} | Status: {} | Due: {}",
            self.id,
            self.title,
            self.status,
            self.formatted_due_date()
        )?;
        write!(f, "Description: {}", self.description)?;
        if let Some(line) = self.kind.detail_line() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
