//! Notices - human-readable reports of what an operation did.
//!
//! Operations on the model are pure; whatever they want to tell the user is
//! described by a [`Notice`] and handed to a [`NoticeSink`]. Callers choose
//! whether notices are printed, collected or ignored.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use crate::id::TaskId;

/// Something worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A user name failed validation and was replaced
    InvalidName {
        /// Rejected input
        given: String,
    },
    /// A user email failed validation and was replaced
    InvalidEmail {
        /// Rejected input
        given: String,
    },
    /// A user joined the registry
    UserRegistered {
        /// Stored user name
        name: String,
    },
    /// A task joined the registry
    TaskRegistered {
        /// Task title
        title: String,
    },
    /// A task was associated with a user
    TaskAssigned {
        /// Task title
        title: String,
        /// User name
        user: String,
    },
    /// A task association was dropped from a user
    TaskUnassigned {
        /// Removed task
        task_id: TaskId,
    },
    /// A removal targeted a task the user does not have
    TaskNotAssigned {
        /// Requested task
        task_id: TaskId,
    },
    /// A task moved to Done
    TaskCompleted {
        /// Task title
        title: String,
    },
    /// Mark-done on a task that was already Done
    TaskAlreadyDone {
        /// Task title
        title: String,
    },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { .. } => f.write_str("Invalid name"),
            Self::InvalidEmail { .. } => f.write_str("Invalid email"),
            Self::UserRegistered { name } => write!(f, "User '{name}' added successfully."),
            Self::TaskRegistered { title } => write!(f, "Task '{title}' added to system."),
            Self::TaskAssigned { title, user } => {
                write!(f, "Task '{title}' added to user {user}.")
            }
            Self::TaskUnassigned { task_id } => write!(f, "Task ID {task_id} removed."),
            Self::TaskNotAssigned { task_id } => write!(f, "Task ID {task_id} not found."),
            Self::TaskCompleted { title } => write!(f, "Task '{title}' marked as done."),
            Self::TaskAlreadyDone { .. } => f.write_str("Task is already done."),
        }
    }
}

/// Receives notices as they happen.
pub trait NoticeSink: Send + Sync {
    /// Handle one notice.
    fn emit(&self, notice: &Notice);
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NoticeSink for NullSink {
    fn emit(&self, _notice: &Notice) {}
}

/// Writes every notice on its own line to a writer.
///
/// Callers can interleave their own text with [`WriterSink::write_line`].
#[derive(Debug)]
pub struct WriterSink<W> {
    out: Mutex<W>,
}

/// Prints notices to stdout.
pub type ConsoleSink = WriterSink<Stdout>;

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Write `text` followed by a newline.
    pub fn write_line(&self, text: &str) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "output lock poisoned"))?;
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl WriterSink<Stdout> {
    /// A sink printing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> NoticeSink for WriterSink<W> {
    fn emit(&self, notice: &Notice) {
        // Notices are best effort; a broken writer only loses the line.
        let _ = self.write_line(&notice.to_string());
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Recorded notices rendered as text.
    pub fn lines(&self) -> Vec<String> {
        self.notices().iter().map(ToString::to_string).collect()
    }
}

impl NoticeSink for RecordingSink {
    fn emit(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_wording() {
        let cases = [
            (Notice::InvalidName { given: "Al".into() }, "Invalid name"),
            (Notice::InvalidEmail { given: "x".into() }, "Invalid email"),
            (
                Notice::UserRegistered { name: "John Doe".into() },
                "User 'John Doe' added successfully.",
            ),
            (
                Notice::TaskRegistered { title: "Buy groceries".into() },
                "Task 'Buy groceries' added to system.",
            ),
            (
                Notice::TaskAssigned {
                    title: "Buy groceries".into(),
                    user: "John Doe".into(),
                },
                "Task 'Buy groceries' added to user John Doe.",
            ),
            (Notice::TaskUnassigned { task_id: TaskId::new(2) }, "Task ID 2 removed."),
            (Notice::TaskNotAssigned { task_id: TaskId::new(9) }, "Task ID 9 not found."),
            (
                Notice::TaskCompleted { title: "Report".into() },
                "Task 'Report' marked as done.",
            ),
            (
                Notice::TaskAlreadyDone { title: "Report".into() },
                "Task is already done.",
            ),
        ];
        for (notice, expected) in cases {
            assert_eq!(notice.to_string(), expected);
        }
    }

    #[test]
    fn test_writer_sink_interleaves_lines() {
        let sink = WriterSink::new(Vec::<u8>::new());
        sink.write_line("=== Banner ===").unwrap();
        sink.emit(&Notice::TaskUnassigned { task_id: TaskId::new(3) });
        sink.emit(&Notice::TaskAlreadyDone { title: "Report".into() });

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "=== Banner ===\nTask ID 3 removed.\nTask is already done.\n");
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(&Notice::TaskRegistered { title: "A".into() });
        sink.emit(&Notice::TaskRegistered { title: "B".into() });
        assert_eq!(
            sink.lines(),
            vec!["Task 'A' added to system.", "Task 'B' added to system."]
        );
    }
}
