//! SmartTask core data models.
//!
//! This crate defines tasks, users, the factory that creates them, and the
//! notices their operations produce.

#![warn(missing_docs)]

// Identities
mod id;

// Entities
mod task;
mod user;

// Construction
mod clock;
mod factory;

// Reporting and errors
mod notice;
mod error;

// Re-exports
pub use id::{IdAllocator, TaskId, UserId};

pub use task::{MarkDone, Task, TaskKind, TaskStatus, NO_DUE_DATE, UNTITLED};
pub use user::{
    validate_email, validate_name, TaskLookup, User, UserRules, INVALID, MIN_NAME_LEN,
};

pub use clock::{Clock, FixedClock, SystemClock};
pub use factory::{EntityFactory, FactoryConfig};

pub use notice::{ConsoleSink, Notice, NoticeSink, NullSink, RecordingSink, WriterSink};
pub use error::{CoreError, Result};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
