//! Task registry and reporting.
//!
//! The [`TaskManager`] owns every user and task; [`report`] renders its
//! query results as console text.

#![warn(missing_docs)]

pub mod manager;
pub mod report;

pub use manager::{ManagerError, Result, TaskManager};
