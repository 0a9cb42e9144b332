//! Error types for the core model.

use crate::id::TaskId;

/// Result alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Conditions detected by the core model.
///
/// None of these are fatal. Validation failures are normalized to sentinel
/// values when a [`crate::User`] is built; the variants exist so callers and
/// tests can observe what happened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// User name below the minimum length
    #[error("name `{name}` has {len} characters, at least {min} required")]
    NameTooShort {
        /// Name as given
        name: String,
        /// Its length in characters
        len: usize,
        /// Required minimum
        min: usize,
    },

    /// Email missing `@` or `.`
    #[error("email `{0}` must contain both '@' and '.'")]
    InvalidEmail(String),

    /// Task id not present in the user's list
    #[error("task {0} is not assigned to this user")]
    TaskNotAssigned(TaskId),
}
