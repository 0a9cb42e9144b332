//! User model and its validation rules.

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::id::{TaskId, UserId};
use crate::task::Task;

/// Value stored in place of an invalid name or email.
pub const INVALID: &str = "Invalid";

/// Minimum number of characters in a user name.
pub const MIN_NAME_LEN: usize = 3;

/// Resolves task ids to the tasks they refer to.
///
/// Users only hold ids; whoever owns the tasks implements this trait.
pub trait TaskLookup {
    /// Find a task by id.
    fn task(&self, id: TaskId) -> Option<&Task>;
}

impl TaskLookup for [Task] {
    fn task(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|t| t.id() == id)
    }
}

/// Validation settings applied when a [`User`] is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRules {
    /// Minimum name length, in characters
    pub min_name_len: usize,
    /// Stored in place of an invalid name or email
    pub invalid_value: String,
}

impl Default for UserRules {
    fn default() -> Self {
        Self {
            min_name_len: MIN_NAME_LEN,
            invalid_value: INVALID.to_string(),
        }
    }
}

/// A person with a list of associated tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    tasks: Vec<TaskId>,
}

impl User {
    /// Create a user, validating with the default [`UserRules`].
    ///
    /// An invalid name or email is replaced by [`INVALID`]; the original
    /// input is not kept.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_rules(id, name, email, &UserRules::default()).0
    }

    /// Create a user under `rules`, returning every field that was rejected.
    ///
    /// Rejected fields are stored as `rules.invalid_value`.
    pub fn with_rules(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        rules: &UserRules,
    ) -> (Self, Vec<CoreError>) {
        let mut name = name.into();
        let mut email = email.into();
        let mut rejected = Vec::new();

        if let Err(e) = validate_name(&name, rules.min_name_len) {
            rejected.push(e);
            name = rules.invalid_value.clone();
        }
        if let Err(e) = validate_email(&email) {
            rejected.push(e);
            email = rules.invalid_value.clone();
        }

        let user = Self {
            id,
            name,
            email,
            tasks: Vec::new(),
        };
        (user, rejected)
    }

    /// Unique identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Associated task ids in insertion order.
    pub fn task_ids(&self) -> &[TaskId] {
        &self.tasks
    }

    /// Associate a task. Duplicates are allowed.
    pub fn add_task(&mut self, task_id: TaskId) {
        self.tasks.push(task_id);
    }

    /// Drop the first association with `task_id`.
    ///
    /// The task itself is untouched; only this user's list changes.
    pub fn remove_task(&mut self, task_id: TaskId) -> Result<()> {
        let pos = self
            .tasks
            .iter()
            .position(|id| *id == task_id)
            .ok_or(CoreError::TaskNotAssigned(task_id))?;
        self.tasks.remove(pos);
        Ok(())
    }

    /// Associated tasks that are not Done, in insertion order.
    ///
    /// Ids the lookup cannot resolve are skipped.
    pub fn active_tasks<'a, L>(&self, lookup: &'a L) -> Vec<&'a Task>
    where
        L: TaskLookup + ?Sized,
    {
        self.tasks
            .iter()
            .filter_map(|id| lookup.task(*id))
            .filter(|task| task.is_active())
            .collect()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "User ID: {} | Name: {} | Email: {}",
            self.id, self.name, self.email
        )?;
        write!(f, "Total Tasks: {}", self.tasks.len())
    }
}

/// Check a user name against the minimum length.
pub fn validate_name(name: &str, min_len: usize) -> Result<()> {
    let len = name.chars().count();
    if len < min_len {
        return Err(CoreError::NameTooShort {
            name: name.to_string(),
            len,
            min: min_len,
        });
    }
    Ok(())
}

/// Check that an email contains both `@` and `.`.
pub fn validate_email(email: &str) -> Result<()> {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err(CoreError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskKind, UNTITLED};
    use chrono::{TimeZone, Utc};

    fn create_test_tasks(count: u64) -> Vec<Task> {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        (1..=count)
            .map(|n| {
                Task::new(
                    TaskId::new(n),
                    format!("Task {n}"),
                    "",
                    None,
                    TaskKind::Plain,
                    now,
                    UNTITLED,
                )
            })
            .collect()
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("John Doe", MIN_NAME_LEN).is_ok());
        assert!(validate_name("Ann", MIN_NAME_LEN).is_ok());
        assert_eq!(
            validate_name("Al", MIN_NAME_LEN),
            Err(CoreError::NameTooShort {
                name: "Al".to_string(),
                len: 2,
                min: 3
            })
        );
        assert!(validate_name("", MIN_NAME_LEN).is_err());
    }

    #[test]
    fn test_validate_name_counts_characters() {
        assert!(validate_name("Zoë", MIN_NAME_LEN).is_ok());
        assert!(validate_name("Żó", MIN_NAME_LEN).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("john@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("john@localhost").is_err());
        assert!(validate_email("john.doe").is_err());
        // Order of the two characters does not matter
        assert!(validate_email("a.b@c").is_ok());
    }

    #[test]
    fn test_new_replaces_invalid_fields() {
        let user = User::new(UserId::new(1), "Al", "invalid-email");
        assert_eq!(user.name(), INVALID);
        assert_eq!(user.email(), INVALID);

        let user = User::new(UserId::new(2), "Al", "al@example.com");
        assert_eq!(user.name(), INVALID);
        assert_eq!(user.email(), "al@example.com");
    }

    #[test]
    fn test_with_rules_reports_rejections() {
        let rules = UserRules {
            min_name_len: 5,
            invalid_value: "?".to_string(),
        };
        let (user, rejected) = User::with_rules(UserId::new(1), "John", "john", &rules);
        assert_eq!(user.name(), "?");
        assert_eq!(user.email(), "?");
        assert_eq!(
            rejected,
            vec![
                CoreError::NameTooShort {
                    name: "John".to_string(),
                    len: 4,
                    min: 5
                },
                CoreError::InvalidEmail("john".to_string()),
            ]
        );

        let (_, rejected) =
            User::with_rules(UserId::new(2), "John Doe", "john@example.com", &rules);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_add_task_keeps_order_and_duplicates() {
        let mut user = User::new(UserId::new(1), "John Doe", "john@example.com");
        user.add_task(TaskId::new(2));
        user.add_task(TaskId::new(1));
        user.add_task(TaskId::new(2));
        assert_eq!(
            user.task_ids(),
            &[TaskId::new(2), TaskId::new(1), TaskId::new(2)]
        );
    }

    #[test]
    fn test_remove_task_removes_first_match() {
        let mut user = User::new(UserId::new(1), "John Doe", "john@example.com");
        user.add_task(TaskId::new(2));
        user.add_task(TaskId::new(3));
        user.add_task(TaskId::new(2));

        assert!(user.remove_task(TaskId::new(2)).is_ok());
        assert_eq!(user.task_ids(), &[TaskId::new(3), TaskId::new(2)]);
    }

    #[test]
    fn test_remove_missing_task() {
        let mut user = User::new(UserId::new(1), "John Doe", "john@example.com");
        user.add_task(TaskId::new(1));
        assert_eq!(
            user.remove_task(TaskId::new(9)),
            Err(CoreError::TaskNotAssigned(TaskId::new(9)))
        );
        assert_eq!(user.task_ids().len(), 1);
    }

    #[test]
    fn test_active_tasks_excludes_done() {
        let mut tasks = create_test_tasks(4);
        tasks[1].mark_done();

        let mut user = User::new(UserId::new(1), "John Doe", "john@example.com");
        for id in [4, 2, 1, 3] {
            user.add_task(TaskId::new(id));
        }

        let active: Vec<_> = user
            .active_tasks(tasks.as_slice())
            .iter()
            .map(|t| t.id().get())
            .collect();
        assert_eq!(active, vec![4, 1, 3]);
    }

    #[test]
    fn test_active_tasks_skips_unknown_ids() {
        let tasks = create_test_tasks(1);
        let mut user = User::new(UserId::new(1), "John Doe", "john@example.com");
        user.add_task(TaskId::new(5));
        user.add_task(TaskId::new(1));
        assert_eq!(user.active_tasks(tasks.as_slice()).len(), 1);
    }

    #[test]
    fn test_display_user() {
        let mut user = User::new(UserId::new(3), "John Doe", "john@example.com");
        user.add_task(TaskId::new(1));
        assert_eq!(
            user.to_string(),
            "User ID: 3 | Name: John Doe | Email: john@example.com\nTotal Tasks: 1"
        );
    }
}
