//! Task registry service.

use std::sync::Arc;

use smarttask_core::{
    CoreError, MarkDone, Notice, NoticeSink, NullSink, Task, TaskId, TaskLookup, TaskStatus,
    User, UserId,
};
use tracing::{debug, info};

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, ManagerError>;

/// Errors returned by [`TaskManager`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    /// No registered task has this id
    #[error("Unknown task: {0}")]
    UnknownTask(TaskId),

    /// No registered user has this id
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// A task with this id is already registered
    #[error("Duplicate task id: {0}")]
    DuplicateTask(TaskId),

    /// A user with this id is already registered
    #[error("Duplicate user id: {0}")]
    DuplicateUser(UserId),

    /// Error from the core model
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// The authoritative registry of every user and task.
///
/// Both collections are append-only and keep registration order. Ids are
/// unique within each collection.
pub struct TaskManager {
    users: Vec<User>,
    tasks: Vec<Task>,
    sink: Arc<dyn NoticeSink>,
}

impl TaskManager {
    /// Create an empty registry that discards notices.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            tasks: Vec::new(),
            sink: Arc::new(NullSink),
        }
    }

    /// Set where notices go.
    pub fn with_sink(mut self, sink: Arc<dyn NoticeSink>) -> Self {
        self.sink = sink;
        self
    }

    // === Registration ===

    /// Add a user to the registry.
    ///
    /// Fails if a user with the same id is already registered.
    pub fn register_user(&mut self, user: User) -> Result<UserId> {
        let id = user.id();
        if self.users.iter().any(|u| u.id() == id) {
            return Err(ManagerError::DuplicateUser(id));
        }
        debug!("Registering user {}: {}", id, user.name());
        self.sink.emit(&Notice::UserRegistered {
            name: user.name().to_string(),
        });
        self.users.push(user);
        Ok(id)
    }

    /// Add a task to the registry.
    ///
    /// Fails if a task with the same id is already registered.
    pub fn register_task(&mut self, task: Task) -> Result<TaskId> {
        let id = task.id();
        if self.tasks.iter().any(|t| t.id() == id) {
            return Err(ManagerError::DuplicateTask(id));
        }
        debug!("Registering task {}: {}", id, task.title());
        self.sink.emit(&Notice::TaskRegistered {
            title: task.title().to_string(),
        });
        self.tasks.push(task);
        Ok(id)
    }

    // === Lookups ===

    /// All registered users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All registered tasks in registration order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a registered user.
    pub fn user(&self, id: UserId) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id() == id)
            .ok_or(ManagerError::UnknownUser(id))
    }

    /// Find a registered user for modification.
    pub fn user_mut(&mut self, id: UserId) -> Result<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or(ManagerError::UnknownUser(id))
    }

    /// Find a registered task.
    pub fn task(&self, id: TaskId) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id() == id)
            .ok_or(ManagerError::UnknownTask(id))
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(ManagerError::UnknownTask(id))
    }

    // === Queries ===

    /// Tasks whose title contains `term`, ignoring case.
    ///
    /// An empty term matches every task.
    pub fn search_tasks(&self, term: &str) -> Vec<&Task> {
        let term = term.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.title().to_lowercase().contains(&term))
            .collect()
    }

    /// Tasks with exactly this status.
    pub fn search_by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status() == status).collect()
    }

    /// A user's tasks that are not Done, in the user's order.
    pub fn active_tasks(&self, user_id: UserId) -> Result<Vec<&Task>> {
        let user = self.user(user_id)?;
        Ok(user.active_tasks(self))
    }

    // === State changes ===

    /// Associate a registered task with a registered user.
    pub fn assign_task(&mut self, user_id: UserId, task_id: TaskId) -> Result<()> {
        let title = self.task(task_id)?.title().to_string();
        let user = self.user_mut(user_id)?;
        user.add_task(task_id);
        let notice = Notice::TaskAssigned {
            title,
            user: user.name().to_string(),
        };
        info!("Assigned task {} to user {}", task_id, user_id);
        self.sink.emit(&notice);
        Ok(())
    }

    /// Drop a task from a user's list. The registry keeps the task.
    ///
    /// Returns `false` when the user did not have the task.
    pub fn unassign_task(&mut self, user_id: UserId, task_id: TaskId) -> Result<bool> {
        let user = self.user_mut(user_id)?;
        match user.remove_task(task_id) {
            Ok(()) => {
                info!("Removed task {} from user {}", task_id, user_id);
                self.sink.emit(&Notice::TaskUnassigned { task_id });
                Ok(true)
            }
            Err(CoreError::TaskNotAssigned(_)) => {
                debug!("User {} has no task {}", user_id, task_id);
                self.sink.emit(&Notice::TaskNotAssigned { task_id });
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Mark a registered task as Done.
    pub fn mark_done(&mut self, task_id: TaskId) -> Result<MarkDone> {
        let task = self.task_mut(task_id)?;
        let outcome = task.mark_done();
        let title = task.title().to_string();
        let notice = match outcome {
            MarkDone::Completed => {
                info!("Task {} marked as done", task_id);
                Notice::TaskCompleted { title }
            }
            MarkDone::AlreadyDone => Notice::TaskAlreadyDone { title },
        };
        self.sink.emit(&notice);
        Ok(outcome)
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskLookup for TaskManager {
    fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }
}
