//! Construction of tasks and users.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::id::IdAllocator;
use crate::notice::{Notice, NoticeSink, NullSink};
use crate::task::{Task, TaskKind, UNTITLED};
use crate::user::{User, UserRules};
use crate::Time;

/// Normalization settings for the factory.
#[derive(Debug, Clone)]
pub struct FactoryConfig {
    /// Title used when a task is created with a blank one
    pub untitled_title: String,
    /// Validation applied to new users
    pub user_rules: UserRules,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            untitled_title: UNTITLED.to_string(),
            user_rules: UserRules::default(),
        }
    }
}

/// Creates tasks and users with fresh ids.
///
/// Owns the id counters, so two factories never share a sequence.
pub struct EntityFactory {
    ids: IdAllocator,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn NoticeSink>,
    config: FactoryConfig,
}

impl EntityFactory {
    /// Create a factory reading the system clock and discarding notices.
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            clock: Arc::new(SystemClock),
            sink: Arc::new(NullSink),
            config: FactoryConfig::default(),
        }
    }

    /// Set the clock used for due-date checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Set where validation notices go.
    pub fn with_sink(mut self, sink: Arc<dyn NoticeSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Current time according to the factory's clock.
    pub fn now(&self) -> Time {
        self.clock.now()
    }

    /// Create a task of any kind.
    pub fn task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<Time>,
        kind: TaskKind,
    ) -> Task {
        let id = self.ids.next_task_id();
        let now = self.clock.now();
        Task::new(
            id,
            title,
            description,
            due_date,
            kind,
            now,
            &self.config.untitled_title,
        )
    }

    /// Create an uncategorized task.
    pub fn plain(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<Time>,
    ) -> Task {
        self.task(title, description, due_date, TaskKind::Plain)
    }

    /// Create a household task.
    pub fn home(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<Time>,
        room: impl Into<String>,
    ) -> Task {
        let kind = TaskKind::Home { room: room.into() };
        self.task(title, description, due_date, kind)
    }

    /// Create a job-related task.
    pub fn work(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<Time>,
        company: impl Into<String>,
    ) -> Task {
        let kind = TaskKind::Work { company: company.into() };
        self.task(title, description, due_date, kind)
    }

    /// Create a learning task.
    pub fn study(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<Time>,
        subject: impl Into<String>,
    ) -> Task {
        let kind = TaskKind::Study { subject: subject.into() };
        self.task(title, description, due_date, kind)
    }

    /// Create a user, replacing an invalid name or email with the sentinel.
    ///
    /// Each replacement emits a notice; the original input is not kept.
    pub fn user(&mut self, name: impl Into<String>, email: impl Into<String>) -> User {
        let id = self.ids.next_user_id();
        let (user, rejected) = User::with_rules(id, name, email, &self.config.user_rules);

        for error in rejected {
            let notice = match error {
                CoreError::NameTooShort { name, .. } => Notice::InvalidName { given: name },
                CoreError::InvalidEmail(given) => Notice::InvalidEmail { given },
                CoreError::TaskNotAssigned(_) => continue,
            };
            self.sink.emit(&notice);
        }

        user
    }
}

impl Default for EntityFactory {
    fn default() -> Self {
        Self::new()
    }
}
