//! Text rendering of registry listings.
//!
//! Every function returns a block of lines without a trailing newline;
//! banners start with a blank line.

use smarttask_core::{Task, TaskStatus, User};

const SEPARATOR: &str = "---";

fn task_block<'a>(banner: String, tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut lines = vec![banner];
    for task in tasks {
        lines.push(task.to_string());
        lines.push(SEPARATOR.to_string());
    }
    lines.join("\n")
}

/// Every registered task, or a notice when there are none.
pub fn all_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks available.".to_string();
    }
    task_block("\n=== All Tasks ===".to_string(), tasks)
}

/// Results of a title search.
pub fn search_results(term: &str, tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No results found.".to_string();
    }
    task_block(
        format!("\n=== Search Results for '{term}' ==="),
        tasks.iter().copied(),
    )
}

/// Results of a status filter.
pub fn status_results(status: TaskStatus, tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No results found.".to_string();
    }
    task_block(
        format!("\n=== Tasks with Status: {status} ==="),
        tasks.iter().copied(),
    )
}

/// A user's unfinished tasks.
pub fn active_tasks(user: &User, tasks: &[&Task]) -> String {
    task_block(
        format!("User {} has {} active tasks:", user.name(), tasks.len()),
        tasks.iter().copied(),
    )
}

/// Every registered user, or a notice when there are none.
pub fn all_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users available.".to_string();
    }
    let mut lines = vec!["\n=== All Users ===".to_string()];
    lines.extend(users.iter().map(|u| format!("\n{u}")));
    lines.join("\n")
}
