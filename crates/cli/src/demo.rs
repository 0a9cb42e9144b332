//! The fixed demonstration sequence.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use smarttask_core::{Clock, EntityFactory, NoticeSink, TaskStatus, WriterSink};
use smarttask_work::{report, TaskManager};
use tracing::info;

/// Run the demonstration, writing every notice and report to `out`.
pub fn run<W>(out: Arc<WriterSink<W>>, clock: Arc<dyn Clock>) -> Result<()>
where
    W: Write + Send + 'static,
{
    let sink: Arc<dyn NoticeSink> = out.clone();
    let mut factory = EntityFactory::new()
        .with_clock(clock)
        .with_sink(sink.clone());
    let mut manager = TaskManager::new().with_sink(sink);

    out.write_line("=== Smart Task Manager System ===\n")?;

    // Users
    let john = factory.user("John Doe", "john@example.com");
    let al = factory.user("Al", "invalid-email");
    let john = manager.register_user(john)?;
    manager.register_user(al)?;

    // Tasks
    let now = factory.now();
    let groceries = factory.plain(
        "Buy groceries",
        "Get milk and bread",
        Some(now + Duration::days(2)),
    );
    let kitchen = factory.home(
        "Clean kitchen",
        "Deep clean",
        Some(now + Duration::days(1)),
        "Kitchen",
    );
    let report_task = factory.work(
        "Finish report",
        "Q4 report",
        Some(now + Duration::days(5)),
        "TechCorp",
    );
    let study = factory.study(
        "Study OOP",
        "Learn inheritance",
        Some(now + Duration::days(3)),
        "Computer Science",
    );

    let groceries = manager.register_task(groceries)?;
    let kitchen = manager.register_task(kitchen)?;
    let report_task = manager.register_task(report_task)?;
    manager.register_task(study)?;

    for task in [groceries, kitchen, report_task] {
        manager.assign_task(john, task)?;
    }

    out.write_line(&report::all_tasks(manager.tasks()))?;

    out.write_line("\n=== Marking Task as Done ===")?;
    manager.mark_done(groceries)?;

    out.write_line("\n=== Search Feature ===")?;
    let term = "clean";
    out.write_line(&report::search_results(term, &manager.search_tasks(term)))?;
    let status = TaskStatus::Pending;
    let by_status = manager.search_by_status(status);
    out.write_line(&report::status_results(status, &by_status))?;

    out.write_line("\n=== Active Tasks for User ===")?;
    let active = manager.active_tasks(john)?;
    out.write_line(&report::active_tasks(manager.user(john)?, &active))?;

    out.write_line("\n=== Remove Task ===")?;
    manager.unassign_task(john, kitchen)?;

    out.write_line(&report::all_users(manager.users()))?;

    out.write_line("\n=== Program Complete ===")?;
    info!(
        "Demo finished with {} users and {} tasks",
        manager.users().len(),
        manager.tasks().len()
    );
    Ok(())
}
