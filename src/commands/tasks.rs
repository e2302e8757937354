//! Task command handlers

use colored::Colorize;
use prettytable::{cell, row, Table};

use crate::commands::{build_context, ensure_route, format_duration};
use crate::config::Config;
use crate::error::Result;
use crate::models::{NewTask, Task};
use crate::routes::Route;

/// List tasks, optionally filtered to one project
///
/// With `--project` the destination is that project's detail view; without
/// it the overview. Filtering happens client-side against the fetched
/// collection, the same way the detail view derives its task list.
pub async fn run_list(config: &Config, project: Option<i64>, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    let route = match project {
        Some(id) => Route::ProjectDetail(id),
        None => Route::Overview,
    };
    ensure_route(route, actions.store())?;

    actions.fetch_tasks().await?;

    let store = actions.store();
    let tasks: Vec<&Task> = match project {
        Some(id) => store.tasks_by_project(id),
        None => store.tasks().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        match project {
            Some(id) => println!("No tasks in project {}", id),
            None => println!("No tasks yet; create one with `punchcard task create`"),
        }
        return Ok(());
    }

    print_task_table(&tasks);
    Ok(())
}

/// Create a task in a project
pub async fn run_create(config: &Config, title: String, project: i64, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::ProjectDetail(project), actions.store())?;

    let task = actions
        .create_task(&NewTask {
            title,
            project_id: project,
        })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!(
            "{} created task {} (id {}) in project {}",
            "ok:".green().bold(),
            task.title.bold(),
            task.id,
            task.project_id
        );
    }
    Ok(())
}

/// Delete a task by id
pub async fn run_delete(config: &Config, id: i64, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    actions.delete_task(id).await?;

    if json {
        println!("{}", serde_json::json!({ "deleted": id }));
    } else {
        println!("{} deleted task {}", "ok:".green().bold(), id);
    }
    Ok(())
}

fn print_task_table(tasks: &[&Task]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Title", "Project", "Timer", "Tracked"]);
    for task in tasks {
        let timer = if task.is_timer_running {
            "running".green().to_string()
        } else {
            "-".to_string()
        };
        table.add_row(row![
            task.id,
            task.title,
            task.project_id,
            timer,
            format_duration(task.total_time)
        ]);
    }
    table.printstd();
}
