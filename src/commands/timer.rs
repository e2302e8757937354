//! Timer command handlers
//!
//! Each handler posts to the timer endpoint and then reports the task's
//! running flag as re-fetched by the action layer, so what is printed is
//! the server's view rather than an assumption about what the POST did.

use colored::Colorize;

use crate::commands::{build_context, ensure_route};
use crate::config::Config;
use crate::error::Result;
use crate::routes::Route;

/// Start a timer on a task
pub async fn run_start(config: &Config, task_id: i64, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    actions.start_timer(task_id).await?;
    report(&actions, task_id, json);
    Ok(())
}

/// Pause the running timer on a task
pub async fn run_pause(config: &Config, task_id: i64, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    actions.pause_timer(task_id).await?;
    report(&actions, task_id, json);
    Ok(())
}

/// Stop the running timer on a task
pub async fn run_stop(config: &Config, task_id: i64, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    actions.stop_timer(task_id).await?;
    report(&actions, task_id, json);
    Ok(())
}

fn report(actions: &crate::actions::Actions, task_id: i64, json: bool) {
    let running = actions.store().active_timer(task_id);
    if json {
        println!(
            "{}",
            serde_json::json!({ "task_id": task_id, "running": running })
        );
    } else if running {
        println!("{} timer running on task {}", "ok:".green().bold(), task_id);
    } else {
        println!("{} no timer running on task {}", "ok:".green().bold(), task_id);
    }
}
