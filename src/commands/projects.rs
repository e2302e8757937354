//! Project command handlers

use colored::Colorize;
use prettytable::{cell, row, Table};

use crate::commands::{build_context, ensure_route, format_duration};
use crate::config::Config;
use crate::error::Result;
use crate::models::{NewProject, Project};
use crate::routes::Route;

/// List all projects
pub async fn run_list(config: &Config, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    actions.fetch_projects().await?;
    let projects = actions.store().projects();

    if json {
        println!("{}", serde_json::to_string_pretty(projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects yet; create one with `punchcard project create --name <name>`");
        return Ok(());
    }

    print_project_table(projects);
    Ok(())
}

/// Create a project
pub async fn run_create(config: &Config, name: String, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    let project = actions.create_project(&NewProject { name }).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        println!(
            "{} created project {} (id {})",
            "ok:".green().bold(),
            project.name.bold(),
            project.id
        );
    }
    Ok(())
}

/// Delete a project by id
pub async fn run_delete(config: &Config, id: i64, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Overview, actions.store())?;

    actions.delete_project(id).await?;

    if json {
        println!("{}", serde_json::json!({ "deleted": id }));
    } else {
        println!("{} deleted project {}", "ok:".green().bold(), id);
    }
    Ok(())
}

fn print_project_table(projects: &[Project]) {
    let mut table = Table::new();
    table.add_row(row!["ID", "Name", "Created", "Tracked"]);
    for project in projects {
        let created = project
            .created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(row![
            project.id,
            project.name,
            created,
            format_duration(project.total_time)
        ]);
    }
    table.printstd();
}
