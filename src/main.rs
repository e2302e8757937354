//! Punchcard - task and time tracking CLI
//!
//! Main entry point: initializes tracing, loads configuration, and
//! dispatches the parsed subcommand to its handler.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use punchcard::cli::{Cli, Commands, ProjectCommand, TaskCommand, TimerCommand};
use punchcard::commands;
use punchcard::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config = Config::load(cli.config.as_deref(), &cli)?;

    // Validate configuration
    config.validate()?;

    let json = cli.json;

    // Execute command
    match cli.command {
        Commands::Login { username, password } => {
            tracing::info!("Starting login for {}", username);
            commands::auth::run_login(&config, username, password, json).await?;
            Ok(())
        }
        Commands::Register { username, password } => {
            tracing::info!("Registering account {}", username);
            commands::auth::run_register(&config, username, password, json).await?;
            Ok(())
        }
        Commands::Logout => {
            commands::auth::run_logout(&config, json).await?;
            Ok(())
        }
        Commands::Status => {
            commands::auth::run_status(&config, json).await?;
            Ok(())
        }
        Commands::Project { command } => match command {
            ProjectCommand::List => {
                commands::projects::run_list(&config, json).await?;
                Ok(())
            }
            ProjectCommand::Create { name } => {
                commands::projects::run_create(&config, name, json).await?;
                Ok(())
            }
            ProjectCommand::Delete { id } => {
                commands::projects::run_delete(&config, id, json).await?;
                Ok(())
            }
        },
        Commands::Task { command } => match command {
            TaskCommand::List { project } => {
                commands::tasks::run_list(&config, project, json).await?;
                Ok(())
            }
            TaskCommand::Create { title, project } => {
                commands::tasks::run_create(&config, title, project, json).await?;
                Ok(())
            }
            TaskCommand::Delete { id } => {
                commands::tasks::run_delete(&config, id, json).await?;
                Ok(())
            }
        },
        Commands::Timer { command } => match command {
            TimerCommand::Start { task_id } => {
                tracing::info!("Starting timer on task {}", task_id);
                commands::timer::run_start(&config, task_id, json).await?;
                Ok(())
            }
            TimerCommand::Pause { task_id } => {
                tracing::info!("Pausing timer on task {}", task_id);
                commands::timer::run_pause(&config, task_id, json).await?;
                Ok(())
            }
            TimerCommand::Stop { task_id } => {
                tracing::info!("Stopping timer on task {}", task_id);
                commands::timer::run_stop(&config, task_id, json).await?;
                Ok(())
            }
        },
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "punchcard=debug"
    } else {
        "punchcard=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
