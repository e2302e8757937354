//! Command-line interface definition for Punchcard
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for authentication, project and task management,
//! and timer control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Punchcard - task and time tracking from the terminal
///
/// Talks to a remote task tracker API: log in once, then manage projects
/// and tasks and start or stop timers against them.
#[derive(Parser, Debug, Clone)]
#[command(name = "punchcard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long)]
    pub api_url: Option<String>,

    /// Emit machine-readable JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Punchcard
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long, env = "PUNCHCARD_PASSWORD")]
        password: String,
    },

    /// Create a new account
    Register {
        /// Desired login name
        #[arg(short, long)]
        username: String,

        /// Desired password
        #[arg(short, long, env = "PUNCHCARD_PASSWORD")]
        password: String,
    },

    /// Discard the stored session
    Logout,

    /// Show whether a session is stored
    Status,

    /// Manage projects
    Project {
        /// Project subcommand
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Manage tasks
    Task {
        /// Task subcommand
        #[command(subcommand)]
        command: TaskCommand,
    },

    /// Control task timers
    Timer {
        /// Timer subcommand
        #[command(subcommand)]
        command: TimerCommand,
    },
}

/// Project management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProjectCommand {
    /// List all projects
    List,

    /// Create a project
    Create {
        /// Project name
        #[arg(short, long)]
        name: String,
    },

    /// Delete a project by id
    Delete {
        /// Project id
        id: i64,
    },
}

/// Task management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TaskCommand {
    /// List tasks, optionally for one project
    List {
        /// Only show tasks belonging to this project id
        #[arg(short, long)]
        project: Option<i64>,
    },

    /// Create a task in a project
    Create {
        /// Task title
        #[arg(short, long)]
        title: String,

        /// Id of the project the task belongs to
        #[arg(short, long)]
        project: i64,
    },

    /// Delete a task by id
    Delete {
        /// Task id
        id: i64,
    },
}

/// Timer control subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TimerCommand {
    /// Start a timer on a task
    Start {
        /// Task id
        task_id: i64,
    },

    /// Pause the running timer on a task
    Pause {
        /// Task id
        task_id: i64,
    },

    /// Stop the running timer on a task
    Stop {
        /// Task id
        task_id: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
