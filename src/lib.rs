//! Punchcard - task and time tracking CLI library
//!
//! This library provides the core functionality for the Punchcard client:
//! a typed adapter over the remote task tracker API, a central state store
//! with durable session persistence, and the action layer tying the two
//! together.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: typed HTTP adapter with explicit per-request bearer tokens
//! - `store`: central state store (session + in-memory collections)
//! - `actions`: one async operation per use case, committing into the store
//! - `routes`: destinations and the navigation guard for protected ones
//! - `session`: durable session persistence behind the `SessionStore` seam
//! - `models`: wire-level request/response payloads
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//! - `commands`: CLI command handlers
//!
//! # Example
//!
//! ```no_run
//! use punchcard::{Actions, ApiClient, Config, Store};
//! use punchcard::session::KeyringSessionStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::default();
//! config.validate()?;
//!
//! let store = Store::restore(Box::new(KeyringSessionStore::new()))?;
//! let mut actions = Actions::new(store, ApiClient::new(&config.api)?);
//! actions.fetch_projects().await?;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use actions::Actions;
pub use api::ApiClient;
pub use config::Config;
pub use error::{PunchcardError, Result};
pub use models::{Credentials, Project, Session, Task, TimeEntry};
pub use routes::Route;
pub use session::{KeyringSessionStore, MemorySessionStore, SessionStore};
pub use store::Store;
