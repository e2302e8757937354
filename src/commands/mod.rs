/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four handler modules:

- `auth`     — login, register, logout, session status
- `projects` — list/create/delete projects
- `tasks`    — list/create/delete tasks
- `timer`    — start/pause/stop task timers

Each handler builds the action context (state store restored from the
keyring plus an API client), runs the route guard for its destination, and
then dispatches the action. Rendering is tables for humans or JSON when the
`--json` flag is set.
*/

use crate::actions::Actions;
use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{PunchcardError, Result};
use crate::routes::{self, Route};
use crate::session::KeyringSessionStore;
use crate::store::Store;

pub mod auth;
pub mod projects;
pub mod tasks;
pub mod timer;

/// Builds the action context: session restored from the keyring, API client
/// from configuration
pub(crate) fn build_context(config: &Config) -> Result<Actions> {
    let store = Store::restore(Box::new(KeyringSessionStore::new()))?;
    let api = ApiClient::new(&config.api)?;
    Ok(Actions::new(store, api))
}

/// Runs the route guard for a destination
///
/// When the guard redirects a protected destination to the login route, the
/// redirect is reported as a missing-credentials error telling the user how
/// to log in.
pub(crate) fn ensure_route(route: Route, store: &Store) -> Result<()> {
    let resolved = routes::resolve(route, store.is_authenticated());
    if resolved == Route::Login && route != Route::Login {
        tracing::debug!("Guard redirected {} to {}", route, resolved);
        return Err(PunchcardError::MissingCredentials(
            "no session token stored; run `punchcard login` first".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Formats a tracked-time total (seconds) for table output
pub(crate) fn format_duration(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
