//! Authentication command handlers
//!
//! Login stores the returned bearer token in the keyring; logout discards
//! it locally without a network call. Register creates an account but never
//! mutates client state, so a fresh registration is followed by an explicit
//! login.

use colored::Colorize;

use crate::commands::{build_context, ensure_route};
use crate::config::Config;
use crate::error::Result;
use crate::models::{Credentials, RegisterRequest};
use crate::routes::Route;

/// Log in and persist the session
///
/// # Arguments
///
/// * `config` - Loaded configuration
/// * `username` - Login name
/// * `password` - Password
/// * `json` - Emit the raw server payload instead of a status line
pub async fn run_login(config: &Config, username: String, password: String, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Login, actions.store())?;

    let credentials = Credentials { username, password };
    let response = actions.login(&credentials).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!(
            "{} logged in as {}",
            "ok:".green().bold(),
            credentials.username.bold()
        );
    }
    Ok(())
}

/// Create a new account
pub async fn run_register(
    config: &Config,
    username: String,
    password: String,
    json: bool,
) -> Result<()> {
    let mut actions = build_context(config)?;
    ensure_route(Route::Register, actions.store())?;

    let user = actions
        .register(&RegisterRequest { username, password })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
    } else {
        println!(
            "{} registered {} (id {}); run `punchcard login` to start a session",
            "ok:".green().bold(),
            user.username.bold(),
            user.id
        );
    }
    Ok(())
}

/// Discard the stored session
pub async fn run_logout(config: &Config, json: bool) -> Result<()> {
    let mut actions = build_context(config)?;
    actions.logout()?;

    if json {
        println!("{}", serde_json::json!({ "logged_in": false }));
    } else {
        println!("{} session discarded", "ok:".green().bold());
    }
    Ok(())
}

/// Show whether a session is stored
pub async fn run_status(config: &Config, json: bool) -> Result<()> {
    let actions = build_context(config)?;
    let store = actions.store();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "logged_in": store.is_authenticated(),
                "username": store.user().map(|u| u.username.clone()),
            })
        );
    } else if store.is_authenticated() {
        match store.user() {
            Some(user) => println!("logged in as {}", user.username.bold()),
            None => println!("logged in (session token stored)"),
        }
    } else {
        println!("{}", "not logged in".yellow());
    }
    Ok(())
}
