//! Action layer
//!
//! One async operation per use case, each with the same contract: call the
//! API through the [`ApiClient`], commit the result into the [`Store`] on
//! success, and log-then-propagate the failure otherwise. A single
//! best-effort attempt per invocation; no retry, no backoff, no
//! cancellation. Timer operations re-fetch the task collection afterwards
//! instead of updating it optimistically, so the running flags always come
//! from the server.
//!
//! [`Actions`] is the composition-root context: it owns the store and the
//! client, and it is where authentication failures from the adapter are
//! intercepted to clear the stored session before the error is re-signaled
//! to the caller.

use crate::api::ApiClient;
use crate::error::{PunchcardError, Result};
use crate::models::{
    Credentials, LoginResponse, NewProject, NewTask, Project, RegisterRequest, Task, UserProfile,
};
use crate::store::Store;

/// Owns the state store and API client; exposes one method per use case
///
/// # Examples
///
/// ```no_run
/// use punchcard::actions::Actions;
/// use punchcard::api::ApiClient;
/// use punchcard::config::ApiConfig;
/// use punchcard::models::Credentials;
/// use punchcard::session::MemorySessionStore;
/// use punchcard::store::Store;
///
/// # async fn example() -> punchcard::error::Result<()> {
/// let store = Store::new(Box::new(MemorySessionStore::new()));
/// let api = ApiClient::new(&ApiConfig::default())?;
/// let mut actions = Actions::new(store, api);
/// actions
///     .login(&Credentials {
///         username: "alice".to_string(),
///         password: "secret".to_string(),
///     })
///     .await?;
/// assert!(actions.store().is_authenticated());
/// # Ok(())
/// # }
/// ```
pub struct Actions {
    store: Store,
    api: ApiClient,
}

impl Actions {
    /// Creates the action context from its two collaborators
    pub fn new(store: Store, api: ApiClient) -> Self {
        Self { store, api }
    }

    /// Read access to the underlying state store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Clears the stored session when the error is an authentication failure
    ///
    /// This is the client-wide 401 interceptor: any action that hits a
    /// rejected token drops the session before re-signaling, so the next
    /// command starts from the login screen instead of retrying a dead
    /// token.
    fn intercept<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if matches!(
                err.downcast_ref::<PunchcardError>(),
                Some(PunchcardError::Authentication(_))
            ) {
                tracing::warn!("Authentication failure, clearing stored session");
                if let Err(clear_err) = self.store.clear_token() {
                    tracing::error!("Failed to clear session: {}", clear_err);
                }
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Authentication
    // -----------------------------------------------------------------------

    /// Logs in and commits the returned token to the store
    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginResponse> {
        let result = self.api.login(credentials).await;
        let response = self.intercept(result).map_err(|e| {
            tracing::error!("Error logging in: {}", e);
            e
        })?;
        self.store.set_token(response.access_token.as_str())?;
        tracing::info!("Logged in as {}", credentials.username);
        Ok(response)
    }

    /// Creates an account; does not mutate client state
    pub async fn register(&mut self, data: &RegisterRequest) -> Result<UserProfile> {
        let result = self.api.register(data).await;
        self.intercept(result).map_err(|e| {
            tracing::error!("Error registering: {}", e);
            e
        })
    }

    /// Discards the session locally; no network call
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear_token()?;
        tracing::info!("Logged out");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// Fetches all projects and replaces the collection wholesale
    pub async fn fetch_projects(&mut self) -> Result<()> {
        let result = self.api.get_projects(self.store.token()).await;
        let projects = self.intercept(result).map_err(|e| {
            tracing::error!("Error fetching projects: {}", e);
            e
        })?;
        self.store.set_projects(projects);
        Ok(())
    }

    /// Creates a project and appends the server's row to the collection
    pub async fn create_project(&mut self, data: &NewProject) -> Result<Project> {
        let result = self.api.create_project(self.store.token(), data).await;
        let project = self.intercept(result).map_err(|e| {
            tracing::error!("Error creating project: {}", e);
            e
        })?;
        self.store.add_project(project.clone());
        Ok(project)
    }

    /// Deletes a project server-side, then removes it from the collection
    pub async fn delete_project(&mut self, id: i64) -> Result<()> {
        let result = self.api.delete_project(self.store.token(), id).await;
        self.intercept(result).map_err(|e| {
            tracing::error!("Error deleting project: {}", e);
            e
        })?;
        self.store.remove_project(id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Fetches all tasks and replaces the collection wholesale
    pub async fn fetch_tasks(&mut self) -> Result<()> {
        let result = self.api.get_tasks(self.store.token()).await;
        let tasks = self.intercept(result).map_err(|e| {
            tracing::error!("Error fetching tasks: {}", e);
            e
        })?;
        self.store.set_tasks(tasks);
        Ok(())
    }

    /// Creates a task and appends the server's row to the collection
    pub async fn create_task(&mut self, data: &NewTask) -> Result<Task> {
        let result = self.api.create_task(self.store.token(), data).await;
        let task = self.intercept(result).map_err(|e| {
            tracing::error!("Error creating task: {}", e);
            e
        })?;
        self.store.add_task(task.clone());
        Ok(task)
    }

    /// Deletes a task server-side, then removes it from the collection
    pub async fn delete_task(&mut self, id: i64) -> Result<()> {
        let result = self.api.delete_task(self.store.token(), id).await;
        self.intercept(result).map_err(|e| {
            tracing::error!("Error deleting task: {}", e);
            e
        })?;
        self.store.remove_task(id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Time entries and timers
    // -----------------------------------------------------------------------

    /// Fetches recorded time entries and replaces the collection wholesale
    pub async fn fetch_time_entries(&mut self) -> Result<()> {
        let result = self.api.get_time_entries(self.store.token()).await;
        let entries = self.intercept(result).map_err(|e| {
            tracing::error!("Error fetching time entries: {}", e);
            e
        })?;
        self.store.set_time_entries(entries);
        Ok(())
    }

    /// Starts a timer on a task, then re-fetches tasks for the updated flags
    pub async fn start_timer(&mut self, task_id: i64) -> Result<()> {
        let result = self.api.start_timer(self.store.token(), task_id).await;
        self.intercept(result).map_err(|e| {
            tracing::error!("Error starting timer: {}", e);
            e
        })?;
        // Refresh tasks to get updated timer status
        self.fetch_tasks().await
    }

    /// Pauses the timer on a task, then re-fetches tasks for the updated flags
    pub async fn pause_timer(&mut self, task_id: i64) -> Result<()> {
        let result = self.api.pause_timer(self.store.token(), task_id).await;
        self.intercept(result).map_err(|e| {
            tracing::error!("Error pausing timer: {}", e);
            e
        })?;
        self.fetch_tasks().await
    }

    /// Stops the timer on a task, then re-fetches tasks for the updated flags
    pub async fn stop_timer(&mut self, task_id: i64) -> Result<()> {
        let result = self.api.stop_timer(self.store.token(), task_id).await;
        self.intercept(result).map_err(|e| {
            tracing::error!("Error stopping timer: {}", e);
            e
        })?;
        self.fetch_tasks().await
    }
}
