//! Central state store
//!
//! This module holds the client-side view of the world: the authenticated
//! session and the in-memory collections of projects, tasks, and time
//! entries. The store is a plain struct owned by the composition root and
//! mutated only through the entry points below; there is no ambient global
//! state. Token mutations are written through to the injected
//! [`SessionStore`] backend so they survive between invocations.

use crate::error::Result;
use crate::models::{Project, Session, Task, TimeEntry, UserProfile};
use crate::session::SessionStore;

/// Client-side state: session plus in-memory collections
///
/// Collections are insertion-ordered and replaced wholesale by the fetch
/// actions; the client performs no deduplication or validation beyond what
/// the typed models enforce at the HTTP boundary.
///
/// # Examples
///
/// ```
/// use punchcard::session::MemorySessionStore;
/// use punchcard::store::Store;
///
/// let mut store = Store::new(Box::new(MemorySessionStore::new()));
/// assert!(!store.is_authenticated());
/// store.set_token("tok").unwrap();
/// assert!(store.is_authenticated());
/// ```
pub struct Store {
    session: Session,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    time_entries: Vec<TimeEntry>,
    backend: Box<dyn SessionStore>,
}

impl Store {
    /// Creates an empty store with no session
    ///
    /// # Arguments
    ///
    /// * `backend` - Durable storage the session is written through to
    pub fn new(backend: Box<dyn SessionStore>) -> Self {
        Self {
            session: Session::default(),
            projects: Vec::new(),
            tasks: Vec::new(),
            time_entries: Vec::new(),
            backend,
        }
    }

    /// Creates a store with the session restored from durable storage
    ///
    /// Used at startup so a previous login carries over. A missing stored
    /// session is not an error; the store simply starts unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails to read, e.g. a locked
    /// keyring or a corrupt entry.
    pub fn restore(backend: Box<dyn SessionStore>) -> Result<Self> {
        let session = backend.load()?.unwrap_or_default();
        if session.token.is_some() {
            tracing::debug!("Restored session from durable storage");
        }
        Ok(Self {
            session,
            projects: Vec::new(),
            tasks: Vec::new(),
            time_entries: Vec::new(),
            backend,
        })
    }

    // -----------------------------------------------------------------------
    // Session mutations
    // -----------------------------------------------------------------------

    /// Stores the bearer token and persists the session
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<()> {
        self.session.token = Some(token.into());
        self.backend.save(&self.session)
    }

    /// Stores the user profile and persists the session
    pub fn set_user(&mut self, user: UserProfile) -> Result<()> {
        self.session.user = Some(user);
        self.backend.save(&self.session)
    }

    /// Clears the token and user from memory and durable storage
    pub fn clear_token(&mut self) -> Result<()> {
        self.session = Session::default();
        self.backend.delete()
    }

    // -----------------------------------------------------------------------
    // Collection mutations
    // -----------------------------------------------------------------------

    /// Replaces the project collection wholesale
    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    /// Replaces the task collection wholesale
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Replaces the time entry collection wholesale
    pub fn set_time_entries(&mut self, time_entries: Vec<TimeEntry>) {
        self.time_entries = time_entries;
    }

    /// Appends one project to the end of the collection
    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Appends one task to the end of the collection
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the project with the given id, if present
    pub fn remove_project(&mut self, id: i64) {
        self.projects.retain(|p| p.id != id);
    }

    /// Removes the task with the given id, if present
    pub fn remove_task(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }

    // -----------------------------------------------------------------------
    // Derived queries
    // -----------------------------------------------------------------------

    /// Whether a bearer token is present
    ///
    /// Token presence is the only authentication signal the client tracks;
    /// expiry is the server's concern and surfaces as a 401.
    pub fn is_authenticated(&self) -> bool {
        self.session.token.is_some()
    }

    /// The stored bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// The stored user profile, if any
    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    /// All projects, in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All time entries, in insertion order
    pub fn time_entries(&self) -> &[TimeEntry] {
        &self.time_entries
    }

    /// Tasks belonging to the given project, preserving relative order
    pub fn tasks_by_project(&self, project_id: i64) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Whether the given task currently has a running timer
    ///
    /// Returns `false` when no task with that id is in the store.
    pub fn active_timer(&self, task_id: i64) -> bool {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .map(|t| t.is_timer_running)
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("authenticated", &self.is_authenticated())
            .field("projects", &self.projects.len())
            .field("tasks", &self.tasks.len())
            .field("time_entries", &self.time_entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn empty_store() -> Store {
        Store::new(Box::new(MemorySessionStore::new()))
    }

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            created_at: None,
            total_time: 0.0,
        }
    }

    fn task(id: i64, project_id: i64, running: bool) -> Task {
        Task {
            id,
            title: format!("task-{}", id),
            project_id,
            created_at: None,
            total_time: 0.0,
            is_timer_running: running,
        }
    }

    #[test]
    fn test_authentication_reflects_most_recent_token_call() {
        let mut store = empty_store();
        assert!(!store.is_authenticated());

        store.set_token("first").unwrap();
        assert!(store.is_authenticated());

        store.clear_token().unwrap();
        assert!(!store.is_authenticated());

        store.set_token("second").unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("second"));
    }

    #[test]
    fn test_set_token_persists_to_backend() {
        let backend = MemorySessionStore::new();
        let observer = backend.clone();
        let mut store = Store::new(Box::new(backend));

        store.set_token("durable").unwrap();

        let persisted = observer.load().unwrap().expect("session saved");
        assert_eq!(persisted.token.as_deref(), Some("durable"));
    }

    #[test]
    fn test_clear_token_removes_from_backend() {
        let backend = MemorySessionStore::new();
        let observer = backend.clone();
        let mut store = Store::new(Box::new(backend));

        store.set_token("gone soon").unwrap();
        store.clear_token().unwrap();

        assert!(observer.load().unwrap().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_restore_picks_up_saved_session() {
        let backend = MemorySessionStore::new();
        backend.save(&Session::with_token("restored")).unwrap();

        let store = Store::restore(Box::new(backend)).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("restored"));
    }

    #[test]
    fn test_restore_with_empty_backend_is_unauthenticated() {
        let store = Store::restore(Box::new(MemorySessionStore::new())).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_projects_replaces_wholesale() {
        let mut store = empty_store();
        store.set_projects(vec![project(1, "old")]);
        store.set_projects(vec![project(2, "new"), project(3, "newer")]);

        let ids: Vec<i64> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_add_project_appends() {
        let mut store = empty_store();
        store.set_projects(vec![project(1, "a"), project(2, "b")]);
        store.add_project(project(3, "c"));

        assert_eq!(store.projects().len(), 3);
        assert_eq!(store.projects().last().unwrap().id, 3);
    }

    #[test]
    fn test_remove_project_filters_by_id() {
        let mut store = empty_store();
        store.set_projects(vec![project(1, "a"), project(2, "b")]);
        store.remove_project(1);

        let ids: Vec<i64> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_remove_task_filters_by_id() {
        let mut store = empty_store();
        store.set_tasks(vec![task(5, 1, false), task(7, 1, false)]);
        store.remove_task(5);

        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn test_tasks_by_project_preserves_relative_order() {
        let mut store = empty_store();
        store.set_tasks(vec![
            task(1, 10, false),
            task(2, 20, false),
            task(3, 10, false),
            task(4, 10, false),
        ]);

        let ids: Vec<i64> = store.tasks_by_project(10).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(store.tasks_by_project(99).is_empty());
    }

    #[test]
    fn test_active_timer_unknown_id_is_false() {
        let store = empty_store();
        assert!(!store.active_timer(42));
    }

    #[test]
    fn test_active_timer_returns_task_flag() {
        let mut store = empty_store();
        store.set_tasks(vec![task(1, 10, true), task(2, 10, false)]);
        assert!(store.active_timer(1));
        assert!(!store.active_timer(2));
    }

    #[test]
    fn test_set_time_entries_replaces_wholesale() {
        let mut store = empty_store();
        store.set_time_entries(vec![TimeEntry {
            id: 1,
            start_time: None,
            end_time: None,
            is_active: Some(false),
        }]);
        assert_eq!(store.time_entries().len(), 1);

        store.set_time_entries(Vec::new());
        assert!(store.time_entries().is_empty());
    }
}
