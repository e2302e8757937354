//! HTTP client adapter for the task tracker API
//!
//! One typed method per endpoint. Credentials are injected explicitly per
//! request rather than installed as hidden default headers, so the bearer
//! token a call carries is always visible at the call site. Authentication
//! failures (401) surface as [`PunchcardError::Authentication`], which the
//! action layer uses to clear the stored session; every other non-success
//! status maps to [`PunchcardError::Api`] with the body text attached.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::error::{PunchcardError, Result};
use crate::models::{
    Credentials, LoginResponse, NewProject, NewTask, Project, RegisterRequest, Task, TimeEntry,
    TimerMessage, TimerStarted, UserProfile,
};

/// Typed client for the task tracker HTTP API
///
/// # Examples
///
/// ```no_run
/// use punchcard::api::ApiClient;
/// use punchcard::config::ApiConfig;
///
/// # async fn example() -> punchcard::error::Result<()> {
/// let client = ApiClient::new(&ApiConfig::default())?;
/// let projects = client.get_projects(Some("my_token")).await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new API client from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - API settings containing the base URL and request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("punchcard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                PunchcardError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::debug!("Initialized API client: base_url={}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured API base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request, attaching the bearer token when one is supplied
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request failed: {}", e);
            PunchcardError::Http(e)
        })?;
        Self::check_status(response).await
    }

    /// Maps non-success statuses to typed errors
    ///
    /// 401 becomes [`PunchcardError::Authentication`] so callers can tell a
    /// rejected token apart from any other server failure.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Server rejected credentials: {}", body);
            return Err(PunchcardError::Authentication(if body.is_empty() {
                "401 Unauthorized".to_string()
            } else {
                body
            })
            .into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Server returned error {}: {}", status, body);
            return Err(PunchcardError::Api {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }
        Ok(response)
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse server response: {}", e);
            PunchcardError::Http(e).into()
        })
    }

    // -----------------------------------------------------------------------
    // Authentication
    // -----------------------------------------------------------------------

    /// `POST /login` — exchanges credentials for a bearer token
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response = self
            .send(self.request(Method::POST, "/login", None).json(credentials))
            .await?;
        Self::parse(response).await
    }

    /// `POST /register` — creates a new account
    pub async fn register(&self, data: &RegisterRequest) -> Result<UserProfile> {
        let response = self
            .send(self.request(Method::POST, "/register", None).json(data))
            .await?;
        Self::parse(response).await
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    /// `GET /projects/` — lists all projects
    pub async fn get_projects(&self, token: Option<&str>) -> Result<Vec<Project>> {
        let response = self
            .send(self.request(Method::GET, "/projects/", token))
            .await?;
        Self::parse(response).await
    }

    /// `POST /projects/` — creates a project and returns the stored row
    pub async fn create_project(&self, token: Option<&str>, data: &NewProject) -> Result<Project> {
        let response = self
            .send(self.request(Method::POST, "/projects/", token).json(data))
            .await?;
        Self::parse(response).await
    }

    /// `DELETE /projects/{id}` — deletes a project
    pub async fn delete_project(&self, token: Option<&str>, id: i64) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/projects/{}", id), token))
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// `GET /tasks/` — lists all tasks
    pub async fn get_tasks(&self, token: Option<&str>) -> Result<Vec<Task>> {
        let response = self
            .send(self.request(Method::GET, "/tasks/", token))
            .await?;
        Self::parse(response).await
    }

    /// `POST /tasks/` — creates a task and returns the stored row
    pub async fn create_task(&self, token: Option<&str>, data: &NewTask) -> Result<Task> {
        let response = self
            .send(self.request(Method::POST, "/tasks/", token).json(data))
            .await?;
        Self::parse(response).await
    }

    /// `DELETE /tasks/{id}` — deletes a task
    pub async fn delete_task(&self, token: Option<&str>, id: i64) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/tasks/{}", id), token))
            .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Time entries and timers
    // -----------------------------------------------------------------------

    /// `GET /time_entries/` — lists recorded time entries
    pub async fn get_time_entries(&self, token: Option<&str>) -> Result<Vec<TimeEntry>> {
        let response = self
            .send(self.request(Method::GET, "/time_entries/", token))
            .await?;
        Self::parse(response).await
    }

    /// `POST /timer/start/{task_id}` — starts a timer on a task
    pub async fn start_timer(&self, token: Option<&str>, task_id: i64) -> Result<TimerStarted> {
        let response = self
            .send(self.request(Method::POST, &format!("/timer/start/{}", task_id), token))
            .await?;
        Self::parse(response).await
    }

    /// `POST /timer/pause/{task_id}` — pauses the running timer on a task
    pub async fn pause_timer(&self, token: Option<&str>, task_id: i64) -> Result<TimerMessage> {
        let response = self
            .send(self.request(Method::POST, &format!("/timer/pause/{}", task_id), token))
            .await?;
        Self::parse(response).await
    }

    /// `POST /timer/stop/{task_id}` — stops the running timer on a task
    pub async fn stop_timer(&self, token: Option<&str>, task_id: i64) -> Result<TimerMessage> {
        let response = self
            .send(self.request(Method::POST, &format!("/timer/stop/{}", task_id), token))
            .await?;
        Self::parse(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let client = client_for("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_new_keeps_clean_base_url() {
        let client = client_for("http://tracker.example.com");
        assert_eq!(client.base_url(), "http://tracker.example.com");
    }

    #[test]
    fn test_request_attaches_bearer_header() {
        let client = client_for("http://localhost:8000");
        let request = client
            .request(Method::GET, "/projects/", Some("secret"))
            .build()
            .unwrap();
        let auth = request.headers().get("authorization").unwrap();
        assert_eq!(auth, "Bearer secret");
    }

    #[test]
    fn test_request_omits_header_without_token() {
        let client = client_for("http://localhost:8000");
        let request = client
            .request(Method::GET, "/projects/", None)
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_request_builds_path_with_id() {
        let client = client_for("http://localhost:8000");
        let request = client
            .request(Method::POST, "/timer/start/3", None)
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/timer/start/3");
        assert_eq!(request.method(), &Method::POST);
    }
}
