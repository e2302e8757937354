//! Wire-level data model for the task tracker API
//!
//! Typed request and response payloads exchanged with the server. Every
//! response is deserialized into one of these structs at the HTTP boundary,
//! so malformed or unexpected JSON is rejected before it reaches the state
//! store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated session
///
/// Created on successful login, cleared on logout or on receipt of an
/// authentication failure from the server. Persisted to the OS keyring so
/// it survives between invocations; an absent token means unauthenticated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Profile of the logged-in user, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates a session holding only a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }
}

/// Profile of a registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: i64,
    /// Login name
    pub username: String,
    /// Creation timestamp, when the server reports one
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A project owning a set of tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: i64,
    /// Human-readable project name
    pub name: String,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Total tracked time in seconds, summed server-side
    #[serde(default)]
    pub total_time: f64,
}

/// A task belonging to a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier
    pub id: i64,
    /// Task title
    pub title: String,
    /// Identifier of the owning project
    pub project_id: i64,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Total tracked time in seconds, summed server-side
    #[serde(default)]
    pub total_time: f64,
    /// Whether a timer is currently running against this task
    #[serde(default)]
    pub is_timer_running: bool,
}

/// A single recorded span of tracked time
///
/// Time entries are computed entirely server-side; the client only reads
/// them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique time entry identifier
    pub id: i64,
    /// When the timer was started
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// When the timer was stopped, if it has been
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    /// Whether the entry is still accumulating time
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Plain-text password, sent only over the login request
    pub password: String,
}

/// Payload for account creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired login name
    pub username: String,
    /// Desired password
    pub password: String,
}

/// Payload for project creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    /// Project name
    pub name: String,
}

/// Payload for task creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title
    pub title: String,
    /// Identifier of the project the task belongs to
    pub project_id: i64,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to present on subsequent requests
    pub access_token: String,
}

/// Response from the timer start endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerStarted {
    /// Server confirmation message
    pub message: String,
    /// Identifier of the created time entry
    pub time_entry: i64,
}

/// Response from the timer pause/stop endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerMessage {
    /// Server confirmation message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_default_is_unauthenticated() {
        let session = Session::default();
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_session_with_token() {
        let session = Session::with_token("abc123");
        assert_eq!(session.token.as_deref(), Some("abc123"));
        assert!(session.user.is_none());
    }

    #[test]
    fn test_session_json_roundtrip() {
        let session = Session {
            token: Some("tok".to_string()),
            user: Some(UserProfile {
                id: 1,
                username: "alice".to_string(),
                created_at: None,
            }),
        };
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.token.as_deref(), Some("tok"));
        assert_eq!(restored.user.unwrap().username, "alice");
    }

    #[test]
    fn test_project_deserializes_server_payload() {
        let json = r#"{
            "id": 3,
            "name": "Website redesign",
            "created_at": "2024-05-01T10:30:00Z",
            "total_time": 7200.5
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 3);
        assert_eq!(project.name, "Website redesign");
        assert!(project.created_at.is_some());
        assert_eq!(project.total_time, 7200.5);
    }

    #[test]
    fn test_project_optional_fields_default() {
        // Servers may omit created_at and total_time on freshly created rows
        let json = r#"{"id": 1, "name": "Bare"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.created_at.is_none());
        assert_eq!(project.total_time, 0.0);
    }

    #[test]
    fn test_task_timer_flag_defaults_to_false() {
        let json = r#"{"id": 9, "title": "Ship it", "project_id": 3}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(!task.is_timer_running);
        assert_eq!(task.project_id, 3);
    }

    #[test]
    fn test_task_rejects_missing_project_id() {
        let json = r#"{"id": 9, "title": "Orphan"}"#;
        let result = serde_json::from_str::<Task>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_time_entry_open_interval() {
        let json = r#"{"id": 4, "start_time": "2024-05-01T10:30:00Z", "is_active": true}"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.start_time.is_some());
        assert!(entry.end_time.is_none());
        assert_eq!(entry.is_active, Some(true));
    }

    #[test]
    fn test_login_response_rejects_missing_token() {
        let result = serde_json::from_str::<LoginResponse>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_timer_started_deserializes() {
        let json = r#"{"message": "Timer started", "time_entry": 17}"#;
        let started: TimerStarted = serde_json::from_str(json).unwrap();
        assert_eq!(started.message, "Timer started");
        assert_eq!(started.time_entry, 17);
    }

    #[test]
    fn test_new_task_serializes_project_id() {
        let payload = NewTask {
            title: "Write docs".to_string(),
            project_id: 7,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"project_id\":7"));
    }
}
