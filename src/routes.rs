//! Route guard
//!
//! The client's destinations and the navigation-time check gating the
//! protected ones. The guard is a two-state machine driven solely by token
//! presence; it never inspects token validity, since an expired token
//! surfaces as a 401 and is handled by the action layer.

use std::fmt;

/// A client-side destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Project overview, the default destination (`/`)
    Overview,
    /// Detail view for one project (`/project/:id`)
    ProjectDetail(i64),
    /// Login form (`/login`)
    Login,
    /// Registration form (`/register`)
    Register,
}

impl Route {
    /// The path this destination corresponds to
    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::ProjectDetail(id) => format!("/project/{}", id),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
        }
    }

    /// Whether reaching this destination requires an authenticated session
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Overview | Route::ProjectDetail(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Resolves a navigation attempt against the authentication state
///
/// A protected destination without a session redirects to [`Route::Login`];
/// everything else proceeds unchanged.
///
/// # Examples
///
/// ```
/// use punchcard::routes::{resolve, Route};
///
/// assert_eq!(resolve(Route::Overview, false), Route::Login);
/// assert_eq!(resolve(Route::Overview, true), Route::Overview);
/// assert_eq!(resolve(Route::Login, false), Route::Login);
/// ```
pub fn resolve(route: Route, authenticated: bool) -> Route {
    if route.is_protected() && !authenticated {
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Overview.path(), "/");
        assert_eq!(Route::ProjectDetail(7).path(), "/project/7");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Register.path(), "/register");
    }

    #[test]
    fn test_protected_routes() {
        assert!(Route::Overview.is_protected());
        assert!(Route::ProjectDetail(1).is_protected());
        assert!(!Route::Login.is_protected());
        assert!(!Route::Register.is_protected());
    }

    #[test]
    fn test_protected_route_without_token_redirects_to_login() {
        assert_eq!(resolve(Route::Overview, false), Route::Login);
        assert_eq!(resolve(Route::ProjectDetail(3), false), Route::Login);
    }

    #[test]
    fn test_protected_route_with_token_proceeds() {
        assert_eq!(resolve(Route::Overview, true), Route::Overview);
        assert_eq!(resolve(Route::ProjectDetail(3), true), Route::ProjectDetail(3));
    }

    #[test]
    fn test_login_always_proceeds() {
        assert_eq!(resolve(Route::Login, false), Route::Login);
        assert_eq!(resolve(Route::Login, true), Route::Login);
    }

    #[test]
    fn test_register_always_proceeds() {
        assert_eq!(resolve(Route::Register, false), Route::Register);
        assert_eq!(resolve(Route::Register, true), Route::Register);
    }

    #[test]
    fn test_display_matches_path() {
        assert_eq!(Route::ProjectDetail(12).to_string(), "/project/12");
    }
}
