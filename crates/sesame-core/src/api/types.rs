//! Request and response types for the authentication service.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Serialize;

/// Path of the credential submission endpoint.
pub const LOGIN_PATH: &str = "login";
/// Path of the session probe endpoint.
pub const DASHBOARD_PATH: &str = "dashboard";
/// Path of the logout endpoint.
pub const LOGOUT_PATH: &str = "logout";

/// Body the dashboard returns for an authenticated session.
pub const SUCCESS_MARKER: &str = "SUCCESS!";
/// Body the logout endpoint returns once the session is closed.
pub const LOGOUT_OK: &str = "logout ok";

/// JSON body sent to the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Result of a credential submission.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl LoginResponse {
    /// The login is accepted only on an exact 200.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Result of a logout call.
#[derive(Debug, Clone)]
pub struct LogoutResponse {
    pub status: StatusCode,
    pub body: String,
}

impl LogoutResponse {
    /// The session is closed on a 200 carrying the `logout ok` body.
    pub fn is_logged_out(&self) -> bool {
        self.status == StatusCode::OK && payload_text(&self.body) == LOGOUT_OK
    }
}

/// Returns true when a dashboard body marks an authenticated session.
pub fn is_success_marker(body: &str) -> bool {
    payload_text(body) == SUCCESS_MARKER
}

/// Returns the text carried by a response body.
///
/// Bodies that are a JSON string literal are decoded; anything else is
/// returned untouched.
pub fn payload_text(body: &str) -> std::borrow::Cow<'_, str> {
    let trimmed = body.trim();
    if trimmed.starts_with('"')
        && let Ok(text) = serde_json::from_str::<String>(trimmed)
    {
        return std::borrow::Cow::Owned(text);
    }
    std::borrow::Cow::Borrowed(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_marker_exact_match() {
        assert!(is_success_marker("SUCCESS!"));
        assert!(!is_success_marker("SUCCESS"));
        assert!(!is_success_marker("success!"));
        assert!(!is_success_marker("NOT_LOGGED_IN"));
        assert!(!is_success_marker(""));
    }

    #[test]
    fn test_success_marker_accepts_json_string() {
        assert!(is_success_marker("\"SUCCESS!\""));
        assert!(!is_success_marker("{\"status\":\"SUCCESS!\"}"));
    }

    #[test]
    fn test_login_success_requires_200() {
        let ok = LoginResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
        };
        assert!(ok.is_success());

        let created = LoginResponse {
            status: StatusCode::CREATED,
            headers: HeaderMap::new(),
        };
        assert!(!created.is_success());
    }

    #[test]
    fn test_logout_requires_status_and_body() {
        let ok = LogoutResponse {
            status: StatusCode::OK,
            body: "logout ok".to_string(),
        };
        assert!(ok.is_logged_out());

        let wrong_body = LogoutResponse {
            status: StatusCode::OK,
            body: "bye".to_string(),
        };
        assert!(!wrong_body.is_logged_out());

        let wrong_status = LogoutResponse {
            status: StatusCode::ACCEPTED,
            body: "logout ok".to_string(),
        };
        assert!(!wrong_status.is_logged_out());
    }

    #[test]
    fn test_login_request_serializes_fields() {
        let body = serde_json::to_value(LoginRequest {
            email: "a@b.com",
            password: "x",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"email": "a@b.com", "password": "x"}));
    }
}
