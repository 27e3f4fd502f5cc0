//! HTTP adapter for the authentication service.
//!
//! Three single-attempt calls against one configured origin:
//! - `login`: `POST /login` with `{email, password}`
//! - `check_session`: `GET /dashboard`
//! - `logout`: `GET /logout`
//!
//! The underlying client keeps a cookie store, so a session cookie set by
//! `/login` rides along on the following requests. There is no retry and no
//! timeout beyond transport defaults.

mod errors;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::cookie::Jar;
pub use errors::{ApiError, ApiErrorKind, ApiResult};
pub use types::*;
use url::Url;

use crate::config::Config;

/// Client for the authentication service.
///
/// Cheap to clone; clones share the connection pool and the cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client for the origin in `config`.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.base_url()?;
        let http = reqwest::Client::builder()
            .cookie_provider(Arc::new(Jar::default()))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wraps an existing HTTP client.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: normalize_base(base_url),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submits credentials.
    ///
    /// Any HTTP status is returned to the caller; only transport failures
    /// are errors here.
    ///
    /// # Errors
    /// Returns a network error if no response was received.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let url = self.endpoint(LOGIN_PATH)?;
        tracing::debug!(%url, "login request");

        let response = self
            .http
            .post(url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "login response");
        Ok(LoginResponse {
            status,
            headers: response.headers().clone(),
        })
    }

    /// Fetches the dashboard body used as the session probe.
    ///
    /// # Errors
    /// Returns a network error on transport failure and an auth error on a
    /// non-2xx status.
    pub async fn check_session(&self) -> ApiResult<String> {
        let url = self.endpoint(DASHBOARD_PATH)?;
        tracing::debug!(%url, "session probe request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "session probe rejected");
            return Err(ApiError::http_status(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "session probe response");
        Ok(body)
    }

    /// Ends the session.
    ///
    /// # Errors
    /// Returns a network error if no response (or no body) was received.
    pub async fn logout(&self) -> ApiResult<LogoutResponse> {
        let url = self.endpoint(LOGOUT_PATH)?;
        tracing::debug!(%url, "logout request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "logout response");
        Ok(LogoutResponse { status, body })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::network(format!("Invalid endpoint '{path}': {e}")))
    }
}

/// Ensures the base path ends with `/` so endpoint joins append instead of replace.
fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> ApiClient {
        let config = Config {
            base_url: server.uri(),
            ..Config::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_under_base_path() {
        let base = Url::parse("http://example.com/api").unwrap();
        let client = ApiClient::with_client(reqwest::Client::new(), base);
        assert_eq!(
            client.endpoint(LOGIN_PATH).unwrap().as_str(),
            "http://example.com/api/login"
        );

        let root = Url::parse("http://example.com").unwrap();
        let client = ApiClient::with_client(reqwest::Client::new(), root);
        assert_eq!(
            client.endpoint(DASHBOARD_PATH).unwrap().as_str(),
            "http://example.com/dashboard"
        );
    }

    #[tokio::test]
    async fn test_login_posts_credentials_and_returns_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "email": "a@b.com",
                "password": "x"
            })))
            .respond_with(ResponseTemplate::new(200).insert_header("x-session", "abc"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).login("a@b.com", "x").await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.headers.get("x-session").unwrap(), "abc");
    }

    #[tokio::test]
    async fn test_login_returns_non_200_status_without_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let response = client_for(&server).login("a@b.com", "bad").await.unwrap();
        assert_eq!(response.status.as_u16(), 401);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_check_session_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_string("SUCCESS!"))
            .mount(&server)
            .await;

        let body = client_for(&server).check_session().await.unwrap();
        assert!(is_success_marker(&body));
    }

    #[tokio::test]
    async fn test_check_session_rejects_non_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .respond_with(ResponseTemplate::new(403).set_body_string("SUCCESS!"))
            .mount(&server)
            .await;

        let err = client_for(&server).check_session().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Auth);
        assert_eq!(err.status, Some(403));
    }

    #[tokio::test]
    async fn test_logout_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logout"))
            .respond_with(ResponseTemplate::new(200).set_body_string("logout ok"))
            .mount(&server)
            .await;

        let response = client_for(&server).logout().await.unwrap();
        assert!(response.is_logged_out());
    }

    #[tokio::test]
    async fn test_session_cookie_is_sent_after_login() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200).insert_header("set-cookie", "sid=s3cr3t; Path=/"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/dashboard"))
            .and(header("cookie", "sid=s3cr3t"))
            .respond_with(ResponseTemplate::new(200).set_body_string("SUCCESS!"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.login("a@b.com", "x").await.unwrap();
        let body = client.check_session().await.unwrap();
        assert_eq!(body, "SUCCESS!");
    }

    #[tokio::test]
    async fn test_unreachable_origin_is_network_error() {
        // Bind then drop a server so the port is closed.
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let err = client.logout().await.unwrap_err();
        assert!(err.is_network());
        assert!(err.to_string().starts_with("Network error"));
    }
}
