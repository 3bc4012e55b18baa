use crate::{ClientError, ClientResult};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use um_config::ApiConfig;
use um_core::{RegisterUser, TaskResult, User};

const USERS_PATH: [&str; 2] = ["api", "users"];
const BY_EMAIL_SEGMENT: &str = "by-email";

/// HTTP client for the user administration REST API
pub struct Client {
    pub base_url: String,
    pub bearer_token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client with reqwest defaults
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    /// * `bearer_token` - Optional token sent as `Authorization: Bearer`
    pub fn new(base_url: &str, bearer_token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        let client = Self::build_reqwest(config.timeout())?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
            client,
        })
    }

    fn build_reqwest(timeout: Duration) -> ClientResult<ReqwestClient> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(client)
    }

    /// Build an endpoint URL under the base URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Build a request with optional bearer token
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!("{} {}", method, url);
        let mut req = self.client.request(method, url);

        if let Some(ref token) = self.bearer_token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and decode the result envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ClientResult<TaskResult<T>> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                Self::error_message(&body, status),
            ));
        }

        let envelope = serde_json::from_slice(&body)?;
        Ok(envelope)
    }

    /// Best-effort message from an error body
    fn error_message(body: &[u8], status: StatusCode) -> String {
        let fallback = || status.canonical_reason().unwrap_or("Unknown error").to_string();

        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return fallback();
        };

        [
            value.get("message"),
            value.get("error").and_then(|e| e.get("message")),
            value.get("title"),
        ]
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str())
        .map(String::from)
        .unwrap_or_else(fallback)
    }

    fn users_endpoint(&self, extra: &[&str]) -> ClientResult<Url> {
        let segments: Vec<&str> = USERS_PATH.iter().chain(extra).copied().collect();
        self.endpoint(&segments)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all users
    pub async fn list_users(&self) -> ClientResult<TaskResult<Vec<User>>> {
        let req = self.request(Method::GET, self.users_endpoint(&[])?);
        self.execute(req).await
    }

    /// Get a user by email address
    pub async fn get_user_by_email(&self, email: &str) -> ClientResult<TaskResult<User>> {
        let url = self.users_endpoint(&[BY_EMAIL_SEGMENT, email])?;
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    /// Register a new user
    pub async fn create_user(
        &self,
        payload: &RegisterUser,
    ) -> ClientResult<TaskResult<RegisterUser>> {
        self.send_json(Method::POST, self.users_endpoint(&[])?, payload)
            .await
    }

    /// Update a user
    pub async fn update_user(&self, id: &str, user: &User) -> ClientResult<TaskResult<User>> {
        self.send_json(Method::PUT, self.users_endpoint(&[id])?, user)
            .await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: &str) -> ClientResult<TaskResult<bool>> {
        let req = self.request(Method::DELETE, self.users_endpoint(&[id])?);
        self.execute(req).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> ClientResult<TaskResult<T>> {
        let req = self.request(method, url).json(body);
        self.execute(req).await
    }
}
