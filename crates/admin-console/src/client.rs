//! HTTP client for the gateway's account administration endpoint.

use reqwest::{header::CONTENT_TYPE, Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::{ConsoleError, ConsoleResult};

const DELETE_USER_PATH: &str = "/auth/delete/user";

#[derive(Debug, Serialize)]
struct DeleteUserBody<'a> {
    username: &'a str,
}

/// JSON reply shared by every outcome of the delete endpoint.
#[derive(Debug, Deserialize)]
struct ReplyBody {
    message: String,
    #[serde(default)]
    error: Option<String>,
}

/// Parsed reply to a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    pub status: StatusCode,
    pub message: String,
    /// Underlying cause, present on server failures
    pub error: Option<String>,
}

impl DeleteReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Gateway client.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl AdminClient {
    pub fn new(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let endpoint = Url::parse(&format!("{}{}", config.base_url, DELETE_USER_PATH))
            .map_err(|e| ConsoleError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        Ok(Self {
            http: Client::new(),
            endpoint,
            token: config.token.clone(),
        })
    }

    /// POST `{"username": ...}` and parse the JSON reply, whatever its status.
    pub async fn delete_user(&self, username: &str) -> ConsoleResult<DeleteReply> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&DeleteUserBody { username });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body: ReplyBody = response.json().await?;
        debug!(%status, message = %body.message, "Delete user reply");

        Ok(DeleteReply {
            status,
            message: body.message,
            error: body.error,
        })
    }
}
