//! Activity Board REST Client
//!
//! HTTP client for the board API, used by the terminal client.

use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::catalogue::Snapshot;

/// Board API client
pub struct BoardClient {
    client: Client,
    base_url: String,
}

/// Client errors
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server answered with a non-success status
    #[error("{}", .detail.as_deref().unwrap_or("Request rejected"))]
    Rejected {
        status: u16,
        detail: Option<String>,
    },

    /// Network failure or malformed response body
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct DetailBody {
    detail: Option<String>,
}

/// Relative URL of the signup/unregister endpoint, percent-encoding both values
pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

impl BoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full activity catalogue
    pub async fn activities(&self) -> Result<Snapshot, ClientError> {
        let response = self
            .client
            .get(format!("{}/activities", self.base_url))
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    /// Sign `email` up for `activity`, returning the server message
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, signup_path(activity, email));
        let response = self.client.post(url).send().await?;

        let body: MessageBody = Self::check(response).await?.json().await?;
        Ok(body.message)
    }

    /// Remove `email` from `activity`, returning the server message
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, ClientError> {
        let url = format!("{}{}", self.base_url, signup_path(activity, email));
        let response = self.client.delete(url).send().await?;

        let body: MessageBody = Self::check(response).await?.json().await?;
        Ok(body.message)
    }

    /// Turn a non-success response into `ClientError::Rejected`
    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: DetailBody = response.json().await?;
        Err(ClientError::Rejected {
            status: status.as_u16(),
            detail: body.detail,
        })
    }
}
