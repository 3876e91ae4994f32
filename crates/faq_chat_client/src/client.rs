//! HTTP client for the FAQ backend: `GET /categories`, `POST /ask`, `GET /`.
//!
//! No client-side timeout is configured; a request waits on the network
//! stack's own error behavior.

pub use reqwest::StatusCode;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::messages::{AskRequest, AskResponse, CategoriesResponse, ErrorDetail, StatusResponse};

/// Backend base URL used when the config does not override it.
pub const DEFAULT_BASE_URL: &str = "https://faq-chatbot-backend-gdfo.onrender.com";

/// Client request error.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: StatusCode,
        /// `detail` field of the backend's error body, when present.
        detail: Option<String>,
    },
}

/// Backend client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Build a client for `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("faq-chat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the category list. A body without `categories` yields an empty list.
    pub async fn categories(&self) -> Result<Vec<String>, ClientError> {
        let url = self.endpoint("/categories");
        debug!(%url, "fetching categories");
        let resp: CategoriesResponse = decode(self.http.get(&url).send().await?).await?;
        debug!(count = resp.categories.len(), "categories fetched");
        Ok(resp.categories)
    }

    /// Ask a question. `category` is sent as-is; an empty string means all categories.
    pub async fn ask(&self, message: &str, category: &str) -> Result<String, ClientError> {
        let url = self.endpoint("/ask");
        debug!(%url, message_len = message.len(), category, "asking");
        let body = AskRequest::new(message, category);
        let resp: AskResponse = decode(self.http.post(&url).json(&body).send().await?).await?;
        Ok(resp.answer)
    }

    /// Fetch the backend's liveness banner from `GET /`.
    pub async fn status(&self) -> Result<String, ClientError> {
        let url = self.endpoint("/");
        let resp: StatusResponse = decode(self.http.get(&url).send().await?).await?;
        Ok(resp.message)
    }
}

/// Map non-2xx to `ClientError::Status`, otherwise decode the JSON body.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status,
            detail: ErrorDetail::from_body(&body),
        });
    }
    Ok(resp.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strips_trailing_slash() {
        let client = Client::new("http://127.0.0.1:8000/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.endpoint("/ask"), "http://127.0.0.1:8000/ask");
    }

    #[test]
    fn new_rejects_garbage_and_non_http() {
        assert!(matches!(
            Client::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            Client::new("ws://127.0.0.1:8765"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn status_error_display_includes_detail() {
        let err = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Some("カテゴリ読み込みに失敗しました".into()),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("カテゴリ読み込みに失敗しました"));
    }
}
