use anyhow::Result;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::AppSettings;
use crate::services::session::Session;

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    /// 2xx response whose body reports failure (`success: false`, `status: false`).
    #[error("{0}")]
    Rejected(String),
    #[error("not logged in")]
    MissingToken,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn of(err: &anyhow::Error) -> Option<&ApiError> {
        err.downcast_ref::<ApiError>()
    }

    pub fn is_network(err: &anyhow::Error) -> bool {
        matches!(Self::of(err), Some(ApiError::Network(_)))
    }

    pub fn status(err: &anyhow::Error) -> Option<u16> {
        match Self::of(err) {
            Some(ApiError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Message the server put in the error body, if any.
    pub fn server_message(err: &anyhow::Error) -> Option<&str> {
        match Self::of(err) {
            Some(ApiError::Status { message, .. }) if !message.is_empty() => Some(message),
            Some(ApiError::Rejected(message)) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Picks `error` or `message` out of a JSON error body.
pub fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => ["error", "message", "msg"]
            .iter()
            .find_map(|k| json.get(*k).and_then(|v| v.as_str()))
            .unwrap_or_default()
            .to_string(),
        Err(_) => String::new(),
    }
}

pub fn build_url(base: &str, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let mut url = Url::parse(&joined).map_err(|e| ApiError::InvalidUrl(format!("{joined}: {e}")))?;
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Shared HTTP client for every backend call. One instance is cheap to build
/// per handler from the current settings and session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            token: None,
            client: Client::new(),
        }
    }

    pub fn from_context(settings: &AppSettings, session: &Session) -> Self {
        Self::new(&settings.api_base_url).with_token(session.token.clone())
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        build_url(&self.base_url, path, query)
    }

    pub fn require_token(&self) -> Result<&str> {
        Ok(self.token.as_deref().ok_or(ApiError::MissingToken)?)
    }

    fn request(&self, method: Method, url: Url) -> (RequestBuilder, String) {
        let request_id = Uuid::new_v4().to_string();
        let mut builder = self
            .client
            .request(method, url)
            .header("X-Request-Id", request_id.as_str());
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        (builder, request_id)
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.url(path, query)?;
        log::debug!("{method} {url}");
        let (mut builder, request_id) = self.request(method.clone(), url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let started = js_sys::Date::now();
        let resp = builder.send().await.map_err(|e| {
            log::error!("{method} {path} [{request_id}] failed: {e}");
            ApiError::Network(e.to_string())
        })?;
        let status = resp.status();
        log::debug!(
            "{method} {path} [{request_id}] -> {} in {:.0}ms",
            status.as_u16(),
            js_sys::Date::now() - started
        );

        if status.is_success() {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        let message = extract_error_message(&text);
        log::warn!("{method} {path} [{request_id}] rejected with {status}: {message}");
        Err(ApiError::Status { status: status.as_u16(), message }.into())
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
        Ok(resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let resp = self.execute(Method::GET, path, query, None::<&()>).await?;
        Self::decode(resp).await
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, query: &[(&str, String)], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.execute(method, path, query, Some(body)).await?;
        Self::decode(resp).await
    }

    /// For endpoints whose success body carries nothing the caller needs.
    pub async fn send_unit<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> Result<u16> {
        let resp = self.execute(method, path, &[], body).await?;
        Ok(resp.status().as_u16())
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.execute(Method::DELETE, path, &[], None::<&()>).await?;
        Self::decode(resp).await
    }
}
