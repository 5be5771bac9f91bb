use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::ClientError;

/// Handle to one API server. Cloning is cheap; the bearer token travels with
/// the instance rather than living in shared global state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(base_url));
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url, token: None })
    }

    /// Same server, authenticated as the holder of `token`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self { http: self.http.clone(), base_url: self.base_url.clone(), token: Some(token.into()) }
    }

    pub fn token(&self) -> Option<&str> { self.token.as_deref() }

    pub fn base_url(&self) -> &str { &self.base_url }

    pub(crate) fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let body = resp.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "api request failed");
        Err(ClientError::from_body(status.as_u16(), &body))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.builder(Method::GET, path)).await
    }

    pub(crate) async fn get_query<Q: Serialize, T: DeserializeOwned>(&self, path: &str, query: &Q) -> Result<T, ClientError> {
        self.send(self.builder(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        self.send(self.builder(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        self.send(self.builder(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.builder(Method::PUT, path)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.builder(Method::DELETE, path)).await
    }
}
