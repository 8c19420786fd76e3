use reqwest::{Client, Method, StatusCode};
use thiserror::Error;

use crate::{storage::Entries, structs::ErrorBody};

pub const DEFAULT_URL: &str = "http://localhost:3333/";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Talks to a practice API: one URL, four verbs, parameters in the query string.
pub struct PracticeClient {
    http: Client,
    url: String,
}

impl PracticeClient {
    pub fn new(url: impl Into<String>) -> PracticeClient {
        PracticeClient {
            http: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn all(&self) -> Result<Entries, ClientError> {
        self.send(Method::GET, &[]).await
    }

    pub async fn get(&self, key: &str) -> Result<Entries, ClientError> {
        self.send(Method::GET, &[("key", key)]).await
    }

    pub async fn create(&self, key: &str, value: &str) -> Result<Entries, ClientError> {
        self.send(Method::POST, &[("key", key), ("value", value)]).await
    }

    pub async fn update(&self, key: &str, value: &str) -> Result<Entries, ClientError> {
        self.send(Method::PUT, &[("key", key), ("value", value)]).await
    }

    pub async fn delete(&self, key: &str) -> Result<Entries, ClientError> {
        self.send(Method::DELETE, &[("key", key)]).await
    }

    async fn send(&self, method: Method, params: &[(&str, &str)]) -> Result<Entries, ClientError> {
        let response = self.http.request(method, &self.url).query(params).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Not every server failure carries our error body.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_owned(),
        };

        Err(ClientError::Api { status, message })
    }
}
