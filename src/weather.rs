use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_URL: &str = "https://api.weather.gov/";

// api.weather.gov rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("practice-api/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

/// Filters for `/alerts`; unset fields are left out of the query string.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AlertQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AlertCollection {
    pub title: Option<String>,
    pub updated: Option<String>,
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub event: Option<String>,
    pub area_desc: Option<String>,
    pub severity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Glossary {
    #[serde(default)]
    glossary: Vec<GlossaryTerm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryTerm {
    pub term: Option<String>,
    pub definition: Option<String>,
}

pub struct WeatherClient {
    http: Client,
    base: String,
}

impl WeatherClient {
    pub fn new(base: &str) -> Result<WeatherClient, WeatherError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        let mut base = base.to_owned();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(WeatherClient { http, base })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(format!("{}{}", self.base, path))
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, WeatherError> {
        let response = request.send().await?.error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn status(&self) -> Result<ServiceStatus, WeatherError> {
        Self::fetch(self.get("")).await
    }

    pub async fn alerts(&self, query: &AlertQuery) -> Result<AlertCollection, WeatherError> {
        Self::fetch(self.get("alerts").query(query)).await
    }

    pub async fn glossary(&self) -> Result<Vec<GlossaryTerm>, WeatherError> {
        let glossary: Glossary = Self::fetch(self.get("glossary")).await?;

        Ok(glossary.glossary)
    }
}

/// Exact match on the term, as typed.
pub fn lookup<'a>(glossary: &'a [GlossaryTerm], term: &str) -> Option<&'a str> {
    glossary
        .iter()
        .find(|entry| entry.term.as_deref() == Some(term))
        .and_then(|entry| entry.definition.as_deref())
}
