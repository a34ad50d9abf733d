//! # Record Source
//!
//! Read-only access to the content database. Only the first page of a query is
//! ever returned; callers that need more have to page themselves.

use crate::core::{Config, SourceError};
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::property::{properties_from_json, Properties};

pub const NOTION_VERSION: &str = "2022-06-28";

/// One content item as returned by the source
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub id: Option<String>,
    pub properties: Properties,
}

impl Record {
    /// Build a record from a raw page object. Missing pieces become empty.
    pub fn from_json(page: &Value) -> Self {
        Record {
            id: page.get("id").and_then(Value::as_str).map(str::to_string),
            properties: properties_from_json(page.get("properties")),
        }
    }
}

/// A single page of query results
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    pub records: Vec<Record>,
    /// The source has more results than this page holds
    pub has_more: bool,
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Query one collection and return its first page.
    async fn query(&self, collection_id: &str) -> Result<RecordPage, SourceError>;
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Notion REST client for database queries
pub struct NotionClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.notion_token, &config.notion_api_url)
    }
}

#[async_trait]
impl RecordSource for NotionClient {
    async fn query(&self, collection_id: &str) -> Result<RecordPage, SourceError> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, collection_id);
        debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let parsed: Option<NotionErrorBody> = serde_json::from_str(&body).ok();
            let (code, message) = match parsed {
                Some(err) => (
                    err.code.unwrap_or_else(|| "unknown_error".to_string()),
                    err.message.unwrap_or(body),
                ),
                None => ("unknown_error".to_string(), body),
            };
            return Err(SourceError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let parsed: QueryResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Decode(e.to_string()))?;

        Ok(RecordPage {
            records: parsed.results.iter().map(Record::from_json).collect(),
            has_more: parsed.has_more,
        })
    }
}
