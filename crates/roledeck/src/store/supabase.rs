//! Supabase (PostgREST) role store.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, RoledeckError};
use crate::record::Record;

use super::config::{KeyKind, StoreConfig};
use super::provider::{RoleStore, StoreOperation};

/// Column the store filters on for single-record writes.
const NAME_COLUMN: &str = "role-name";

/// Role store talking to a Supabase project's REST endpoint.
pub struct SupabaseStore {
    client: Client,
    config: StoreConfig,
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl SupabaseStore {
    /// Create a store for the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.key_kind == KeyKind::Anon {
            debug!("using the anon key; writes are subject to row-level security");
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("roledeck/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(build_headers(&config.api_key)?)
            .build()
            .map_err(|e| RoledeckError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables (see [`StoreConfig::from_lookup`]).
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn name_filter(name: &str) -> [(&'static str, String); 1] {
        [(NAME_COLUMN, format!("eq.{}", name))]
    }

    /// Send a request, turning transport failures and non-2xx answers into a message.
    fn send(
        &self,
        operation: StoreOperation,
        request: RequestBuilder,
    ) -> std::result::Result<Response, String> {
        let response = request
            .send()
            .map_err(|e| format!("{} request failed: {}", operation, e))?;

        let status = response.status();
        debug!(%operation, %status, table = %self.config.table, "store response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(match serde_json::from_str::<PostgrestError>(&body) {
            Ok(err) => describe(&err),
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => format!("HTTP {}: {}", status, body.trim()),
        })
    }
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let invalid = |e: reqwest::header::InvalidHeaderValue| {
        RoledeckError::Config(format!("Invalid API key: {}", e))
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("apikey", HeaderValue::from_str(api_key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(invalid)?,
    );
    Ok(headers)
}

fn describe(err: &PostgrestError) -> String {
    let mut message = err.message.clone();
    if let Some(details) = err.details.as_deref().filter(|d| !d.is_empty()) {
        message.push_str(&format!(" ({})", details));
    }
    if let Some(hint) = err.hint.as_deref().filter(|h| !h.is_empty()) {
        message.push_str(&format!(" hint: {}", hint));
    }
    message
}

impl RoleStore for SupabaseStore {
    fn name(&self) -> &str {
        &self.config.table
    }

    fn select_all(&self) -> Result<Vec<Record>> {
        let request = self
            .client
            .get(self.config.table_url())
            .query(&[("select", "*")]);

        let response = self
            .send(StoreOperation::SelectAll, request)
            .map_err(RoledeckError::Fetch)?;

        response
            .json::<Vec<Record>>()
            .map_err(|e| RoledeckError::Fetch(format!("Failed to parse rows: {}", e)))
    }

    fn insert_many(&self, records: &[Record]) -> Result<()> {
        let request = self
            .client
            .post(self.config.table_url())
            .header("Prefer", "return=minimal")
            .json(records);

        self.send(StoreOperation::Insert, request)
            .map(|_| ())
            .map_err(RoledeckError::Store)
    }

    fn update_one(&self, name: &str, record: &Record) -> Result<()> {
        let request = self
            .client
            .patch(self.config.table_url())
            .query(&Self::name_filter(name))
            .header("Prefer", "return=minimal")
            .json(record);

        self.send(StoreOperation::Update, request)
            .map(|_| ())
            .map_err(RoledeckError::Store)
    }

    fn delete_one(&self, name: &str) -> Result<()> {
        let request = self
            .client
            .delete(self.config.table_url())
            .query(&Self::name_filter(name));

        self.send(StoreOperation::Delete, request)
            .map(|_| ())
            .map_err(RoledeckError::Store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_postgrest_error() {
        let err = PostgrestError {
            message: "new row violates row-level security policy".to_string(),
            details: Some(String::new()),
            hint: Some("check policies".to_string()),
        };
        assert_eq!(
            describe(&err),
            "new row violates row-level security policy hint: check policies"
        );
    }

    #[test]
    fn test_invalid_key_rejected() {
        let config = StoreConfig::new("http://localhost", "bad\nkey");
        assert!(matches!(
            SupabaseStore::new(config),
            Err(RoledeckError::Config(_))
        ));
    }
}
