//! Connection settings for the hosted role table.

use std::time::Duration;

use crate::error::{Result, RoledeckError};

/// Table holding the design roles.
pub const DEFAULT_TABLE: &str = "design_roles";

/// Which kind of key the configuration ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Service-role key, bypasses row-level security.
    ServiceRole,
    /// Public anon key, subject to row-level security.
    Anon,
}

/// Settings for [`SupabaseStore`](super::SupabaseStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// API key sent as `apikey` and bearer token.
    pub api_key: String,
    pub key_kind: KeyKind,
    pub table: String,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            key_kind: KeyKind::ServiceRole,
            table: DEFAULT_TABLE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`.
    ///
    /// - URL: `SUPABASE_URL`, falling back to `VITE_SUPABASE_URL`.
    /// - Key: `SUPABASE_SERVICE_ROLE_KEY`, else `SUPABASE_ANON_KEY` or
    ///   `VITE_SUPABASE_ANON_KEY`.
    /// - Table: `ROLEDECK_TABLE`, default `design_roles`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = get("SUPABASE_URL")
            .or_else(|| get("VITE_SUPABASE_URL"))
            .ok_or_else(|| {
                RoledeckError::Config(
                    "SUPABASE_URL (or VITE_SUPABASE_URL) is not set".to_string(),
                )
            })?;

        let (api_key, key_kind) = match get("SUPABASE_SERVICE_ROLE_KEY") {
            Some(key) => (key, KeyKind::ServiceRole),
            None => {
                let key = get("SUPABASE_ANON_KEY")
                    .or_else(|| get("VITE_SUPABASE_ANON_KEY"))
                    .ok_or_else(|| {
                        RoledeckError::Config(
                            "no Supabase key set (SUPABASE_SERVICE_ROLE_KEY or SUPABASE_ANON_KEY)"
                                .to_string(),
                        )
                    })?;
                (key, KeyKind::Anon)
            }
        };

        let mut config = Self::new(url.trim_end_matches('/'), api_key);
        config.key_kind = key_kind;
        if let Some(table) = get("ROLEDECK_TABLE") {
            config.table = table;
        }
        Ok(config)
    }

    /// Base URL of the table endpoint.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_prefers_service_key() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("VITE_SUPABASE_URL", "https://abc.supabase.co/"),
            ("VITE_SUPABASE_ANON_KEY", "anon"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "service");
        assert_eq!(config.key_kind, KeyKind::ServiceRole);
        assert_eq!(config.table_url(), "https://abc.supabase.co/rest/v1/design_roles");
    }

    #[test]
    fn test_falls_back_to_anon_key() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("VITE_SUPABASE_ANON_KEY", "anon"),
            ("ROLEDECK_TABLE", "roles_staging"),
        ]))
        .unwrap();

        assert_eq!(config.key_kind, KeyKind::Anon);
        assert_eq!(config.table, "roles_staging");
    }

    #[test]
    fn test_missing_url_or_key() {
        let err = StoreConfig::from_lookup(lookup(&[("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));

        let err = StoreConfig::from_lookup(lookup(&[("SUPABASE_URL", "https://x"), ("SUPABASE_ANON_KEY", " ")]))
            .unwrap_err();
        assert!(matches!(err, RoledeckError::Config(_)));
    }
}
