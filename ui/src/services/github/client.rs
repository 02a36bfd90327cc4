use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{error, info};

use super::errors::{ClientError, ClientResult};
use crate::services::config::DashboardConfig;

/// All queries go against this endpoint.
pub const GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

const RESPONSE_CACHE_CAPACITY: usize = 100;

/// GraphQL client bound to the GitHub endpoint.
///
/// Clones share the response cache, so the instance created at startup is the
/// process-wide client. The cache is keyed by query text plus serialized
/// variables; a hit skips the network entirely.
#[derive(Clone)]
pub struct GithubClient {
    http_client: Client,
    authorization: String,
    cache: Arc<Mutex<LruCache<String, Value>>>,
}

impl GithubClient {
    /// Create a client from the dashboard configuration.
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            http_client: {
                Client::builder()
                    .user_agent("migration-status-dashboard/1.0")
                    .build()
                    .expect("Failed to create HTTP client")
            },
            authorization: config.authorization_header(),
            cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(RESPONSE_CACHE_CAPACITY).unwrap(),
            ))),
        }
    }

    /// Header value sent as `Authorization`; empty when no token is configured.
    pub fn authorization_value(&self) -> &str {
        &self.authorization
    }

    fn cache_key(query: &str, variables: &Value) -> String {
        format!("{}::{}", query, variables)
    }

    /// Execute a GraphQL query, serving repeats from the response cache.
    ///
    /// No retry and no timeout beyond reqwest defaults. GraphQL-level errors
    /// are surfaced even on HTTP 200.
    pub async fn execute(&self, query: &str, variables: Value) -> ClientResult<Value> {
        let key = Self::cache_key(query, &variables);
        if let Ok(mut cache) = self.cache.lock() {
            if let Some(hit) = cache.get(&key) {
                return Ok(hit.clone());
            }
        }

        info!("Executing GraphQL query against {}", GRAPHQL_ENDPOINT);

        let payload = json!({
            "query": query,
            "variables": variables,
        });

        let response = self
            .http_client
            .post(GRAPHQL_ENDPOINT)
            .header("Authorization", self.authorization.clone())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("GraphQL endpoint answered {}", status);
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let value: Value = response.json().await?;

        // GitHub reports query-level failures as an `errors` array on HTTP 200.
        if let Some(message) = extract_graphql_error(&value) {
            error!("GraphQL query failed: {}", message);
            return Err(ClientError::GraphqlError { message });
        }

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, value.clone());
        }

        Ok(value)
    }
}

/// First message of the response's `errors` array, if any.
fn extract_graphql_error(value: &Value) -> Option<String> {
    let errors = value.get("errors")?.as_array()?;
    if errors.is_empty() {
        return None;
    }
    Some(
        errors
            .first()
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("unknown GraphQL error")
            .to_string(),
    )
}
