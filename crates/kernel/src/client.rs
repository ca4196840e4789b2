//! Content backend client.
//!
//! Executes composed GROQ queries over HTTPS, switching between the
//! publicly cached read path and the token-authenticated preview path.
//! Exactly one attempt per fetch: transient failures surface as
//! [`AppError::Fetch`] and are never retried here.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::query::Groq;

/// Query parameter bag. Ordered so cache keys are deterministic.
pub type Params = BTreeMap<String, Value>;

/// Seam between the resolver and the backend, mockable in tests.
#[async_trait]
pub trait ContentFetch: Send + Sync {
    /// Execute a query and return the decoded `result` payload. A
    /// missing document yields `Value::Null`, not an error.
    async fn fetch(&self, query: &Groq, params: &Params, preview: bool) -> AppResult<Value>;
}

/// HTTP client for the content backend.
pub struct ContentClient {
    http: reqwest::Client,
    public_url: Url,
    preview_url: Url,
    preview_token: Option<String>,
    /// Read cache fronting the public path only; preview requests always
    /// go to origin.
    cache: Cache<String, Value>,
}

/// Backend response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<BackendError>,
}

#[derive(Debug, Deserialize)]
struct BackendError {
    #[serde(default)]
    description: Option<String>,
}

impl ContentClient {
    /// Create a client from configuration. The per-request timeout is
    /// applied by the underlying HTTP client; expiry surfaces as a fetch
    /// error.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

        let public_url = endpoint_url(&config.project_id, "apicdn", &config.api_version, &config.dataset)?;
        let preview_url = endpoint_url(&config.project_id, "api", &config.api_version, &config.dataset)?;

        Ok(Self {
            http,
            public_url,
            preview_url,
            preview_token: config.preview_token.clone(),
            cache: Cache::builder()
                .max_capacity(1024)
                .time_to_live(Duration::from_secs(60))
                .build(),
        })
    }

    fn request_url(&self, query: &Groq, params: &Params, preview: bool) -> Url {
        let mut url = if preview {
            self.preview_url.clone()
        } else {
            self.public_url.clone()
        };
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query.as_str());
            if preview {
                pairs.append_pair("perspective", "previewDrafts");
            }
            // Backend convention: parameters are `$name=<json value>`.
            for (name, value) in params {
                pairs.append_pair(&format!("${name}"), &value.to_string());
            }
        }
        url
    }
}

fn endpoint_url(project_id: &str, host: &str, api_version: &str, dataset: &str) -> AppResult<Url> {
    Url::parse(&format!(
        "https://{project_id}.{host}.sanity.io/v{api_version}/data/query/{dataset}"
    ))
    .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid backend url: {e}")))
}

fn cache_key(query: &Groq, params: &Params) -> String {
    let mut key = String::from(query.as_str());
    for (name, value) in params {
        key.push('\u{1f}');
        key.push_str(name);
        key.push('=');
        key.push_str(&value.to_string());
    }
    key
}

#[async_trait]
impl ContentFetch for ContentClient {
    async fn fetch(&self, query: &Groq, params: &Params, preview: bool) -> AppResult<Value> {
        if preview && self.preview_token.is_none() {
            return Err(AppError::BadRequest(
                "preview mode is not configured".to_string(),
            ));
        }

        let key = cache_key(query, params);
        if !preview && let Some(hit) = self.cache.get(&key).await {
            debug!("content cache hit");
            return Ok(hit);
        }

        let mut request = self.http.get(self.request_url(query, params, preview));
        if preview && let Some(token) = &self.preview_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("backend returned {status}")));
        }

        let envelope: QueryResponse = response
            .json()
            .await
            .map_err(|e| AppError::Fetch(format!("invalid backend response: {e}")))?;

        if let Some(error) = envelope.error {
            return Err(AppError::Fetch(
                error.description.unwrap_or_else(|| "query error".to_string()),
            ));
        }

        let result = envelope.result.unwrap_or(Value::Null);
        if !preview {
            self.cache.insert(key, result.clone()).await;
        }
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn test_config(preview_token: Option<&str>) -> Config {
        Config {
            port: 3000,
            project_id: "abc123".to_string(),
            dataset: "production".to_string(),
            api_version: "2021-03-25".to_string(),
            preview_token: preview_token.map(str::to_string),
            request_timeout_secs: 10,
            theme_config_path: "./theme.config.json".into(),
            theme_styles_path: "./public/theme.styles.css".into(),
        }
    }

    #[test]
    fn public_and_preview_paths_use_different_hosts() {
        let client = ContentClient::new(&test_config(Some("tok"))).unwrap();
        assert_eq!(
            client.public_url.host_str(),
            Some("abc123.apicdn.sanity.io")
        );
        assert_eq!(client.preview_url.host_str(), Some("abc123.api.sanity.io"));
    }

    #[test]
    fn request_url_encodes_query_and_params() {
        let client = ContentClient::new(&test_config(None)).unwrap();
        let mut params = Params::new();
        params.insert("path".to_string(), Value::String("/en/about".to_string()));

        let url = client.request_url(&Groq::new("*[_id == $path][0]"), &params, false);
        let query_string = url.query().unwrap();
        assert!(query_string.contains("query="));
        assert!(query_string.contains("%24path="));
        // Param values travel JSON-encoded.
        assert!(query_string.contains("%2Fen%2Fabout%22"));
    }

    #[test]
    fn preview_adds_drafts_perspective() {
        let client = ContentClient::new(&test_config(Some("tok"))).unwrap();
        let url = client.request_url(&Groq::new("*"), &Params::new(), true);
        assert!(url.query().unwrap().contains("perspective=previewDrafts"));
    }

    #[tokio::test]
    async fn preview_without_token_is_rejected() {
        let client = ContentClient::new(&test_config(None)).unwrap();
        let err = client
            .fetch(&Groq::new("*"), &Params::new(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn cache_key_depends_on_params() {
        let query = Groq::new("*[_type == $t]");
        let mut a = Params::new();
        a.insert("t".to_string(), Value::String("page.blog".to_string()));
        let mut b = Params::new();
        b.insert("t".to_string(), Value::String("page.event".to_string()));

        assert_ne!(cache_key(&query, &a), cache_key(&query, &b));
        assert_eq!(cache_key(&query, &a), cache_key(&query, &a));
    }
}
