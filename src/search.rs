//! Web search backend adapter: Tavily.
//!
//! The raw backend response is normalized into [`SearchOutcome`], a closed
//! shape, at this boundary. The researcher step matches on the outcome and
//! never inspects raw JSON itself.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Production Tavily endpoint.
pub const TAVILY_BASE_URL: &str = "https://api.tavily.com";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request to search backend failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search backend returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A well-formed search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub url: String,
    pub content: String,
}

/// One element of a search response. Elements missing `url` or `content` are
/// preserved as `Malformed` so the caller can log a per-record diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchItem {
    Record(SearchRecord),
    Malformed(Value),
}

/// The complete outcome of a search call, after shape normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Results(Vec<SearchItem>),
    /// The backend answered the request with a bare error message.
    ApiError(String),
    /// The response decoded as JSON but matched none of the known shapes.
    UnhandledShape(Value),
}

/// A web search backend: plain-text query in, normalized outcome out.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError>;
}

/// Tavily search client.
pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    max_results: usize,
    base_url: String,
}

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

impl TavilyClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: String, max_results: usize) -> Self {
        Self::with_base_url(api_key, max_results, TAVILY_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_base_url(api_key: String, max_results: usize, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            max_results,
            base_url,
        }
    }
}

#[async_trait]
impl SearchClient for TavilyClient {
    async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let request = TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results: self.max_results,
        };

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let payload: Value = response.json().await?;
        Ok(normalize(payload, self.max_results))
    }
}

/// Map a raw backend payload onto the closed outcome shape.
fn normalize(payload: Value, max_results: usize) -> SearchOutcome {
    match payload {
        Value::String(message) => SearchOutcome::ApiError(message),
        Value::Object(mut map) => {
            if let Some(Value::Array(results)) = map.remove("results") {
                let items = results
                    .into_iter()
                    .take(max_results)
                    .map(item_from_value)
                    .collect();
                SearchOutcome::Results(items)
            } else if let Some(Value::String(message)) = map.remove("error") {
                SearchOutcome::ApiError(message)
            } else {
                SearchOutcome::UnhandledShape(Value::Object(map))
            }
        }
        other => SearchOutcome::UnhandledShape(other),
    }
}

fn item_from_value(value: Value) -> SearchItem {
    let url = value
        .get("url")
        .and_then(Value::as_str)
        .map(str::to_string);
    let content = value
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_string);

    match (url, content) {
        (Some(url), Some(content)) => SearchItem::Record(SearchRecord { url, content }),
        _ => SearchItem::Malformed(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn normalize_splits_valid_and_malformed_records() {
        let payload = json!({
            "results": [
                { "url": "https://a.example", "content": "first", "title": "A" },
                { "title": "missing fields" }
            ]
        });

        let outcome = normalize(payload, 5);
        let items = match outcome {
            SearchOutcome::Results(items) => items,
            other => panic!("expected results, got: {other:?}"),
        };
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            SearchItem::Record(SearchRecord {
                url: "https://a.example".to_string(),
                content: "first".to_string(),
            })
        );
        assert!(matches!(items[1], SearchItem::Malformed(_)));
    }

    #[test]
    fn normalize_caps_results_at_max() {
        let payload = json!({
            "results": [
                { "url": "u1", "content": "c1" },
                { "url": "u2", "content": "c2" },
                { "url": "u3", "content": "c3" }
            ]
        });

        match normalize(payload, 2) {
            SearchOutcome::Results(items) => assert_eq!(items.len(), 2),
            other => panic!("expected results, got: {other:?}"),
        }
    }

    #[test]
    fn normalize_maps_string_payload_to_api_error() {
        let outcome = normalize(json!("rate limited"), 5);
        assert_eq!(outcome, SearchOutcome::ApiError("rate limited".to_string()));
    }

    #[test]
    fn normalize_flags_unknown_shapes() {
        assert!(matches!(
            normalize(json!({ "answers": [] }), 5),
            SearchOutcome::UnhandledShape(_)
        ));
        assert!(matches!(
            normalize(json!(42), 5),
            SearchOutcome::UnhandledShape(_)
        ));
    }

    #[tokio::test]
    async fn search_sends_query_and_normalizes_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(json!({
                "api_key": "test-key",
                "query": "rust history",
                "max_results": 5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [ { "url": "u1", "content": "c1" } ]
            })))
            .mount(&server)
            .await;

        let client = TavilyClient::with_base_url("test-key".to_string(), 5, server.uri());
        let outcome = client.search("rust history").await.unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Results(vec![SearchItem::Record(SearchRecord {
                url: "u1".to_string(),
                content: "c1".to_string(),
            })])
        );
    }

    #[tokio::test]
    async fn search_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = TavilyClient::with_base_url("test-key".to_string(), 5, server.uri());
        let err = client.search("q").await.unwrap_err();
        match err {
            SearchError::Status { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected status error, got: {other}"),
        }
    }
}
