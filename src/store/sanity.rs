use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use spdlog::debug;

use crate::config::Store;
use crate::store::{ContentStore, Query, StoreError, StoreResult};

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    description: Option<String>,
}

/// HTTP client for the hosted query API.
pub struct SanityClient {
    client: Client,
    query_url: String,
    token: Option<String>,
}

impl SanityClient {
    pub fn new(store: &Store) -> StoreResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = store.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(SanityClient {
            client: builder.build()?,
            query_url: query_url(store),
            token: store.token.clone(),
        })
    }
}

fn query_url(store: &Store) -> String {
    let host = if store.use_cdn { "apicdn.sanity.io" } else { "api.sanity.io" };
    let api_version = store.api_version.trim_start_matches('v');
    format!("https://{}.{}/v{}/data/query/{}", store.project_id, host, api_version, store.dataset)
}

/// `query` plus one `$name` pair per parameter, values JSON encoded.
fn query_pairs(query: &Query) -> StoreResult<Vec<(String, String)>> {
    let mut pairs = vec![("query".to_string(), query.groq())];
    for (name, value) in query.params() {
        pairs.push((format!("${}", name), serde_json::to_string(&value)?));
    }
    Ok(pairs)
}

fn error_description(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error: Some(ErrorDetail { description: Some(desc) }) }) => desc,
        _ if body.is_empty() => "empty response".to_string(),
        _ => body.to_string(),
    }
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn fetch(&self, query: &Query) -> StoreResult<Value> {
        debug!("Querying content store: {:?}", query);

        let mut request = self.client.get(&self.query_url).query(&query_pairs(query)?);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                description: error_description(&body),
            });
        }

        let response: QueryResponse = serde_json::from_str(&body)?;
        Ok(response.result)
    }
}
