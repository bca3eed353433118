//! Row-oriented REST access to the Postgres gateway.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{FetchError, Result};

/// Maximum number of attempts for a single fetch
const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Initial sleep duration in milliseconds before retrying
const INITIAL_RETRY_DELAY_MS: u64 = 1000;

/// Sort direction for an order clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// HTTP client for the gateway's row interface.
///
/// Queries become `GET {base}/rest/v1/{table}?select=*` with `column=eq.value`
/// filters and an `order=column.dir` clause; responses are JSON arrays of
/// rows. Transport failures are retried with exponential backoff; an error
/// status or an undecodable batch fails the fetch outright since retrying
/// those cannot help.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(FetchError::Config("base URL is empty".to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Start a select over all columns of `table`.
    pub fn table(&self, table: &str) -> SelectQuery<'_> {
        SelectQuery {
            client: self,
            table: table.to_string(),
            filters: Vec::new(),
            order: None,
        }
    }
}

/// Builder for one select query.
pub struct SelectQuery<'a> {
    client: &'a RestClient,
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, SortOrder)>,
}

impl SelectQuery<'_> {
    /// Keep rows where `column` equals `value`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    /// Order rows by `column`.
    pub fn order(mut self, column: &str, direction: SortOrder) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), "*".to_string())];
        for (column, value) in &self.filters {
            pairs.push((column.clone(), format!("eq.{value}")));
        }
        if let Some((column, direction)) = &self.order {
            let direction = match direction {
                SortOrder::Ascending => "asc",
                SortOrder::Descending => "desc",
            };
            pairs.push(("order".to_string(), format!("{column}.{direction}")));
        }
        pairs
    }

    /// Run the query and decode the row array.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let url = format!("{}/rest/v1/{}", self.client.base_url, self.table);
        let pairs = self.query_pairs();
        let mut sleep_millis = INITIAL_RETRY_DELAY_MS;
        let mut attempt = 1;

        loop {
            debug!("GET {} (attempt {}/{})", url, attempt, MAX_RETRY_ATTEMPTS);
            let request = self
                .client
                .http
                .get(&url)
                .query(&pairs)
                .header("apikey", &self.client.api_key)
                .bearer_auth(&self.client.api_key);

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        return Err(FetchError::Status {
                            table: self.table,
                            status,
                        });
                    }
                    let body = response.text().await?;
                    return serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                        table: self.table,
                        source,
                    });
                }
                Err(error) => {
                    if attempt == MAX_RETRY_ATTEMPTS {
                        return Err(FetchError::Http(error));
                    }
                    warn!(
                        "Attempt {}/{}: request for {} failed: {}",
                        attempt, MAX_RETRY_ATTEMPTS, self.table, error
                    );
                    tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
                    sleep_millis *= 2;
                    attempt += 1;
                }
            }
        }
    }
}
