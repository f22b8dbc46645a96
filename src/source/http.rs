//! Task source backed by an HTTP JSON endpoint.
//!
//! Expects `GET {base_url}/tasks?search=<q>&offset=<n>&limit=<n>` to answer
//! with `{ "items": [...], "has_more": true|false }`.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Page, TaskSource};
use crate::config::RedactedToken;
use crate::error::{Result, TaskdeckError};
use crate::types::Task;

#[derive(Clone)]
pub struct HttpTaskSource {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
    timeout: Duration,
}

impl std::fmt::Debug for HttpTaskSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTaskSource")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(RedactedToken))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTaskSource {
    /// Create a source for `base_url` whose requests give up after `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(TaskdeckError::Config(format!(
                "source.base_url '{base_url}' cannot be used as a base URL"
            )));
        }
        // Url::join drops the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            token: None,
            timeout,
        })
    }

    /// Attach a bearer token to every request
    pub fn with_token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    /// Build the request URL for one page
    pub fn page_url(&self, query: &str, offset: usize, limit: usize) -> Result<Url> {
        let mut url = self.base_url.join("tasks")?;
        {
            let mut pairs = url.query_pairs_mut();
            if !query.is_empty() {
                pairs.append_pair("search", query);
            }
            pairs
                .append_pair("offset", &offset.to_string())
                .append_pair("limit", &limit.to_string());
        }
        Ok(url)
    }
}

impl TaskSource for HttpTaskSource {
    async fn fetch_page(&self, query: &str, offset: usize, limit: usize) -> Result<Page<Task>> {
        let url = self.page_url(query, offset, limit)?;
        tracing::debug!(%url, "fetching task page");

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TaskdeckError::Source(format!(
                    "request timed out after {}s",
                    self.timeout.as_secs()
                ))
            } else {
                TaskdeckError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TaskdeckError::Source(format!(
                "server answered {status} for task page"
            )));
        }

        let page: Page<Task> = response.json().await?;
        Ok(page)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpTaskSource {
        HttpTaskSource::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_page_url_with_search() {
        let url = source("https://tasks.example.com/api")
            .page_url("fix login", 20, 10)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://tasks.example.com/api/tasks?search=fix+login&offset=20&limit=10"
        );
    }

    #[test]
    fn test_page_url_without_search() {
        let url = source("https://tasks.example.com/").page_url("", 0, 20).unwrap();
        assert_eq!(
            url.as_str(),
            "https://tasks.example.com/tasks?offset=0&limit=20"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(HttpTaskSource::new("mailto:someone@example.com", Duration::from_secs(1)).is_err());
        assert!(HttpTaskSource::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let source = source("https://tasks.example.com")
            .with_token(Some(SecretString::from("hunter2".to_string())));
        let debug = format!("{source:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }
}
