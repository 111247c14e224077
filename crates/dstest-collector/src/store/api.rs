//! HTTP client for the DSTest configuration API.

use super::{TestRunSource, TestSuiteSource};
use crate::error::StoreError;
use async_trait::async_trait;
use dstest_matcher::{TestRun, TestSuite};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Reads test runs and suites from the configuration API.
pub struct ConfigApiClient {
    client: Client,
    base_url: String,
    base: Url,
}

impl ConfigApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000/dstestapi`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url).map_err(|e| StoreError::InvalidUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(StoreError::InvalidUrl {
                url: base_url,
                message: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a test run definition with its suite resolved.
    pub async fn get_test_run(&self, run_id: &str) -> Result<TestRun, StoreError> {
        self.get_json(self.endpoint("testruns", run_id)?).await
    }

    /// Get a test suite definition.
    pub async fn get_test_suite(&self, suite_id: &str) -> Result<TestSuite, StoreError> {
        self.get_json(self.endpoint("testsuites", suite_id)?).await
    }

    /// `{base}/{collection}/{id}`, with `id` percent-encoded as one segment.
    fn endpoint(&self, collection: &str, id: &str) -> Result<Url, StoreError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidUrl {
                url: self.base_url.clone(),
                message: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .push(collection)
            .push(id);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, StoreError> {
        debug!("GET {url}");
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TestRunSource for ConfigApiClient {
    async fn fetch_test_run(&self, run_id: &str) -> Result<TestRun, StoreError> {
        self.get_test_run(run_id).await
    }
}

#[async_trait]
impl TestSuiteSource for ConfigApiClient {
    async fn fetch_test_suite(&self, suite_id: &str) -> Result<TestSuite, StoreError> {
        self.get_test_suite(suite_id).await
    }
}
