//! Recorded HTTP transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One HTTP exchange captured by the instrumented service under test.
///
/// Transactions are produced by the capture side and only ever read by the
/// matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    /// API key of the tenant that produced the traffic.
    #[serde(rename = "apikey", default)]
    pub api_key: String,
    /// Run correlation id; equals `TestRun::run_header_id` of the owning run.
    #[serde(rename = "testrunid", default)]
    pub run_header_id: String,
    /// HTTP status code returned to the caller.
    pub status: u16,
    /// Request path as observed on the wire.
    pub url: String,
    /// Serialized request headers, when captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<String>,
    /// Serialized request body (JSON text).
    #[serde(default)]
    pub request: String,
    /// Serialized response body.
    #[serde(default)]
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction with empty bodies, stamped now.
    pub fn new(id: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        Self {
            id: id.into(),
            api_key: String::new(),
            run_header_id: String::new(),
            status,
            url: url.into(),
            headers: None,
            request: String::new(),
            response: String::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_request(mut self, body: impl Into<String>) -> Self {
        self.request = body.into();
        self
    }

    pub fn with_run_header_id(mut self, run_header_id: impl Into<String>) -> Self {
        self.run_header_id = run_header_id.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
