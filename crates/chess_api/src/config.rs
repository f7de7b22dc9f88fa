//! Client configuration
//!
//! [`ClientConfig`] carries the endpoint and the transport timeout. It
//! deserializes with defaults for missing fields, so an empty JSON object is
//! a valid configuration pointing at the public service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public chess-api.com analysis endpoint
pub const DEFAULT_ENDPOINT: &str = "https://chess-api.com/v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// URL every best-move query is POSTed to
    pub endpoint: String,

    /// Whole-request timeout applied by the transport, in seconds
    ///
    /// `None` keeps the transport's own default (no timeout for reqwest).
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
