//! Shared HTTP client construction and request headers.

use crate::error::{CollectError, Result};
use std::time::Duration;

/// User-Agent sent to every source except the IACR archive.
pub const USER_AGENT: &str = "pqcollect/0.1 (+mailto:pqcollect@example.com)";

/// Browser-style User-Agent for the IACR search page.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Accept header listing every payload type the sources return.
pub const ACCEPT: &str =
    "application/json, application/atom+xml, application/xml, text/html;q=0.9";

/// Build the HTTP client shared by all fetchers.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| CollectError::Config(format!("Failed to build HTTP client: {e}")))
}
