//! CrossRef works fetcher.
//!
//! Pages through the works endpoint with an increasing offset, accumulating
//! items until the source returns an empty page, a non-success status, or the
//! configured cap is reached. The accumulated items are truncated to the cap
//! and written as a single JSON array.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::Result;
use crate::http::ACCEPT;
use crate::query;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Output file name inside the output directory.
pub const OUTPUT_FILE: &str = "crossref_results.json";

#[derive(Debug, Deserialize)]
struct WorksResponse {
    #[serde(default)]
    message: WorksMessage,
}

#[derive(Debug, Default, Deserialize)]
struct WorksMessage {
    #[serde(default)]
    items: Vec<Value>,
}

/// Fetch works page by page, persist the accumulated items, and return the
/// retained record count.
///
/// A non-success status stops the pagination; if nothing was accumulated by
/// then, no output file is written.
pub async fn fetch(client: &reqwest::Client, cfg: &Config, audit: &AuditLog) -> Result<usize> {
    let mut results: Vec<Value> = Vec::new();
    let mut offset = 0usize;
    let mut status_failure = false;

    loop {
        let url = page_url(cfg, offset);
        info!(url = %url, offset, "Sending request to CrossRef");

        let response = client.get(&url).header("Accept", ACCEPT).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "CrossRef request failed");
            audit.log(&format!(
                "CrossRef request failed with status {}",
                status.as_u16()
            ))?;
            status_failure = true;
            break;
        }

        let body = response.text().await?;
        let page: WorksResponse = serde_json::from_str(&body)?;
        if page.message.items.is_empty() {
            debug!(offset, "Empty page, stopping pagination");
            break;
        }

        results.extend(page.message.items);
        debug!(accumulated = results.len(), "Page parsed");

        if results.len() >= cfg.crossref_cap {
            results.truncate(cfg.crossref_cap);
            break;
        }

        offset += cfg.crossref_rows;
        tokio::time::sleep(cfg.rate_limit).await;
    }

    if status_failure && results.is_empty() {
        return Ok(0);
    }

    let json = serde_json::to_string_pretty(&results)?;
    std::fs::write(cfg.outdir.join(OUTPUT_FILE), json)?;
    Ok(results.len())
}

/// Build the URL for one result page.
fn page_url(cfg: &Config, offset: usize) -> String {
    format!(
        "{}?query.bibliographic={}&filter=from-pub-date:{}-01-01,until-pub-date:{}-12-31&rows={}&offset={}",
        cfg.crossref_base,
        query::joined_query(&cfg.terms),
        cfg.start_year,
        cfg.end_year,
        cfg.crossref_rows,
        offset
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_page_url_contains_filters_and_offset() {
        let cfg = Config::for_testing("http://127.0.0.1:1", PathBuf::from("out"));
        let url = page_url(&cfg, 200);
        assert!(url.contains("query.bibliographic="));
        assert!(url.contains("filter=from-pub-date:2016-01-01,until-pub-date:2025-12-31"));
        assert!(url.contains("rows=200"));
        assert!(url.ends_with("offset=200"));
    }

    #[test]
    fn test_works_response_tolerates_missing_message() {
        let page: WorksResponse = serde_json::from_str("{}").expect("parse");
        assert!(page.message.items.is_empty());

        let page: WorksResponse =
            serde_json::from_str(r#"{"message":{"items":[{"DOI":"10.1/x"}]}}"#).expect("parse");
        assert_eq!(page.message.items.len(), 1);
    }
}
