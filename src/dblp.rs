//! DBLP publication search fetcher.
//!
//! Single JSON request; the whole response document is persisted. The hit
//! count tolerates DBLP collapsing a single hit into a bare object.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::Result;
use crate::http::ACCEPT;
use crate::query;
use serde_json::Value;
use tracing::{info, warn};

/// Output file name inside the output directory.
pub const OUTPUT_FILE: &str = "dblp_results.json";

/// Result page size requested from the search API.
const PAGE_SIZE: usize = 200;

/// Fetch the search results, persist them, and return the hit count.
pub async fn fetch(client: &reqwest::Client, cfg: &Config, audit: &AuditLog) -> Result<usize> {
    let url = format!(
        "{}?q={}&format=json&h={}",
        cfg.dblp_base,
        query::joined_query(&cfg.terms),
        PAGE_SIZE
    );
    info!(url = %url, "Sending request to DBLP");

    let response = client.get(&url).header("Accept", ACCEPT).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "DBLP request failed");
        audit.log(&format!("DBLP request failed with status {}", status.as_u16()))?;
        return Ok(0);
    }

    let body = response.text().await?;
    let data: Value = serde_json::from_str(&body)?;
    let count = hit_count(&data);

    std::fs::write(
        cfg.outdir.join(OUTPUT_FILE),
        serde_json::to_string_pretty(&data)?,
    )?;
    Ok(count)
}

/// Number of hits in a DBLP response; a single hit may arrive as an object
/// instead of a one-element array.
pub fn hit_count(data: &Value) -> usize {
    match data.pointer("/result/hits/hit") {
        Some(Value::Array(hits)) => hits.len(),
        Some(Value::Object(_)) => 1,
        _ => 0,
    }
}
