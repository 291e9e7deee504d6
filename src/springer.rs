//! Springer metadata fetcher, gated on an API key.
//!
//! Skipped entirely when `SPRINGER_API_KEY` is unset: one skip line in the
//! audit log, no network request. The key is sent as a query parameter and
//! never logged.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::Result;
use crate::http::ACCEPT;
use crate::query;
use serde_json::Value;
use tracing::{info, warn};

/// Output file name inside the output directory.
pub const OUTPUT_FILE: &str = "springer_results.json";

/// Result page size requested from the metadata API.
const PAGE_SIZE: usize = 100;

/// Fetch the metadata document, persist it, and return the record count.
pub async fn fetch(client: &reqwest::Client, cfg: &Config, audit: &AuditLog) -> Result<usize> {
    let Some(key) = cfg.springer_api_key.as_deref() else {
        info!("SPRINGER_API_KEY not set, skipping Springer");
        audit.log("SPRINGER_API_KEY not set - skipping Springer")?;
        return Ok(0);
    };

    let url = format!(
        "{}?q={}&api_key={}&p={}",
        cfg.springer_base,
        query::joined_query(&cfg.terms),
        key,
        PAGE_SIZE
    );
    info!(endpoint = %cfg.springer_base, "Sending request to Springer");

    let response = client.get(&url).header("Accept", ACCEPT).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "Springer request failed");
        audit.log(&format!(
            "Springer request failed with status {}",
            status.as_u16()
        ))?;
        return Ok(0);
    }

    let body = response.text().await?;
    let data: Value = serde_json::from_str(&body)?;
    let count = record_count(&data);

    std::fs::write(
        cfg.outdir.join(OUTPUT_FILE),
        serde_json::to_string_pretty(&data)?,
    )?;
    Ok(count)
}

/// Length of the `records` array, zero when absent.
pub fn record_count(data: &Value) -> usize {
    data.get("records").and_then(Value::as_array).map_or(0, Vec::len)
}
