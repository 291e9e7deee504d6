//! arXiv export API fetcher.
//!
//! Single request against the Atom query endpoint; the raw feed is persisted
//! verbatim and the record count is the number of `<entry>` elements.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::{CollectError, Result};
use crate::http::ACCEPT;
use crate::query;
use regex::Regex;
use tracing::{info, warn};

/// Output file name inside the output directory.
pub const OUTPUT_FILE: &str = "arxiv_results.atom";

/// Maximum results requested from the export API.
const MAX_RESULTS: usize = 100;

/// Fetch the arXiv feed, persist it, and return the entry count.
///
/// A non-success status is logged to the audit log and yields a zero count
/// with no output file.
pub async fn fetch(client: &reqwest::Client, cfg: &Config, audit: &AuditLog) -> Result<usize> {
    let url = format!(
        "{}?search_query=all:{}&start=0&max_results={}",
        cfg.arxiv_base,
        query::or_query(&cfg.terms),
        MAX_RESULTS
    );
    info!(url = %url, "Sending request to arXiv");

    let response = client.get(&url).header("Accept", ACCEPT).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "arXiv request failed");
        audit.log(&format!("arXiv request failed with status {}", status.as_u16()))?;
        return Ok(0);
    }

    let body = response.bytes().await?;
    std::fs::write(cfg.outdir.join(OUTPUT_FILE), &body)?;

    count_entries(&String::from_utf8_lossy(&body))
}

/// Count `<entry>` elements in an Atom feed.
pub fn count_entries(atom: &str) -> Result<usize> {
    let re = Regex::new(r"<entry[\s>]").map_err(|e| CollectError::Parse(e.to_string()))?;
    Ok(re.find_iter(atom).count())
}
