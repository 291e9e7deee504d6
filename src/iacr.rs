//! IACR eprint archive search scrape.
//!
//! The search page is plain HTML; records are counted as result-title anchors.
//! The request goes out with a browser-style User-Agent instead of the shared
//! bot identity.

use crate::audit::AuditLog;
use crate::config::Config;
use crate::error::{CollectError, Result};
use crate::http::{ACCEPT, BROWSER_USER_AGENT};
use scraper::{Html, Selector};
use tracing::{info, warn};

/// Output file name inside the output directory.
pub const OUTPUT_FILE: &str = "iacr_search.html";

/// Search phrase used against the archive.
const SEARCH_PHRASE: &str = "post-quantum cryptography";

/// Fetch the search page, persist it, and return the result-anchor count.
pub async fn fetch(client: &reqwest::Client, cfg: &Config, audit: &AuditLog) -> Result<usize> {
    let url = format!(
        "{}?search={}",
        cfg.iacr_base,
        urlencoding::encode(SEARCH_PHRASE)
    );
    info!(url = %url, "Sending request to IACR");

    let response = client
        .get(&url)
        .header("User-Agent", BROWSER_USER_AGENT)
        .header("Accept", ACCEPT)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        warn!(status = %status, "IACR request failed");
        audit.log(&format!("IACR request failed with status {}", status.as_u16()))?;
        return Ok(0);
    }

    let html = response.text().await?;
    std::fs::write(cfg.outdir.join(OUTPUT_FILE), &html)?;

    count_title_anchors(&html)
}

/// Count `a.list-title` anchors carrying an `href` attribute.
pub fn count_title_anchors(html: &str) -> Result<usize> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("a.list-title").map_err(|e| CollectError::Parse(e.to_string()))?;
    Ok(document
        .select(&selector)
        .filter(|a| a.value().attr("href").is_some())
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_title_anchors() {
        let html = r#"<html><body>
            <a class="list-title" href="/2024/001">Lattice signatures</a>
            <a class="list-title" href="/2024/002">KEM combiners</a>
            <a class="list-title" href="/2024/003">Hybrid TLS</a>
            <a class="other" href="/about">About</a>
        </body></html>"#;
        assert_eq!(count_title_anchors(html).expect("count"), 3);
    }

    #[test]
    fn test_count_title_anchors_requires_href() {
        let html = r#"<html><body>
            <a class="list-title" href="/2024/001">Counted</a>
            <a class="list-title">Not counted</a>
        </body></html>"#;
        assert_eq!(count_title_anchors(html).expect("count"), 1);
    }

    #[test]
    fn test_count_title_anchors_empty_page() {
        assert_eq!(
            count_title_anchors("<html><body></body></html>").expect("count"),
            0
        );
    }
}
