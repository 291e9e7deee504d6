//! Fixed run configuration.
//!
//! Everything a collection run depends on is assembled here once at startup:
//! the topic term list, date-range bounds, result caps, endpoints, and output
//! paths. Nothing in the configuration is mutated afterwards.

use std::path::PathBuf;
use std::time::Duration;

/// Topic terms queried against every source, in query order.
pub const TERMS: &[&str] = &[
    "post-quantum cryptography",
    "hybrid key exchange",
    "PQC migration",
    "hybrid KEM",
    "TLS PQC",
    "KEMTLS",
];

/// Environment variable holding the optional Springer API key.
pub const SPRINGER_KEY_VAR: &str = "SPRINGER_API_KEY";

/// Immutable configuration for one collection run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Topic terms, in query order.
    pub terms: Vec<String>,
    /// Earliest publication year accepted by the CrossRef date filter.
    pub start_year: i32,
    /// Latest publication year accepted by the CrossRef date filter.
    pub end_year: i32,
    /// Hard cap on accumulated CrossRef records.
    pub crossref_cap: usize,
    /// CrossRef page size.
    pub crossref_rows: usize,
    /// Fixed sleep inserted after every network call.
    pub rate_limit: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Output directory, created if absent.
    pub outdir: PathBuf,
    /// Local bibliography file merged into the final output.
    pub bib_file: PathBuf,
    /// Springer API key; `None` when the environment variable is unset.
    pub springer_api_key: Option<String>,
    /// arXiv export API endpoint.
    pub arxiv_base: String,
    /// CrossRef works endpoint.
    pub crossref_base: String,
    /// DBLP publication search endpoint.
    pub dblp_base: String,
    /// IACR eprint archive search page.
    pub iacr_base: String,
    /// Springer metadata endpoint.
    pub springer_base: String,
}

impl Config {
    /// Build the standard configuration, reading the Springer key from the
    /// environment.
    pub fn new(outdir: PathBuf) -> Self {
        Self {
            terms: TERMS.iter().map(|s| (*s).to_string()).collect(),
            start_year: 2016,
            end_year: 2025,
            crossref_cap: 400,
            crossref_rows: 200,
            rate_limit: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
            outdir,
            bib_file: PathBuf::from("export.bib"),
            springer_api_key: std::env::var(SPRINGER_KEY_VAR).ok(),
            arxiv_base: "https://export.arxiv.org/api/query".to_string(),
            crossref_base: "https://api.crossref.org/works".to_string(),
            dblp_base: "https://dblp.org/search/publ/api".to_string(),
            iacr_base: "https://eprint.iacr.org/search".to_string(),
            springer_base: "http://api.springernature.com/metadata/json".to_string(),
        }
    }

    /// Configuration pointing every endpoint at a local test server, with no
    /// rate-limit sleep and no credential.
    pub fn for_testing(base_url: &str, outdir: PathBuf) -> Self {
        let mut cfg = Self::new(outdir);
        cfg.rate_limit = Duration::ZERO;
        cfg.springer_api_key = None;
        cfg.arxiv_base = format!("{base_url}/arxiv/query");
        cfg.crossref_base = format!("{base_url}/crossref/works");
        cfg.dblp_base = format!("{base_url}/dblp/search");
        cfg.iacr_base = format!("{base_url}/iacr/search");
        cfg.springer_base = format!("{base_url}/springer/metadata");
        cfg
    }
}
