//! pqcollect - post-quantum cryptography literature collection pipeline.
//!
//! One-shot collector: queries arXiv, CrossRef, DBLP, the IACR eprint
//! archive, and (key-gated) Springer for a fixed set of PQC topic terms,
//! writes each raw response plus a merged local-bibliography dataset into an
//! output directory, and keeps an audit log of lifecycle events.
//!
//! ## Usage
//!
//! ```bash
//! pqcollect
//! SPRINGER_API_KEY=... pqcollect --output ./results
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pqcollect::config::Config;
use pqcollect::pipeline;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Post-quantum cryptography literature collection pipeline
#[derive(Parser)]
#[command(name = "pqcollect")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Output directory
    #[arg(short, long, default_value = "pqcollect_output")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    let cfg = Config::new(cli.output);
    let counts = pipeline::run(&cfg).await.context("Collection run failed")?;

    println!(
        "Collected: arxiv={} crossref={} dblp={} iacr={} springer={}",
        counts.arxiv, counts.crossref, counts.dblp, counts.iacr, counts.springer
    );
    println!("Results in: {}", cfg.outdir.display());
    Ok(())
}
