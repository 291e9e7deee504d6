//! # pqcollect
//!
//! Post-quantum cryptography literature collection pipeline.
//!
//! ## Modules
//!
//! - [`config`] - fixed run configuration (terms, date range, endpoints)
//! - [`query`] - per-source query string construction
//! - [`arxiv`], [`crossref`], [`dblp`], [`iacr`], [`springer`] - source fetchers
//! - [`merge`] - local BibTeX merge step
//! - [`audit`] - append-only audit log
//! - [`pipeline`] - sequential collection driver
//! - [`error`] - custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pqcollect::{config::Config, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::new("pqcollect_output".into());
//!     let counts = pipeline::run(&cfg).await?;
//!     println!("CrossRef records: {}", counts.crossref);
//!     Ok(())
//! }
//! ```

pub mod arxiv;
pub mod audit;
pub mod config;
pub mod crossref;
pub mod dblp;
pub mod error;
pub mod http;
pub mod iacr;
pub mod merge;
pub mod pipeline;
pub mod query;
pub mod springer;

pub use error::{CollectError, Result};
