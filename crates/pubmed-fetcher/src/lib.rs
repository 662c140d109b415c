//! PubMed fetcher
//!
//! Searches PubMed through the NCBI E-utilities API, flags authors whose
//! affiliations look non-academic (no university/college/institute keywords),
//! extracts a corresponding-author email from the correspondence text, and
//! writes one CSV row per paper.
//!
//! The whole system is a single linear pipeline: search → fetch summaries →
//! classify/extract → serialize. Remote failures degrade to empty results
//! rather than aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use pubmed_fetcher::{Config, EntrezClient, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = EntrezClient::new(Config::from_env())?;
//!     pipeline::run(&client, "cancer treatment", "papers.csv".as_ref()).await;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod screen;

pub use client::EntrezClient;
pub use config::Config;
pub use error::ClientError;
