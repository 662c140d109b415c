//! Data models for the E-utilities API and the CSV output.
//!
//! Wire models use `#[serde(default)]` throughout: the remote JSON is read
//! best-effort, and absent fields degrade to defaults rather than failing
//! deserialization.

mod paper;

pub use paper::{
    EsearchResponse, EsearchResult, NOT_AVAILABLE, OutputRecord, PaperSummary, SummaryEnvelope,
};
