//! Paper data models matching the E-utilities JSON schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel written for text fields with no usable value.
pub const NOT_AVAILABLE: &str = "N/A";

/// esearch response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsearchResponse {
    /// Search result block.
    #[serde(default)]
    pub esearchresult: EsearchResult,
}

/// The search result block of an esearch response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsearchResult {
    /// Paper identifiers, ordered by relevance as returned by the service.
    #[serde(default)]
    pub idlist: Vec<String>,
}

/// esummary response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryEnvelope {
    /// Identifier → summary record, in response order. The service embeds a
    /// bookkeeping `"uids"` entry alongside the paper entries.
    #[serde(default)]
    pub result: Map<String, Value>,
}

/// Summary metadata for one paper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperSummary {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication date as reported by the service.
    #[serde(default)]
    pub pubdate: Option<String>,

    /// Author name → affiliation, in response order.
    #[serde(default)]
    pub affiliations: Map<String, Value>,

    /// Free-text correspondence block.
    #[serde(default)]
    pub correspondence: Option<String>,
}

impl PaperSummary {
    /// Parse a summary entry best-effort; a malformed entry degrades to the
    /// all-absent record rather than aborting the batch.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Get the title, falling back to the sentinel if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Get the publication date, falling back to the sentinel if not available.
    #[must_use]
    pub fn pubdate_or_default(&self) -> &str {
        self.pubdate.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// One CSV row. Created once per paper, serialized, and discarded.
#[derive(Debug, Clone, Serialize)]
pub struct OutputRecord {
    /// PubMed identifier.
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,

    /// Paper title, or the sentinel when absent.
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication date, or the sentinel when absent.
    #[serde(rename = "Publication Date")]
    pub publication_date: String,

    /// Non-academic author names, ", "-joined.
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,

    /// Affiliations of those authors, ", "-joined and index-aligned with the
    /// author list.
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,

    /// First email found in the correspondence text, or the sentinel.
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl OutputRecord {
    /// CSV header row, in output column order.
    pub const HEADER: [&'static str; 6] = [
        "PubmedID",
        "Title",
        "Publication Date",
        "Non-academic Author(s)",
        "Company Affiliation(s)",
        "Corresponding Author Email",
    ];
}
